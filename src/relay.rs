use crate::constants::*;
use crate::contact::{
    interpret_response, ContactFields, ContactFlow, Effects, FormMessage, RelayError,
    RelayRequest, SubmitStep,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The `#formMsg` element plus its pending auto-hide timer.
#[derive(Clone)]
struct Notice {
    el: web::Element,
    hide_timer: Rc<RefCell<Option<i32>>>,
}

impl Notice {
    fn show(&self, msg: &FormMessage) {
        self.el.set_text_content(Some(&msg.text));
        self.el
            .set_class_name(&format!("form-message {}", msg.kind.css_class()));
        dom::set_style(&self.el, "display", "block");

        dom::clear_timeout(self.hide_timer.borrow_mut().take());
        let this = self.clone();
        *self.hide_timer.borrow_mut() = dom::set_timeout(MESSAGE_HIDE_MS, move || {
            this.hide_timer.borrow_mut().take();
            dom::set_style(&this.el, "display", "none");
        });
    }

    fn dismiss(&self) {
        dom::clear_timeout(self.hide_timer.borrow_mut().take());
        dom::set_style(&self.el, "display", "none");
    }
}

fn field_value(form: &web::HtmlFormElement, name: &str) -> String {
    let Ok(Some(el)) = form.query_selector(&format!("[name=\"{}\"]", name)) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn read_fields(form: &web::HtmlFormElement) -> ContactFields {
    ContactFields {
        name: field_value(form, "name"),
        email: field_value(form, "email"),
        message: field_value(form, "message"),
    }
}

fn set_submit_enabled(form: &web::HtmlFormElement, enabled: bool) {
    let Ok(Some(btn)) = form.query_selector("button[type=\"submit\"], input[type=\"submit\"]") else {
        return;
    };
    if enabled {
        _ = btn.remove_attribute("disabled");
    } else {
        _ = btn.set_attribute("disabled", "");
    }
}

fn apply(form: &web::HtmlFormElement, notice: &Notice, effects: &Effects) {
    if let Some(msg) = &effects.message {
        notice.show(msg);
    }
    if effects.clear_form {
        form.reset();
    }
    if let Some(uri) = &effects.navigate_to {
        if let Some(w) = web::window() {
            _ = w.location().set_href(uri);
        }
    }
    set_submit_enabled(form, effects.submit_enabled);
}

fn js_err(e: JsValue) -> RelayError {
    RelayError::Network(format!("{:?}", e))
}

/// POST the payload to the relay and classify the answer.
async fn post(req: &RelayRequest) -> Result<(), RelayError> {
    let body = serde_json::to_string(req)?;
    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(web::RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));
    let request = web::Request::new_with_str_and_init(RELAY_ENDPOINT, &opts).map_err(js_err)?;
    let headers = request.headers();
    headers.set("Content-Type", "application/json").map_err(js_err)?;
    headers.set("Accept", "application/json").map_err(js_err)?;

    let window = web::window().ok_or_else(|| RelayError::Network("no window".into()))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .unwrap_or_default();
    interpret_response(resp.status(), &text)
}

pub fn install(document: &web::Document) {
    let (Some(form), Some(msg_el)) = (
        document
            .get_element_by_id("contactForm")
            .and_then(|f| f.dyn_into::<web::HtmlFormElement>().ok()),
        document.get_element_by_id("formMsg"),
    ) else {
        log::info!("[contact] no contact form on this page");
        return;
    };
    let notice = Notice {
        el: msg_el,
        hide_timer: Rc::new(RefCell::new(None)),
    };
    let flow = Rc::new(RefCell::new(ContactFlow::default()));

    let f = form.clone();
    let n = notice.clone();
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let step = flow.borrow_mut().submit(&read_fields(&f));
        match step {
            SubmitStep::Invalid(effects) => apply(&f, &n, &effects),
            SubmitStep::Busy => {}
            SubmitStep::Send(req) => {
                set_submit_enabled(&f, false);
                let (f, n, flow) = (f.clone(), n.clone(), flow.clone());
                spawn_local(async move {
                    let outcome = post(&req).await;
                    match &outcome {
                        Ok(()) => log::debug!("[contact] relay accepted message"),
                        Err(e) => log::debug!("[contact] relay failed, using mailto: {}", e),
                    }
                    let effects = flow.borrow_mut().complete(outcome);
                    apply(&f, &n, &effects);
                });
            }
        }
    });

    if let Ok(inputs) = form.query_selector_all("input, textarea") {
        for i in 0..inputs.length() {
            let Some(input) = inputs.item(i) else {
                continue;
            };
            let n = notice.clone();
            dom::listen(&input, "focus", move |_: web::Event| n.dismiss());
        }
    }
}
