use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` to `target` for `event` for the lifetime of the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        listen(&el, "click", move |ev: web::MouseEvent| handler(ev));
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("bad selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// One-shot timer; returns the handle for `clear_timeout`.
pub fn set_timeout(ms: i32, handler: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let closure = Closure::once_into_js(handler);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), ms)
        .ok()
}

#[inline]
pub fn clear_timeout(handle: Option<i32>) {
    if let (Some(w), Some(h)) = (web::window(), handle) {
        w.clear_timeout_with_handle(h);
    }
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Set one inline style property; elements without a style (SVG etc.) are skipped.
#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<web::HtmlElement>() {
        _ = el.style().set_property(property, value);
    }
}

/// Document-space top of an element.
#[inline]
pub fn offset_top(el: &web::Element) -> f64 {
    el.dyn_ref::<web::HtmlElement>()
        .map(|h| h.offset_top() as f64)
        .unwrap_or_else(|| el.get_bounding_client_rect().top() + scroll_y())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(1.0) as u32);
    canvas.set_height(height.max(1.0) as u32);
}
