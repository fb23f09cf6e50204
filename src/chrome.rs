use crate::constants::*;
use crate::dom;
use crate::reveal;
use crate::scroll::{self, MenuState, SectionSpan, Throttle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// Inline styles for the three hamburger bars, open then closed.
const BARS_OPEN: [(&str, &str); 3] = [
    ("transform", "rotate(45deg) translate(5px, 5px)"),
    ("opacity", "0"),
    ("transform", "rotate(-45deg) translate(7px, -6px)"),
];
const BARS_CLOSED: [(&str, &str); 3] = [("transform", "none"), ("opacity", "1"), ("transform", "none")];

pub fn install(document: &web::Document) {
    wire_menu(document);
    wire_scroll_watch(document);
    wire_smooth_scroll(document);
    wire_scroll_to_top(document);
    stamp_year(document);
    wire_image_fallback(document);
}

#[derive(Clone)]
struct Menu {
    state: Rc<RefCell<MenuState>>,
    toggle: web::Element,
    nav: web::Element,
    body: Option<web::HtmlElement>,
}

impl Menu {
    fn flip(&self) {
        let open = self.state.borrow_mut().toggle();
        self.render(open);
    }

    fn close(&self) {
        if self.state.borrow_mut().close() {
            self.render(false);
        }
    }

    fn is_open(&self) -> bool {
        self.state.borrow().open
    }

    fn render(&self, open: bool) {
        _ = self.nav.class_list().toggle_with_force("open", open);
        _ = self
            .toggle
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
        let bars = if open { &BARS_OPEN } else { &BARS_CLOSED };
        if let Ok(spans) = self.toggle.query_selector_all("span") {
            for (i, (prop, value)) in bars.iter().enumerate() {
                if let Some(el) = spans.item(i as u32).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                    dom::set_style(&el, prop, value);
                }
            }
        }
        if let Some(body) = &self.body {
            _ = body
                .style()
                .set_property("overflow", if open { "hidden" } else { "" });
        }
    }

    fn contains(&self, target: Option<web::EventTarget>) -> bool {
        let Some(node) = target.and_then(|t| t.dyn_into::<web::Node>().ok()) else {
            return false;
        };
        self.nav.contains(Some(&node)) || self.toggle.contains(Some(&node))
    }
}

fn wire_menu(document: &web::Document) {
    let (Some(toggle), Some(nav)) = (
        document.get_element_by_id("nav-toggle"),
        document.get_element_by_id("main-nav"),
    ) else {
        log::info!("[chrome] no mobile menu on this page");
        return;
    };
    let menu = Menu {
        state: Rc::new(RefCell::new(MenuState::default())),
        toggle: toggle.clone(),
        nav,
        body: document.body(),
    };

    let m = menu.clone();
    dom::listen(&toggle, "click", move |ev: web::MouseEvent| {
        ev.stop_propagation();
        m.flip();
    });

    for link in dom::query_all(document, ".nav-link") {
        let m = menu.clone();
        dom::listen(&link, "click", move |_: web::MouseEvent| m.close());
    }

    let m = menu.clone();
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            m.close();
        }
    });

    let m = menu;
    dom::listen(document, "click", move |ev: web::MouseEvent| {
        if m.is_open() && !m.contains(ev.target()) {
            m.close();
        }
    });
}

/// Elements whose state follows the scroll position.
struct ScrollWatch {
    sections: Vec<web::Element>,
    links: Vec<web::Element>,
    to_top: Option<web::Element>,
    header: Option<web::Element>,
}

impl ScrollWatch {
    fn update(&self) {
        let y = dom::scroll_y();

        let spans: Vec<SectionSpan> = self
            .sections
            .iter()
            .filter_map(|s| {
                Some(SectionSpan {
                    id: s.get_attribute("id")?,
                    top: dom::offset_top(s),
                    height: s.client_height() as f64,
                })
            })
            .collect();
        let target = scroll::active_section(&spans, y, SCROLL_SPY_OFFSET).map(scroll::link_target);
        for link in &self.links {
            let active = target.is_some() && link.get_attribute("href") == target;
            _ = link.class_list().toggle_with_force("active", active);
        }

        if let Some(btn) = &self.to_top {
            _ = btn
                .class_list()
                .toggle_with_force("visible", scroll::scroll_top_visible(y));
        }
        if let Some(header) = &self.header {
            let shadow = if scroll::header_shadow_visible(y) {
                HEADER_SHADOW
            } else {
                "none"
            };
            dom::set_style(header, "box-shadow", shadow);
        }
    }
}

fn wire_scroll_watch(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let watch = Rc::new(ScrollWatch {
        sections: dom::query_all(document, "section[id]"),
        links: dom::query_all(document, ".nav-link"),
        to_top: document.get_element_by_id("scrollToTop"),
        header: document.query_selector(".site-header").ok().flatten(),
    });
    watch.update();

    let throttle = Rc::new(RefCell::new(Throttle::new(SCROLL_THROTTLE_MS)));
    let trailing: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    dom::listen(&window, "scroll", move |_: web::Event| {
        if throttle.borrow_mut().ready(dom::now_ms()) {
            watch.update();
            return;
        }
        // settle on the final position once scrolling stops
        if trailing.borrow().is_none() {
            let w = watch.clone();
            let t = throttle.clone();
            let pending = trailing.clone();
            *trailing.borrow_mut() = dom::set_timeout(SCROLL_THROTTLE_MS as i32, move || {
                pending.borrow_mut().take();
                t.borrow_mut().ready(dom::now_ms());
                w.update();
            });
        }
    });
}

fn wire_smooth_scroll(document: &web::Document) {
    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let doc = document.clone();
        let a = anchor.clone();
        dom::listen(&anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let href = a.get_attribute("href").unwrap_or_default();
            let Some(id) = scroll::anchor_id(&href) else {
                return;
            };
            if let Some(target) = doc.get_element_by_id(id) {
                dom::smooth_scroll_to(scroll::anchor_scroll_top(dom::offset_top(&target)));
            }
        });
    }
}

fn wire_scroll_to_top(document: &web::Document) {
    dom::add_click_listener(document, "scrollToTop", |_| dom::smooth_scroll_to(0.0));
}

fn stamp_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("year") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

fn show_placeholder(img: &web::Element) {
    _ = img.class_list().add_1("hidden");
    if let Some(next) = img.next_element_sibling() {
        if next.class_list().contains("project-placeholder") {
            _ = next.class_list().add_1("visible");
        }
    }
}

fn wire_image_fallback(document: &web::Document) {
    for img in dom::query_all(document, ".project-thumbnail") {
        // the error may have fired before this module loaded
        let already_broken = img
            .dyn_ref::<web::HtmlImageElement>()
            .map(|i| {
                reveal::image_already_failed(
                    i.complete(),
                    i.natural_width(),
                    i.natural_height(),
                    !i.src().is_empty(),
                )
            })
            .unwrap_or(false);
        if already_broken {
            show_placeholder(&img);
            continue;
        }
        let el = img.clone();
        dom::listen(&img, "error", move |_: web::Event| show_placeholder(&el));
    }
}
