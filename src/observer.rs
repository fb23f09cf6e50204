use crate::constants::*;
use crate::dom;
use crate::reveal::RevealTracker;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Hide the fade-in targets and reveal each one the first time it scrolls into view.
pub fn install(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    let known = Rc::new(targets.clone());
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = known.iter().position(|t| *t == target) else {
                    continue;
                };
                let fire = tracker.borrow_mut().observe(index, entry.is_intersecting());
                if fire {
                    dom::set_style(&target, "animation", REVEAL_ANIMATION);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    opts.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver unavailable: {:?}", e))?;

    // only hide once we know something will bring them back
    for t in &targets {
        dom::set_style(t, "opacity", "0");
        observer.observe(t);
    }
    callback.forget();
    log::info!("[reveal] observing {} elements", targets.len());
    Ok(())
}
