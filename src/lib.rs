#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod backdrop;
mod chrome;
mod config;
mod constants;
mod contact;
mod dom;
mod observer;
mod relay;
mod reveal;
mod scene;
mod scroll;

thread_local! {
    // Page-lifetime owner of the background animation.
    static BACKDROP: RefCell<Option<backdrop::Backdrop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_: web::Event| run_init());
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Each subsystem checks for its own elements and stays off when they are missing.
    let bd = backdrop::install(&document);
    BACKDROP.with(|slot| *slot.borrow_mut() = bd);

    chrome::install(&document);

    if let Err(e) = observer::install(&document) {
        log::warn!("[reveal] disabled: {:?}", e);
    }

    relay::install(&document);
    Ok(())
}
