use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Window};

use crate::config::PortfolioConfig;

mod canvas;
mod content;
mod laptop;
mod page;
mod render;
mod storage;

pub use canvas::ScreenCanvas;
pub use storage::LocalStore;

/// Id of the optional JSON block that overrides the built-in config.
const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // a second init (tests) is harmless
    let _ = console_log::init_with_level(level);

    let document = document()?;
    let config = Rc::new(load_config(&document));
    if let Err(e) = content::populate(&document, &config) {
        log::warn!("page content not populated: {e:?}");
    }

    let app = Rc::new(RefCell::new(page::App::new(&document, &config)?));
    page::wire(&app, &config)?;
    page::start_frame_loop(app.clone())?;
    wasm_bindgen_futures::spawn_local(laptop::init(app, config));

    log::info!("portfolio initialized");
    Ok(())
}

fn load_config(document: &Document) -> PortfolioConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return PortfolioConfig::default();
    };
    PortfolioConfig::from_json(&text).unwrap_or_else(|e| {
        log::error!("{e}; using built-in config");
        PortfolioConfig::default()
    })
}

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| "no window".into())
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?.document().ok_or_else(|| "no document".into())
}

/// Milliseconds on the same clock as `requestAnimationFrame` timestamps.
pub(crate) fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now())
}

pub(crate) fn set_timeout(ms: i32, f: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let cb = Closure::once_into_js(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
}

/// Register `f` for `event` on `target` for the lifetime of the page.
pub(crate) fn listen<E>(
    target: &web_sys::EventTarget,
    event: &str,
    f: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(f);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], but registered with `passive: false` so `f` may call
/// `prevent_default`.
pub(crate) fn listen_active<E>(
    target: &web_sys::EventTarget,
    event: &str,
    f: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(f);
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}
