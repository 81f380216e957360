use std::sync::atomic::{AtomicBool, Ordering};

use toggle::{ToggleConfig, VisibilityToggler};
use wasm_bindgen::prelude::*;

mod dom;
pub use dom::WebDocument;

// Only the first successful init registers the load hook.
static INITIALIZED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    Ok(())
}

/// Wire the documentation button with the fixed selectors.
///
/// Call before the window `load` event; a hook registered later never fires.
#[wasm_bindgen]
pub fn init() -> Result<(), JsValue> {
    install(VisibilityToggler::new())
}

/// Same as [`init`], with selectors and marker taken from a JSON object. Missing
/// fields keep their defaults.
#[wasm_bindgen]
pub fn init_with_config(json: &str) -> Result<(), JsValue> {
    let config = ToggleConfig::from_json(json).map_err(dom::to_js_error)?;
    let toggler = VisibilityToggler::with_config(config).map_err(dom::to_js_error)?;
    install(toggler)
}

fn install(toggler: VisibilityToggler) -> Result<(), JsValue> {
    if INITIALIZED.load(Ordering::SeqCst) {
        web_sys::console::warn_1(&JsValue::from_str("toggle already initialized"));
        return Ok(());
    }
    let document = WebDocument::from_global()?;
    toggler.initialize(&document).map_err(dom::to_js_error)?;
    INITIALIZED.store(true, Ordering::SeqCst);
    tracing::debug!(trigger = %toggler.config().trigger, "load hook registered");
    Ok(())
}
