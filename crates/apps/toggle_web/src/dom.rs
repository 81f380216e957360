use toggle::{ClickHandler, Host, LoadHandler, ToggleError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

/// Browser document as a toggle host.
#[derive(Debug, Clone)]
pub struct WebDocument {
    window: Window,
    document: Document,
}

impl WebDocument {
    pub fn from_global() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        Ok(Self { window, document })
    }
}

fn host_error(err: JsValue) -> ToggleError {
    ToggleError::Host(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Thrown `Error` so the browser reports it as uncaught.
pub(crate) fn to_js_error(err: ToggleError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

impl Host for WebDocument {
    type Element = Element;

    fn query_selector(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                // Malformed selector: treat as no match.
                web_sys::console::warn_1(&err);
                None
            }
        }
    }

    fn add_class(&self, element: &Element, class: &str) -> Result<(), ToggleError> {
        element.class_list().add_1(class).map_err(host_error)
    }

    fn remove_class(&self, element: &Element, class: &str) -> Result<(), ToggleError> {
        element.class_list().remove_1(class).map_err(host_error)
    }

    fn on_click(&self, element: &Element, mut handler: ClickHandler) -> Result<(), ToggleError> {
        let closure = Closure::<dyn FnMut() -> Result<(), JsValue>>::new(move || {
            handler().map_err(to_js_error)
        });
        element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(host_error)?;
        // Listener lives as long as the page.
        closure.forget();
        Ok(())
    }

    fn on_load(&self, handler: LoadHandler) -> Result<(), ToggleError> {
        let closure: Closure<dyn FnMut() -> Result<(), JsValue>> =
            Closure::once(move || handler().map_err(to_js_error));
        self.window
            .add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())
            .map_err(host_error)?;
        closure.forget();
        Ok(())
    }
}
