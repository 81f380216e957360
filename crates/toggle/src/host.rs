use crate::error::ToggleError;

/// Fired once when the host reports the document fully loaded.
pub type LoadHandler = Box<dyn FnOnce() -> Result<(), ToggleError>>;

/// Fired on every activation of the element it is attached to. The event itself is
/// not forwarded.
pub type ClickHandler = Box<dyn FnMut() -> Result<(), ToggleError>>;

/// Capabilities the toggler consumes from the page it runs in.
///
/// Implementations are cheap handles onto a shared document; handlers capture a
/// clone. Dispatch is serial: the host never runs two handlers at once.
///
/// An `Err` returned by a handler is the host's to surface (the browser throws it as
/// an uncaught error). The toggler never catches its own failures.
pub trait Host: Clone + 'static {
    type Element: Clone + 'static;

    /// Zero-or-one element for `selector`.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    fn add_class(&self, element: &Self::Element, class: &str) -> Result<(), ToggleError>;

    fn remove_class(&self, element: &Self::Element, class: &str) -> Result<(), ToggleError>;

    fn on_click(&self, element: &Self::Element, handler: ClickHandler) -> Result<(), ToggleError>;

    fn on_load(&self, handler: LoadHandler) -> Result<(), ToggleError>;
}
