use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::error::ToggleError;
use crate::host::{ClickHandler, Host, LoadHandler};

/// Element handle for [`InMemoryDocument`]. Holds the id only; a handle to a removed
/// element stays valid but every operation on it fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementRef {
    pub id: String,
}

/// One class-list mutation, in the order the document saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassOp {
    Add { id: String, class: String },
    Remove { id: String, class: String },
}

impl ClassOp {
    pub fn id(&self) -> &str {
        match self {
            ClassOp::Add { id, .. } | ClassOp::Remove { id, .. } => id,
        }
    }
}

type SharedClickHandler = Rc<RefCell<ClickHandler>>;

#[derive(Default)]
struct DomState {
    elements: BTreeMap<String, BTreeSet<String>>,
    click_listeners: BTreeMap<String, Vec<SharedClickHandler>>,
    load_listeners: Vec<LoadHandler>,
    loaded: bool,
    queries: Vec<String>,
    mutations: Vec<ClassOp>,
    uncaught: Vec<ToggleError>,
}

/// Deterministic single-threaded document.
///
/// Only `#id` selectors resolve; anything else matches nothing. Errors returned by
/// handlers land in [`InMemoryDocument::uncaught`], the way a browser logs an
/// unhandled exception and carries on.
#[derive(Clone, Default)]
pub struct InMemoryDocument {
    state: Rc<RefCell<DomState>>,
}

impl std::fmt::Debug for InMemoryDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.state.borrow();
        f.debug_struct("InMemoryDocument")
            .field("elements", &s.elements)
            .field("loaded", &s.loaded)
            .field("uncaught", &s.uncaught)
            .finish()
    }
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(self, id: &str, classes: &[&str]) -> Self {
        self.insert_element(id, classes);
        self
    }

    pub fn insert_element(&self, id: &str, classes: &[&str]) {
        self.state.borrow_mut().elements.insert(
            id.to_string(),
            classes.iter().map(|c| c.to_string()).collect(),
        );
    }

    /// Detach an element along with its listeners.
    pub fn remove_element(&self, id: &str) -> bool {
        let mut s = self.state.borrow_mut();
        s.click_listeners.remove(id);
        s.elements.remove(id).is_some()
    }

    /// `None` when the element does not exist.
    pub fn has_class(&self, id: &str, class: &str) -> Option<bool> {
        self.state
            .borrow()
            .elements
            .get(id)
            .map(|classes| classes.contains(class))
    }

    pub fn is_loaded(&self) -> bool {
        self.state.borrow().loaded
    }

    /// Deliver the load-complete signal. Fires at most once; listeners registered
    /// afterwards never run.
    pub fn fire_load(&self) {
        let listeners = {
            let mut s = self.state.borrow_mut();
            if s.loaded {
                return;
            }
            s.loaded = true;
            std::mem::take(&mut s.load_listeners)
        };
        for listener in listeners {
            if let Err(err) = listener() {
                self.state.borrow_mut().uncaught.push(err);
            }
        }
    }

    /// Dispatch a click on the element with `id`. Clicking a missing element or one
    /// without listeners does nothing.
    pub fn click(&self, id: &str) {
        let listeners = self
            .state
            .borrow()
            .click_listeners
            .get(id)
            .cloned()
            .unwrap_or_default();
        for listener in listeners {
            let result = {
                let mut handler = listener.borrow_mut();
                (*handler)()
            };
            if let Err(err) = result {
                self.state.borrow_mut().uncaught.push(err);
            }
        }
    }

    pub fn load_listener_count(&self) -> usize {
        self.state.borrow().load_listeners.len()
    }

    pub fn click_listener_count(&self, id: &str) -> usize {
        self.state
            .borrow()
            .click_listeners
            .get(id)
            .map_or(0, Vec::len)
    }

    /// Every selector passed to `query_selector`, in order.
    pub fn queries(&self) -> Vec<String> {
        self.state.borrow().queries.clone()
    }

    pub fn mutations(&self) -> Vec<ClassOp> {
        self.state.borrow().mutations.clone()
    }

    pub fn uncaught(&self) -> Vec<ToggleError> {
        self.state.borrow().uncaught.clone()
    }

    fn with_classes<R>(
        &self,
        element: &ElementRef,
        f: impl FnOnce(&mut BTreeSet<String>) -> R,
    ) -> Result<R, ToggleError> {
        let mut s = self.state.borrow_mut();
        let classes = s
            .elements
            .get_mut(&element.id)
            .ok_or_else(|| ToggleError::Host(format!("element `{}` is detached", element.id)))?;
        Ok(f(classes))
    }
}

impl Host for InMemoryDocument {
    type Element = ElementRef;

    fn query_selector(&self, selector: &str) -> Option<ElementRef> {
        let mut s = self.state.borrow_mut();
        s.queries.push(selector.to_string());
        let id = selector.strip_prefix('#')?;
        s.elements.contains_key(id).then(|| ElementRef { id: id.to_string() })
    }

    fn add_class(&self, element: &ElementRef, class: &str) -> Result<(), ToggleError> {
        self.with_classes(element, |classes| {
            classes.insert(class.to_string());
        })?;
        self.state.borrow_mut().mutations.push(ClassOp::Add {
            id: element.id.clone(),
            class: class.to_string(),
        });
        Ok(())
    }

    fn remove_class(&self, element: &ElementRef, class: &str) -> Result<(), ToggleError> {
        self.with_classes(element, |classes| {
            classes.remove(class);
        })?;
        self.state.borrow_mut().mutations.push(ClassOp::Remove {
            id: element.id.clone(),
            class: class.to_string(),
        });
        Ok(())
    }

    fn on_click(&self, element: &ElementRef, handler: ClickHandler) -> Result<(), ToggleError> {
        let mut s = self.state.borrow_mut();
        if !s.elements.contains_key(&element.id) {
            return Err(ToggleError::Host(format!(
                "element `{}` is detached",
                element.id
            )));
        }
        s.click_listeners
            .entry(element.id.clone())
            .or_default()
            .push(Rc::new(RefCell::new(handler)));
        Ok(())
    }

    fn on_load(&self, handler: LoadHandler) -> Result<(), ToggleError> {
        self.state.borrow_mut().load_listeners.push(handler);
        Ok(())
    }
}
