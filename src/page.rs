use crate::dom::{Document, NodeId};

/// Mouse button number reported for a middle click.
pub const MIDDLE_BUTTON: u16 = 1;

/// A click as seen by page-level observers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEvent {
    /// Element the click landed on; `None` for clicks outside any element.
    pub target: Option<NodeId>,
    pub meta_key: bool,
    pub ctrl_key: bool,
    pub button: u16,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn on(target: NodeId) -> Self {
        Self {
            target: Some(target),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    pub fn with_button(mut self, button: u16) -> Self {
        self.button = button;
        self
    }

    /// Platform gesture for "open in a new context".
    pub fn wants_new_context(&self) -> bool {
        self.meta_key || self.ctrl_key || self.button == MIDDLE_BUTTON
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Side-effecting navigation, `window.location` / `window.open` style.
pub trait Navigator {
    /// Navigate the current browsing context.
    fn assign(&mut self, url: &str);
    /// Open `url` in another browsing context.
    fn open(&mut self, url: &str, target: &str, features: &str);
}

/// Document-level click listener.
pub trait ClickObserver {
    fn on_click(&self, document: &Document, event: &mut ClickEvent, navigator: &mut dyn Navigator);
}

/// A document plus the click observers attached to it.
pub struct Page {
    pub document: Document,
    click_observers: Vec<Box<dyn ClickObserver>>,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            click_observers: Vec::new(),
        }
    }

    pub fn add_click_observer(&mut self, observer: Box<dyn ClickObserver>) {
        self.click_observers.push(observer);
    }

    pub fn click_observer_count(&self) -> usize {
        self.click_observers.len()
    }

    /// Run every observer for `event` in attachment order. Returns whether
    /// the default action was prevented.
    pub fn dispatch_click(&self, event: &mut ClickEvent, navigator: &mut dyn Navigator) -> bool {
        for observer in &self.click_observers {
            observer.on_click(&self.document, event, navigator);
        }
        event.default_prevented()
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("document", &self.document)
            .field("click_observers", &self.click_observers.len())
            .finish()
    }
}
