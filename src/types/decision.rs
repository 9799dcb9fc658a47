/// Outcome of resolving a click on a trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// No actionable URL; the browser's default behavior is left alone.
    NoOp,
    Navigate { url: String, new_tab: bool },
}

impl NavigationDecision {
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::NoOp => None,
            Self::Navigate { url, .. } => Some(url),
        }
    }

    pub fn new_tab(&self) -> bool {
        matches!(self, Self::Navigate { new_tab: true, .. })
    }
}

/// Target picked for an element before click-time signals are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub href: Option<String>,
    pub platform: super::Platform,
}
