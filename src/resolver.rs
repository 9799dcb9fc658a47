use crate::classifier::PlatformClassifier;
use crate::config::ResolverConfig;
use crate::dom::{Document, Element, NodeId};
use crate::error::Result;
use crate::helpers::{non_empty, sanitize_url};
use crate::page::ClickEvent;
use crate::selector::TargetSelector;
use crate::types::*;

/// Value of `target` that requests a new browsing context.
const BLANK_TARGET: &str = "_blank";

/// Turns a trigger element plus an environment into a
/// [`NavigationDecision`]. Holds no per-click state.
#[derive(Debug, Clone)]
pub struct TargetResolver {
    config: ResolverConfig,
    classifier: PlatformClassifier,
    selector: TargetSelector,
}

impl TargetResolver {
    pub fn new(config: ResolverConfig) -> Result<Self> {
        Ok(Self {
            classifier: PlatformClassifier::new()?,
            selector: TargetSelector::new(config.policy.clone()),
            config,
        })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn classifier(&self) -> &PlatformClassifier {
        &self.classifier
    }

    pub fn classify(&self, env: &EnvironmentSnapshot) -> Platform {
        self.classifier.classify(env)
    }

    /// Whether `el` opts into platform-aware navigation, either through the
    /// marker attribute or as an anchor pointing at a legacy trigger href.
    pub fn is_trigger(&self, el: &Element) -> bool {
        el.has_attribute(&self.config.attributes.trigger) || self.is_legacy_trigger(el)
    }

    fn is_legacy_trigger(&self, el: &Element) -> bool {
        el.is_link()
            && el.attribute("href").is_some_and(|href| {
                self.config
                    .legacy_trigger_hrefs
                    .iter()
                    .any(|legacy| legacy == href)
            })
    }

    /// Trigger containing `node`. Marked elements win over legacy anchors
    /// even when the anchor is the closer ancestor.
    pub fn find_trigger(&self, doc: &Document, node: NodeId) -> Option<NodeId> {
        let marker = &self.config.attributes.trigger;
        doc.closest(node, |el| el.has_attribute(marker))
            .or_else(|| doc.closest(node, |el| self.is_legacy_trigger(el)))
    }

    /// All triggers in the document, in document order.
    pub fn triggers(&self, doc: &Document) -> Vec<NodeId> {
        doc.query_all(|el| self.is_trigger(el))
    }

    /// The trigger itself when it is `a[href]`, else its first nested `a[href]`.
    pub fn embedded_anchor(&self, doc: &Document, trigger: NodeId) -> Option<NodeId> {
        if doc.element(trigger).is_link() {
            return Some(trigger);
        }
        doc.query(trigger, Element::is_link)
    }

    pub fn declaration(&self, doc: &Document, trigger: NodeId) -> TargetDeclaration {
        let attrs = &self.config.attributes;
        let el = doc.element(trigger);
        let read = |name: &str| non_empty(el.attribute(name)).map(str::to_string);
        TargetDeclaration {
            ios: read(&attrs.ios),
            android: read(&attrs.android),
            web: read(&attrs.web).or_else(|| read(&attrs.desktop)),
            embedded_href: self
                .embedded_anchor(doc, trigger)
                .and_then(|a| non_empty(doc.attribute(a, "href")))
                .map(str::to_string),
        }
    }

    /// Selected and sanitized target for `trigger` on `platform`.
    pub fn pick_target(&self, doc: &Document, trigger: NodeId, platform: Platform) -> Resolution {
        let decl = self.declaration(doc, trigger);
        let href = sanitize_url(self.selector.select(platform, &decl)).map(str::to_string);
        Resolution { href, platform }
    }

    /// Full click-time decision: target selection, the permissive
    /// embedded-link fallback, and new-tab intent.
    pub fn decide(
        &self,
        doc: &Document,
        trigger: NodeId,
        event: &ClickEvent,
        env: &EnvironmentSnapshot,
    ) -> NavigationDecision {
        let platform = self.classify(env);
        let decl = self.declaration(doc, trigger);

        let mut candidate = self.selector.select(platform, &decl);
        if candidate.is_none() && self.config.policy.is_permissive() {
            candidate = decl.embedded_href.as_deref();
        }

        let Some(url) = sanitize_url(candidate) else {
            tracing::debug!(platform = %platform, "no usable target, leaving click alone");
            return NavigationDecision::NoOp;
        };

        let new_tab = self.target_is_blank(doc, trigger) || event.wants_new_context();
        tracing::debug!(platform = %platform, url, new_tab, "resolved navigation");
        NavigationDecision::Navigate {
            url: url.to_string(),
            new_tab,
        }
    }

    /// `target` of the embedded anchor, else of the trigger, is `_blank`.
    fn target_is_blank(&self, doc: &Document, trigger: NodeId) -> bool {
        let anchor_target = self
            .embedded_anchor(doc, trigger)
            .and_then(|a| non_empty(doc.attribute(a, "target")));
        anchor_target
            .or_else(|| doc.attribute(trigger, "target"))
            .is_some_and(|t| t == BLANK_TARGET)
    }
}
