use crate::config::ResolverConfig;
use crate::dom::Document;
use crate::environment::EnvironmentProvider;
use crate::error::Result;
use crate::os_helpers::detect_os_family;
use crate::page::{ClickEvent, ClickObserver, Navigator, Page};
use crate::resolver::TargetResolver;
use crate::types::*;
use std::rc::Rc;

/// Window features used when opening a new browsing context.
const NEW_CONTEXT_FEATURES: &str = "noopener,noreferrer";

/// Entry point wiring the resolver into a [`Page`].
///
/// Construct once during page startup and call [`SmartDownload::init`]
/// whenever the page-ready hook fires; only the first call has any effect.
pub struct SmartDownload {
    resolver: Rc<TargetResolver>,
    env: Rc<dyn EnvironmentProvider>,
    started: bool,
}

impl SmartDownload {
    pub fn new(config: ResolverConfig, env: Rc<dyn EnvironmentProvider>) -> Result<Self> {
        Ok(Self {
            resolver: Rc::new(TargetResolver::new(config)?),
            env,
            started: false,
        })
    }

    pub fn resolver(&self) -> &TargetResolver {
        &self.resolver
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Attach the click observer, log the detected platform and, under the
    /// permissive policy, sync anchor hrefs. Returns `false` when already
    /// initialized.
    pub fn init(&mut self, page: &mut Page) -> bool {
        if self.started {
            return false;
        }
        self.started = true;

        let env = self.env.snapshot();
        let platform = self.resolver.classify(&env);
        log_detection(&self.resolver, platform, &env);

        page.add_click_observer(Box::new(ClickHandler {
            resolver: Rc::clone(&self.resolver),
            env: Rc::clone(&self.env),
        }));

        if self.resolver.config().should_sync_hrefs() {
            let rewritten = sync_hrefs(&self.resolver, &mut page.document, platform);
            tracing::debug!(rewritten, "synced trigger hrefs");
        }
        true
    }
}

impl std::fmt::Debug for SmartDownload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartDownload")
            .field("resolver", &self.resolver)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}

fn log_detection(resolver: &TargetResolver, platform: Platform, env: &EnvironmentSnapshot) {
    tracing::info!(
        target: "smart_download",
        platform = %platform,
        os_name = %detect_os_family(env),
        ua_has_android = resolver.classifier().ua_has_android(env),
        mobile_ch = ?env.hint_mobile(),
        legacy_platform = %env.platform,
        ch_platform = ?env.hint_platform(),
        max_touch_points = env.max_touch_points,
        "platform detected"
    );
}

/// Point each trigger's embedded anchor at its resolved target so that
/// long-press, "copy link" and similar interactions see the same URL a
/// click would. Returns the number of anchors rewritten.
fn sync_hrefs(resolver: &TargetResolver, doc: &mut Document, platform: Platform) -> usize {
    let mut rewritten = 0;
    for trigger in resolver.triggers(doc) {
        let Some(anchor) = resolver.embedded_anchor(doc, trigger) else {
            continue;
        };
        let Some(href) = resolver.pick_target(doc, trigger, platform).href else {
            continue;
        };
        if doc.attribute(anchor, "href") != Some(href.as_str()) {
            doc.set_attribute(anchor, "href", &href);
            rewritten += 1;
        }
    }
    rewritten
}

/// The single document-level observer installed by [`SmartDownload::init`].
struct ClickHandler {
    resolver: Rc<TargetResolver>,
    env: Rc<dyn EnvironmentProvider>,
}

impl ClickObserver for ClickHandler {
    fn on_click(&self, document: &Document, event: &mut ClickEvent, navigator: &mut dyn Navigator) {
        let Some(target) = event.target else {
            return;
        };
        let Some(trigger) = self.resolver.find_trigger(document, target) else {
            return;
        };

        let env = self.env.snapshot();
        match self.resolver.decide(document, trigger, event, &env) {
            NavigationDecision::NoOp => {}
            NavigationDecision::Navigate { url, new_tab } => {
                event.prevent_default();
                if new_tab {
                    navigator.open(&url, "_blank", NEW_CONTEXT_FEATURES);
                } else {
                    navigator.assign(&url);
                }
            }
        }
    }
}
