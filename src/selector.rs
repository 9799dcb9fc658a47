use crate::config::FallbackPolicy;
use crate::types::{Platform, TargetDeclaration};

/// Picks one candidate URL for a bucket under a [`FallbackPolicy`].
///
/// The result is not sanitized; placeholder URLs are filtered afterwards so
/// a declared `#` still shadows any fallback.
#[derive(Debug, Clone, Default)]
pub struct TargetSelector {
    policy: FallbackPolicy,
}

impl TargetSelector {
    pub fn new(policy: FallbackPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &FallbackPolicy {
        &self.policy
    }

    pub fn select<'a>(&'a self, platform: Platform, decl: &'a TargetDeclaration) -> Option<&'a str> {
        match &self.policy {
            FallbackPolicy::Strict => match platform {
                Platform::Ios => decl.ios.as_deref(),
                Platform::Android => decl.android.as_deref(),
                Platform::Other => decl.web.as_deref(),
            },
            FallbackPolicy::Permissive {
                ios_default,
                android_default,
            } => {
                let web = decl.web.as_deref().or(decl.embedded_href.as_deref());
                let store = match platform {
                    Platform::Ios => decl.ios.as_deref().or(non_blank(ios_default)),
                    Platform::Android => decl.android.as_deref().or(non_blank(android_default)),
                    Platform::Other => None,
                };
                store.or(web)
            }
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
