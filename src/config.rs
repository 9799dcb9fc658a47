use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// Attribute names  (attributes:)
// ---------------------------------------------------------------------------

/// Names of the attributes the resolver reads from trigger elements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AttributeNames {
    /// Boolean marker opting an element in.
    pub trigger: String,
    pub ios: String,
    pub android: String,
    pub web: String,
    /// Legacy alias for `web`, consulted only when `web` is absent.
    pub desktop: String,
}

impl Default for AttributeNames {
    fn default() -> Self {
        Self {
            trigger: "data-smart-download".to_string(),
            ios: "data-ios".to_string(),
            android: "data-android".to_string(),
            web: "data-web".to_string(),
            desktop: "data-desktop".to_string(),
        }
    }
}

impl AttributeNames {
    fn validate(&self) -> Result<()> {
        for name in [&self.trigger, &self.ios, &self.android, &self.web, &self.desktop] {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(Error::InvalidAttribute(name.clone()));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Fallback policy  (policy:)
// ---------------------------------------------------------------------------

/// How far the selector may fall back when the visitor's bucket has no
/// declared URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Only the declared URL for the matched bucket; otherwise no-op.
    #[default]
    Strict,
    /// Mobile buckets fall back to site-wide defaults, then to the web URL;
    /// the web URL itself falls back to the element's own link.
    Permissive {
        #[serde(default)]
        ios_default: Option<String>,
        #[serde(default)]
        android_default: Option<String>,
    },
}

impl FallbackPolicy {
    pub fn is_permissive(&self) -> bool {
        matches!(self, Self::Permissive { .. })
    }
}

// ---------------------------------------------------------------------------
// Top level
// ---------------------------------------------------------------------------

/// Resolver configuration, loadable from YAML:
///
/// ```yaml
/// legacy_trigger_hrefs:
///   - https://community.example.org/feed
/// policy:
///   kind: permissive
///   ios_default: https://apps.apple.com/app/id0000000000
///   android_default: https://play.google.com/store/apps/details?id=org.example
/// sync_hrefs: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub attributes: AttributeNames,
    /// Plain anchors whose `href` equals one of these are treated as
    /// triggers even without the marker attribute.
    pub legacy_trigger_hrefs: Vec<String>,
    pub policy: FallbackPolicy,
    /// Rewrite trigger anchors' `href` to the resolved target on init.
    /// Only honored under the permissive policy.
    pub sync_hrefs: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            attributes: AttributeNames::default(),
            legacy_trigger_hrefs: Vec::new(),
            policy: FallbackPolicy::default(),
            sync_hrefs: true,
        }
    }
}

impl ResolverConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.attributes.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    pub fn with_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Whether the init pass should rewrite anchor hrefs.
    pub fn should_sync_hrefs(&self) -> bool {
        self.sync_hrefs && self.policy.is_permissive()
    }
}
