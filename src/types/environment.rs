use serde::Deserialize;

/// Structured platform hint (`navigator.userAgentData` / `Sec-CH-UA-*`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserAgentData {
    /// Reported platform, e.g. `"Android"`, `"iOS"`, `"macOS"`.
    pub platform: Option<String>,
    /// Mobile flag (`Sec-CH-UA-Mobile: ?1` → true).
    pub mobile: Option<bool>,
}

/// Read-only facts about the browsing context at decision time.
///
/// Every field may be absent; absent strings behave as empty and absent
/// counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnvironmentSnapshot {
    /// Raw identification string (`navigator.userAgent`).
    pub user_agent: String,
    /// Legacy hardware platform (`navigator.platform`), e.g. `"MacIntel"`.
    pub platform: String,
    /// Legacy `navigator.appVersion`.
    pub app_version: String,
    pub user_agent_data: Option<UserAgentData>,
    pub max_touch_points: u32,
    /// Whether the engine exposes touch-start events.
    pub touch_events: bool,
}

impl EnvironmentSnapshot {
    /// Structured platform hint, if present and non-empty.
    pub fn hint_platform(&self) -> Option<&str> {
        self.user_agent_data
            .as_ref()
            .and_then(|d| d.platform.as_deref())
            .filter(|p| !p.is_empty())
    }

    pub fn hint_mobile(&self) -> Option<bool> {
        self.user_agent_data.as_ref().and_then(|d| d.mobile)
    }

    pub fn has_touch(&self) -> bool {
        self.max_touch_points > 0 || self.touch_events
    }
}
