use crate::error::Result;
use crate::types::{EnvironmentSnapshot, Platform};
use aho_corasick::AhoCorasick;
use fancy_regex::Regex;

/// Case-sensitive device tokens that mark an iOS device in either the
/// legacy platform string or the UA.
const IOS_TOKENS: [&str; 3] = ["iPhone", "iPad", "iPod"];

/// Legacy platform reported by Intel/Apple-silicon Macs and by iPadOS 13+
/// Safari in desktop mode.
const MAC_INTEL: &str = "MacIntel";

/// Pre-compiled patterns for the heuristic tiers. Built once with the
/// classifier so a click never compiles a regex.
#[derive(Debug, Clone)]
struct HeuristicRegexes {
    android: Regex,
    desktop_ua: Regex,
    desktop_platform: Regex,
}

impl HeuristicRegexes {
    fn compile() -> Result<Self> {
        let mk = |pattern: &str| -> Result<Regex> { Ok(Regex::new(&format!("(?i){}", pattern))?) };
        Ok(Self {
            android: mk("Android")?,
            desktop_ua: mk("Macintosh|Windows NT|CrOS")?,
            desktop_platform: mk("Mac|Win|CrOS")?,
        })
    }
}

/// Maps an [`EnvironmentSnapshot`] to exactly one [`Platform`].
///
/// Tiers are evaluated in order and the first match wins:
///
/// 1. a non-empty structured hint is authoritative;
/// 2. iOS heuristics on the legacy platform string, UA and touch points;
/// 3. Android heuristics (UA token, no desktop OS markers, touch capable);
/// 4. everything else is [`Platform::Other`].
#[derive(Debug, Clone)]
pub struct PlatformClassifier {
    ios_tokens: AhoCorasick,
    heuristic_regexes: HeuristicRegexes,
}

impl PlatformClassifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            ios_tokens: AhoCorasick::new(IOS_TOKENS)?,
            heuristic_regexes: HeuristicRegexes::compile()?,
        })
    }

    pub fn classify(&self, env: &EnvironmentSnapshot) -> Platform {
        if let Some(hint) = env.hint_platform() {
            return classify_hint(hint);
        }
        if self.is_ios(env) {
            return Platform::Ios;
        }
        if self.is_android(env) {
            return Platform::Android;
        }
        Platform::Other
    }

    /// Whether the UA mentions Android at all, regardless of the verdict.
    /// Reported in the init diagnostic.
    pub fn ua_has_android(&self, env: &EnvironmentSnapshot) -> bool {
        self.ua_matches(&self.heuristic_regexes.android, &env.user_agent)
    }

    fn is_ios(&self, env: &EnvironmentSnapshot) -> bool {
        // A MacIntel platform is either a real Mac or iPadOS in desktop mode;
        // only the touch point count tells them apart.
        if env.platform == MAC_INTEL {
            return env.max_touch_points > 1;
        }
        self.ios_tokens.is_match(&env.platform) || self.ios_tokens.is_match(&env.user_agent)
    }

    fn is_android(&self, env: &EnvironmentSnapshot) -> bool {
        let re = &self.heuristic_regexes;
        if !self.ua_matches(&re.android, &env.user_agent) {
            return false;
        }
        let desktop_os = self.ua_matches(&re.desktop_ua, &env.user_agent)
            || self.ua_matches(&re.desktop_platform, &env.platform);
        !desktop_os && env.has_touch()
    }

    fn ua_matches(&self, re: &Regex, haystack: &str) -> bool {
        re.is_match(haystack).unwrap_or(false)
    }
}

/// Tier 1: the structured hint never falls through to the heuristics.
fn classify_hint(hint: &str) -> Platform {
    let hint = hint.to_lowercase();
    if hint.contains("ios") || hint.contains("ipados") {
        Platform::Ios
    } else if hint == "android" {
        Platform::Android
    } else {
        Platform::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserAgentData;

    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
    const PIXEL_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36";
    const MAC_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15";

    fn classifier() -> PlatformClassifier {
        PlatformClassifier::new().unwrap()
    }

    fn env(ua: &str, platform: &str, touch: u32) -> EnvironmentSnapshot {
        EnvironmentSnapshot {
            user_agent: ua.to_string(),
            platform: platform.to_string(),
            max_touch_points: touch,
            ..Default::default()
        }
    }

    fn hinted(hint: &str, ua: &str) -> EnvironmentSnapshot {
        EnvironmentSnapshot {
            user_agent: ua.to_string(),
            user_agent_data: Some(UserAgentData {
                platform: Some(hint.to_string()),
                mobile: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn empty_snapshot_is_other() {
        assert_eq!(classifier().classify(&EnvironmentSnapshot::default()), Platform::Other);
    }

    #[test]
    fn hint_is_authoritative() {
        let c = classifier();
        assert_eq!(c.classify(&hinted("iOS", "")), Platform::Ios);
        assert_eq!(c.classify(&hinted("iPadOS", PIXEL_UA)), Platform::Ios);
        assert_eq!(c.classify(&hinted("Android", IPHONE_UA)), Platform::Android);
        assert_eq!(c.classify(&hinted("ANDROID", MAC_UA)), Platform::Android);
        // A desktop hint beats an Android UA.
        assert_eq!(c.classify(&hinted("Linux", PIXEL_UA)), Platform::Other);
        assert_eq!(c.classify(&hinted("macOS", IPHONE_UA)), Platform::Other);
    }

    #[test]
    fn empty_hint_uses_heuristics() {
        let mut e = hinted("", IPHONE_UA);
        assert_eq!(classifier().classify(&e), Platform::Ios);
        e.user_agent_data = Some(UserAgentData::default());
        assert_eq!(classifier().classify(&e), Platform::Ios);
    }

    #[test]
    fn ios_from_platform_or_ua() {
        let c = classifier();
        assert_eq!(c.classify(&env("", "iPhone", 0)), Platform::Ios);
        assert_eq!(c.classify(&env("", "iPod touch", 0)), Platform::Ios);
        assert_eq!(c.classify(&env(IPHONE_UA, "", 0)), Platform::Ios);
        // Tokens are case-sensitive.
        assert_eq!(c.classify(&env("iphone", "ipad", 5)), Platform::Other);
    }

    #[test]
    fn ipad_masquerade_boundary() {
        let c = classifier();
        assert_eq!(c.classify(&env(MAC_UA, "MacIntel", 5)), Platform::Ios);
        assert_eq!(c.classify(&env(MAC_UA, "MacIntel", 2)), Platform::Ios);
        assert_eq!(c.classify(&env(MAC_UA, "MacIntel", 1)), Platform::Other);
        assert_eq!(c.classify(&env(MAC_UA, "MacIntel", 0)), Platform::Other);
        assert_eq!(c.classify(&env("Mozilla/5.0 (iPad; CPU OS 12_0)", "MacIntel", 1)), Platform::Other);
    }

    #[test]
    fn android_requires_touch() {
        let c = classifier();
        assert_eq!(c.classify(&env(PIXEL_UA, "Linux armv8l", 5)), Platform::Android);
        assert_eq!(c.classify(&env(PIXEL_UA, "Linux armv8l", 0)), Platform::Other);
        let mut e = env(PIXEL_UA, "Linux armv8l", 0);
        e.touch_events = true;
        assert_eq!(c.classify(&e), Platform::Android);
    }

    #[test]
    fn android_on_desktop_os_is_other() {
        let c = classifier();
        assert_eq!(
            c.classify(&env("Mozilla/5.0 (Windows NT 10.0) Android-ish", "", 10)),
            Platform::Other
        );
        assert_eq!(c.classify(&env("Mozilla/5.0 android", "Win32", 10)), Platform::Other);
        assert_eq!(c.classify(&env("Mozilla/5.0 android", "macintel", 10)), Platform::Other);
        assert_eq!(c.classify(&env("Mozilla/5.0 (X11; CrOS) Android", "", 10)), Platform::Other);
        assert_eq!(c.classify(&env("Mozilla/5.0 android", "", 1)), Platform::Android);
    }

    #[test]
    fn ios_wins_over_android() {
        let ua = format!("{} Android", IPHONE_UA);
        assert_eq!(classifier().classify(&env(&ua, "Linux", 5)), Platform::Ios);
    }

    #[test]
    fn ua_has_android_ignores_verdict() {
        let c = classifier();
        assert!(c.ua_has_android(&hinted("macOS", PIXEL_UA)));
        assert!(!c.ua_has_android(&env(IPHONE_UA, "", 0)));
    }
}
