use crate::types::{EnvironmentSnapshot, OsFamily};

/// Best-effort OS family for diagnostics. The structured hint wins when it
/// names a known family; otherwise `appVersion` (or the UA when that is
/// empty) is scanned for case-sensitive tokens in a fixed order.
pub(crate) fn detect_os_family(env: &EnvironmentSnapshot) -> OsFamily {
    if let Some(hint) = env.hint_platform() {
        let hint = hint.to_lowercase();
        let from_hint = if hint.contains("ios") || hint.contains("ipados") {
            Some(OsFamily::Ios)
        } else if hint.contains("android") {
            Some(OsFamily::Android)
        } else if hint.contains("mac") {
            Some(OsFamily::MacOs)
        } else if hint.contains("win") {
            Some(OsFamily::Windows)
        } else if hint.contains("cros") {
            Some(OsFamily::ChromeOs)
        } else if hint.contains("linux") {
            Some(OsFamily::Linux)
        } else {
            None
        };
        if let Some(os) = from_hint {
            return os;
        }
    }

    let app = if env.app_version.is_empty() {
        env.user_agent.as_str()
    } else {
        env.app_version.as_str()
    };

    // Order matters: iPadOS and Android UAs both carry other tokens too.
    if app.contains("Win") {
        OsFamily::Windows
    } else if app.contains("Mac") {
        OsFamily::MacOs
    } else if ["iPhone", "iPad", "iPod"].iter().any(|t| app.contains(t)) {
        OsFamily::Ios
    } else if app.contains("Android") {
        OsFamily::Android
    } else if app.contains("CrOS") {
        OsFamily::ChromeOs
    } else if app.contains("Linux") {
        OsFamily::Linux
    } else {
        OsFamily::Unknown
    }
}
