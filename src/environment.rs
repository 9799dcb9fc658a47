use crate::helpers::unquote;
use crate::types::{EnvironmentSnapshot, UserAgentData};

/// Source of [`EnvironmentSnapshot`]s. Queried once per decision, never
/// cached, so tests can swap in any fixed or changing environment.
pub trait EnvironmentProvider {
    fn snapshot(&self) -> EnvironmentSnapshot;
}

impl EnvironmentProvider for EnvironmentSnapshot {
    fn snapshot(&self) -> EnvironmentSnapshot {
        self.clone()
    }
}

impl<F> EnvironmentProvider for F
where
    F: Fn() -> EnvironmentSnapshot,
{
    fn snapshot(&self) -> EnvironmentSnapshot {
        self()
    }
}

impl EnvironmentSnapshot {
    /// Build a snapshot from HTTP request headers (`User-Agent`,
    /// `Sec-CH-UA-Platform`, `Sec-CH-UA-Mobile`). Header names are matched
    /// case-insensitively; touch data is not available over HTTP and stays 0.
    pub fn from_headers<'h, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = (&'h str, &'h str)>,
    {
        let mut env = EnvironmentSnapshot::default();
        let mut hints = UserAgentData::default();
        let mut has_hints = false;

        for (name, value) in headers {
            if name.eq_ignore_ascii_case("user-agent") {
                env.user_agent = value.to_string();
            } else if name.eq_ignore_ascii_case("sec-ch-ua-platform") {
                hints.platform = Some(unquote(value).to_string());
                has_hints = true;
            } else if name.eq_ignore_ascii_case("sec-ch-ua-mobile") {
                hints.mobile = match value.trim() {
                    "?1" => Some(true),
                    "?0" => Some(false),
                    _ => None,
                };
                has_hints = true;
            }
        }

        if has_hints {
            env.user_agent_data = Some(hints);
        }
        env
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn headers_to_snapshot() {
        let env = EnvironmentSnapshot::from_headers([
            ("User-Agent", "Mozilla/5.0 (Linux; Android 14)"),
            ("sec-ch-ua-platform", "\"Android\""),
            ("Sec-CH-UA-Mobile", "?1"),
            ("Accept", "*/*"),
        ]);
        assert_eq!(env.user_agent, "Mozilla/5.0 (Linux; Android 14)");
        assert_eq!(env.hint_platform(), Some("Android"));
        assert_eq!(env.hint_mobile(), Some(true));
        assert_eq!(env.max_touch_points, 0);
    }

    #[test]
    fn no_hint_headers_means_no_hints() {
        let env = EnvironmentSnapshot::from_headers([("user-agent", "curl/8.0")]);
        assert!(env.user_agent_data.is_none());
    }

    #[test]
    fn closure_provider_is_queried_each_time() {
        let calls = Cell::new(0);
        let provider = || {
            calls.set(calls.get() + 1);
            EnvironmentSnapshot::default()
        };
        provider.snapshot();
        provider.snapshot();
        assert_eq!(calls.get(), 2);
    }
}
