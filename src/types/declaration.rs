/// URLs an element declares for each platform bucket.
///
/// Empty attribute values are stored as `None`, so "declared but blank"
/// behaves the same as "not declared".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetDeclaration {
    pub ios: Option<String>,
    pub android: Option<String>,
    /// Web URL, or its legacy desktop alias when the web attribute is absent.
    pub web: Option<String>,
    /// `href` of the trigger itself or of its first nested anchor.
    pub embedded_href: Option<String>,
}
