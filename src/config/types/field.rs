//! Type-safe config field path.

/// A type-safe wrapper for config field paths.
///
/// Each section declares its field paths as constants so diagnostics point
/// at the exact key the user has to edit.
///
/// # Example
///
/// ```ignore
/// impl SiteInfoConfig {
///     pub const URL: FieldPath = FieldPath::new("site.url");
/// }
///
/// diag.error(SiteInfoConfig::URL, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}
