//! Translation options.

use bon::Builder;

use crate::types::Value;

/// Default bound on re-expansions in [`ScanMode::Rescan`].
pub const DEFAULT_MAX_SUBSTITUTIONS: usize = 256;

/// How placeholder substitution treats substituted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Tokenize the template once. Substituted values are inserted verbatim,
    /// even when they contain `{...}`.
    #[default]
    SinglePass,

    /// After every substitution, restart the search on the resulting string.
    /// A value containing `{name}` is substituted again.
    Rescan,
}

/// Whether falsy interpolation values count as supplied.
///
/// Falsy values are the empty string, zero, NaN and `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FalsyPolicy {
    /// Falsy values are used like any other value.
    #[default]
    Present,

    /// Falsy values are treated as missing: placeholders fail with
    /// `InterpolationNotFound` and tags fall back to the default element.
    Absent,
}

impl FalsyPolicy {
    /// Returns true if `value` counts as supplied under this policy.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            FalsyPolicy::Present => true,
            FalsyPolicy::Absent => !value.is_falsy(),
        }
    }
}

/// Options controlling template interpolation.
///
/// # Example
///
/// ```
/// use twine::{FalsyPolicy, ScanMode, TranslateOptions};
///
/// let options = TranslateOptions::builder()
///     .scan(ScanMode::Rescan)
///     .falsy(FalsyPolicy::Absent)
///     .build();
///
/// assert_eq!(options.scan(), ScanMode::Rescan);
/// assert_eq!(options.max_substitutions(), 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct TranslateOptions {
    #[builder(default)]
    scan: ScanMode,

    #[builder(default)]
    falsy: FalsyPolicy,

    /// Upper bound on re-expansions per call in [`ScanMode::Rescan`],
    /// on top of the placeholders written in the template.
    #[builder(default = DEFAULT_MAX_SUBSTITUTIONS)]
    max_substitutions: usize,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        TranslateOptions::builder().build()
    }
}

impl TranslateOptions {
    pub fn scan(&self) -> ScanMode {
        self.scan
    }

    pub fn falsy(&self) -> FalsyPolicy {
        self.falsy
    }

    pub fn max_substitutions(&self) -> usize {
        self.max_substitutions
    }
}
