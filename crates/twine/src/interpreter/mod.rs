//! Translation engine.
//!
//! This module resolves dotted keys against a dictionary, substitutes
//! placeholders and tag spans, and assembles the final content.

mod error;
mod evaluator;
mod options;
mod resolver;
mod translator;

pub use error::{TranslateError, compute_suggestions};
pub use evaluator::{
    TagScan, assemble, interpolate, scan_tags, substitute_placeholders, substitute_tags,
};
pub use options::{DEFAULT_MAX_SUBSTITUTIONS, FalsyPolicy, ScanMode, TranslateOptions};
pub use resolver::resolve;
pub use translator::{Translator, translate};
