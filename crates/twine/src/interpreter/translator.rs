//! The user-facing translation API.

use bon::Builder;

use crate::dictionary::Lookup;
use crate::interpreter::options::TranslateOptions;
use crate::interpreter::{TranslateError, interpolate, resolve};
use crate::types::{Content, Interpolations};

/// Resolves keys against a dictionary bound at construction.
///
/// A translator borrows its dictionary and keeps no state between calls,
/// so every call is a pure function of the dictionary, the key, the
/// interpolations, and the options.
///
/// # Example
///
/// ```
/// use twine::{Translator, TranslationDictionary, interpolations};
///
/// let dictionary = TranslationDictionary::new()
///     .with_template("greeting", "Hello {who}!");
/// let translator = Translator::new(&dictionary);
///
/// let text = translator
///     .translate("greeting", Some(&interpolations! { "who" => "you" }))
///     .unwrap();
/// assert_eq!(text, "Hello you!");
/// ```
#[derive(Debug, Builder)]
pub struct Translator<'d, D: Lookup + ?Sized> {
    dictionary: &'d D,

    #[builder(default)]
    options: TranslateOptions,
}

impl<'d, D: Lookup + ?Sized> Translator<'d, D> {
    /// Create a translator with default options.
    pub fn new(dictionary: &'d D) -> Self {
        Translator::builder().dictionary(dictionary).build()
    }

    pub fn dictionary(&self) -> &'d D {
        self.dictionary
    }

    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    /// Translate `key`, producing plain text or a content tree.
    ///
    /// # Errors
    ///
    /// Fails if the key does not resolve to a template or a placeholder has
    /// no usable interpolation entry.
    pub fn translate(
        &self,
        key: &str,
        interpolations: Option<&Interpolations>,
    ) -> Result<Content, TranslateError> {
        let template = resolve(self.dictionary, key)?;
        interpolate(template, interpolations, &self.options)
    }

    /// Translate `key` and require a plain-text result.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`Translator::translate`], returns
    /// [`TranslateError::UnexpectedMarkup`] if the result holds tag spans.
    pub fn translate_text(
        &self,
        key: &str,
        interpolations: Option<&Interpolations>,
    ) -> Result<String, TranslateError> {
        match self.translate(key, interpolations)? {
            Content::Text(text) => Ok(text),
            Content::Tree(_) => Err(TranslateError::UnexpectedMarkup {
                key: key.to_string(),
            }),
        }
    }

    /// Get the raw template for `key` without interpolating it.
    pub fn template(&self, key: &str) -> Result<&'d str, TranslateError> {
        resolve(self.dictionary, key)
    }

    /// Check whether `key` resolves to a template.
    pub fn contains(&self, key: &str) -> bool {
        resolve(self.dictionary, key).is_ok()
    }
}

/// Translate `key` against `dictionary` with default options.
///
/// # Errors
///
/// See [`Translator::translate`].
pub fn translate<D: Lookup + ?Sized>(
    dictionary: &D,
    key: &str,
    interpolations: Option<&Interpolations>,
) -> Result<Content, TranslateError> {
    let template = resolve(dictionary, key)?;
    interpolate(template, interpolations, &TranslateOptions::default())
}
