//! Fitter settings
//!
//! Serde-backed defaults for the font range, search tunables and locale
//! delimiters. Hosts hand in the JSON; nothing is read from or written to
//! disk here.

use crate::{
    FitConfig, FitRequest, FontFitter, LocaleDelimiterTable, Result, TextMeasurer, DEFAULT_LOCALE,
};
use serde::{Deserialize, Serialize};

/// Persisted sizing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitSettings {
    /// Smallest font size a label may be given
    pub min_font_size: f64,
    /// Exclusive upper bound on the font size
    pub max_font_size: f64,
    /// Whether to bound sizes by the longest word
    pub word_safe: bool,
    /// Active UI locale (e.g. "en-US")
    pub locale: String,
    /// Search tunables
    pub fit: FitConfig,
    /// Word delimiter per locale
    pub locale_delimiters: LocaleDelimiterTable,
}

impl Default for FitSettings {
    fn default() -> Self {
        Self {
            min_font_size: 10.0,
            max_font_size: 100.0,
            word_safe: true,
            locale: DEFAULT_LOCALE.to_string(),
            fit: FitConfig::default(),
            locale_delimiters: LocaleDelimiterTable::default(),
        }
    }
}

impl FitSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a fitter over `measurer` using these settings
    pub fn fitter<'m, M>(&self, measurer: &'m M) -> FontFitter<'m, M>
    where
        M: TextMeasurer + ?Sized,
    {
        FontFitter::new(measurer)
            .with_delimiters(self.locale_delimiters.clone())
            .with_locale(self.locale.clone())
            .with_config(self.fit)
    }

    /// Build a request for `text` in a `width` x `height` container
    pub fn request<'a>(&self, text: &'a str, width: f64, height: f64) -> FitRequest<'a> {
        FitRequest::new(text, self.min_font_size, self.max_font_size, width, height)
            .word_safe(self.word_safe)
    }
}
