//! Font Size Fitting
//!
//! Finds the largest font size at which a label's text fits a container.
//!
//! The search runs in up to two passes:
//! 1. Word-safe pass: bisect the font range against the longest word alone,
//!    accepting a size while the word spans no more than `max_word_lines`
//!    lines at the container width. The result becomes the upper bound of
//!    the second pass, so one long word cannot overflow sideways.
//! 2. Height pass: bisect `[min, bound]` against the full text, accepting a
//!    size while the wrapped height stays within the container height.
//!
//! Both passes share [`binary_search_font_size`], which stops once the
//! interval is no wider than the convergence tolerance and returns the lower
//! (last accepted) bound.

use crate::{FitError, LocaleDelimiterTable, Result, SizeProbe, TextMeasurer};
use serde::{Deserialize, Serialize};

/// Locale used when the host does not set one
pub const DEFAULT_LOCALE: &str = "en-US";

/// Tunables for the search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Maximum number of lines the longest word may span in the word-safe pass
    pub max_word_lines: f64,
    /// Search stops once `upper - lower` is no larger than this
    pub convergence_tolerance: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            max_word_lines: 2.0,
            convergence_tolerance: 1.0,
        }
    }
}

impl FitConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.max_word_lines.is_finite() && self.max_word_lines > 0.0) {
            return Err(FitError::InvalidArgument(format!(
                "max_word_lines must be positive, got {}",
                self.max_word_lines
            )));
        }
        if !(self.convergence_tolerance.is_finite() && self.convergence_tolerance > 0.0) {
            return Err(FitError::InvalidArgument(format!(
                "convergence_tolerance must be positive, got {}",
                self.convergence_tolerance
            )));
        }
        Ok(())
    }
}

/// A single sizing request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRequest<'a> {
    pub text: &'a str,
    pub min_font_size: f64,
    pub max_font_size: f64,
    pub container_width: f64,
    pub container_height: f64,
    /// Bound the size by the longest word first (default `true`)
    pub word_safe: bool,
    /// Test against `max_word_lines` instead of the container height
    /// (default `false`).
    ///
    /// Meant for the word-constrained pass; callers should not combine it
    /// with `word_safe`.
    pub size_for_width: bool,
}

impl<'a> FitRequest<'a> {
    pub fn new(
        text: &'a str,
        min_font_size: f64,
        max_font_size: f64,
        container_width: f64,
        container_height: f64,
    ) -> Self {
        Self {
            text,
            min_font_size,
            max_font_size,
            container_width,
            container_height,
            word_safe: true,
            size_for_width: false,
        }
    }

    pub fn word_safe(mut self, word_safe: bool) -> Self {
        self.word_safe = word_safe;
        self
    }

    pub fn size_for_width(mut self, size_for_width: bool) -> Self {
        self.size_for_width = size_for_width;
        self
    }

    /// Reject requests the search cannot give a meaningful answer for
    pub fn validate(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(FitError::InvalidArgument("text is empty".into()));
        }
        if !(self.min_font_size.is_finite() && self.min_font_size > 0.0) {
            return Err(FitError::InvalidArgument(format!(
                "min_font_size must be positive, got {}",
                self.min_font_size
            )));
        }
        if !(self.max_font_size.is_finite() && self.max_font_size > self.min_font_size) {
            return Err(FitError::InvalidArgument(format!(
                "max_font_size ({}) must be greater than min_font_size ({})",
                self.max_font_size, self.min_font_size
            )));
        }
        if !(self.container_width.is_finite() && self.container_width > 0.0) {
            return Err(FitError::InvalidArgument(format!(
                "container_width must be positive, got {}",
                self.container_width
            )));
        }
        if !(self.container_height.is_finite() && self.container_height >= 0.0) {
            return Err(FitError::InvalidArgument(format!(
                "container_height must not be negative, got {}",
                self.container_height
            )));
        }
        Ok(())
    }
}

/// Result of one bisection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// Lower bound at convergence
    pub font_size: f64,
    /// Number of measurements taken
    pub probes: usize,
}

/// Result of a complete fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOutcome {
    /// Largest fitting font size found
    pub font_size: f64,
    /// Upper bound produced by the word-safe pass, if it ran
    pub word_bound: Option<f64>,
    /// Measurements taken across both passes
    pub probes: usize,
}

/// Bisect `[low, high]` until it is no wider than `tolerance`.
///
/// `probe` measures a candidate size; `fits` decides whether that
/// measurement is acceptable. Accepted candidates raise the lower bound,
/// rejected ones lower the upper bound. The lower bound is returned, so the
/// result is always below `high`; a range already no wider than `tolerance`
/// returns `low` without probing.
pub fn binary_search_font_size<P, F>(
    mut probe: P,
    mut fits: F,
    low: f64,
    high: f64,
    tolerance: f64,
) -> Result<SearchOutcome>
where
    P: FnMut(f64) -> Result<SizeProbe>,
    F: FnMut(&SizeProbe) -> bool,
{
    let mut lower = low;
    let mut upper = high;
    let mut probes = 0;

    while upper - lower > tolerance {
        let font_size = (lower + upper) / 2.0;
        let sample = probe(font_size)?;
        probes += 1;

        let accepted = fits(&sample);
        tracing::trace!(
            font_size,
            rendered_height = sample.rendered_height,
            accepted,
            "size probe"
        );

        if accepted {
            lower = font_size;
        } else {
            upper = font_size;
        }
    }

    Ok(SearchOutcome {
        font_size: lower,
        probes,
    })
}

/// Largest-font-size search over a host measurer
pub struct FontFitter<'m, M: TextMeasurer + ?Sized> {
    measurer: &'m M,
    delimiters: LocaleDelimiterTable,
    locale: String,
    config: FitConfig,
}

impl<'m, M: TextMeasurer + ?Sized> FontFitter<'m, M> {
    /// Create a fitter with the default delimiter table, locale and config
    pub fn new(measurer: &'m M) -> Self {
        Self {
            measurer,
            delimiters: LocaleDelimiterTable::default(),
            locale: DEFAULT_LOCALE.to_string(),
            config: FitConfig::default(),
        }
    }

    pub fn with_delimiters(mut self, delimiters: LocaleDelimiterTable) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Set the active UI locale used to pick the word delimiter
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_config(mut self, config: FitConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn delimiters(&self) -> &LocaleDelimiterTable {
        &self.delimiters
    }

    /// Largest font size in `[min_font_size, max_font_size)` at which the
    /// request's text fits its container.
    pub fn calculate_max_font_size(&self, request: &FitRequest<'_>) -> Result<f64> {
        self.fit(request).map(|outcome| outcome.font_size)
    }

    /// Like [`calculate_max_font_size`](Self::calculate_max_font_size), also
    /// reporting the word bound and probe count.
    pub fn fit(&self, request: &FitRequest<'_>) -> Result<FitOutcome> {
        self.config.validate()?;
        request.validate()?;

        let word_pass = if request.word_safe {
            Some(self.compute_word_constrained_bound(request)?)
        } else {
            None
        };
        let upper = word_pass.map_or(request.max_font_size, |pass| pass.font_size);

        let main_pass = if request.size_for_width {
            self.search_word_lines(request.text, request, upper)?
        } else {
            self.compute_height_constrained_size(request, upper)?
        };

        let outcome = FitOutcome {
            font_size: main_pass.font_size,
            word_bound: word_pass.map(|pass| pass.font_size),
            probes: main_pass.probes + word_pass.map_or(0, |pass| pass.probes),
        };

        tracing::debug!(
            text_len = request.text.len(),
            min_font_size = request.min_font_size,
            max_font_size = request.max_font_size,
            container_width = request.container_width,
            container_height = request.container_height,
            word_bound = ?outcome.word_bound,
            font_size = outcome.font_size,
            probes = outcome.probes,
            "fitted label font size"
        );

        Ok(outcome)
    }

    /// Largest size at which the longest word of the text spans no more than
    /// `max_word_lines` lines at the container width.
    ///
    /// Text without a delimiter is treated as one word and bounded against
    /// itself.
    pub fn compute_word_constrained_bound(&self, request: &FitRequest<'_>) -> Result<SearchOutcome> {
        let word = self.delimiters.longest_word(request.text, &self.locale);
        self.search_word_lines(word, request, request.max_font_size)
    }

    /// Largest size in `[min_font_size, upper)` at which the full text's
    /// wrapped height stays within the container height.
    pub fn compute_height_constrained_size(
        &self,
        request: &FitRequest<'_>,
        upper: f64,
    ) -> Result<SearchOutcome> {
        let container_height = request.container_height;
        binary_search_font_size(
            |font_size| {
                SizeProbe::take(self.measurer, request.text, font_size, request.container_width)
            },
            |probe| probe.rendered_height <= container_height,
            request.min_font_size,
            upper,
            self.config.convergence_tolerance,
        )
    }

    fn search_word_lines(
        &self,
        text: &str,
        request: &FitRequest<'_>,
        upper: f64,
    ) -> Result<SearchOutcome> {
        let max_lines = self.config.max_word_lines;
        binary_search_font_size(
            |font_size| SizeProbe::take(self.measurer, text, font_size, request.container_width),
            |probe| probe.lines() <= max_lines,
            request.min_font_size,
            upper,
            self.config.convergence_tolerance,
        )
    }
}
