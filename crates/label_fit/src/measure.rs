//! Text measurement requests and the measurer seam
//!
//! The fitter never computes font metrics itself. Every candidate font size
//! is turned into a [`MeasurementRequest`] and handed to a [`TextMeasurer`]
//! supplied by the host toolkit. [`HeuristicMeasurer`] is a toolkit-free
//! approximation for tests and headless use.

use crate::{FitError, Result};
use unicode_segmentation::UnicodeSegmentation;

/// Request to measure text wrapped at a fixed width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementRequest<'a> {
    /// Text to lay out
    pub text: &'a str,
    /// Candidate font size
    pub font_size: f64,
    /// Wrapping width, in the same units as the container
    pub max_width: f64,
}

impl<'a> MeasurementRequest<'a> {
    pub fn new(text: &'a str, font_size: f64, max_width: f64) -> Self {
        Self {
            text,
            font_size,
            max_width,
        }
    }
}

/// Result of a measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementResult {
    /// Height of the wrapped text, in container units
    pub rendered_height: f64,
}

impl MeasurementResult {
    pub fn new(rendered_height: f64) -> Self {
        Self { rendered_height }
    }
}

/// Host text-measurement capability.
///
/// Implementations must respect word wrapping at `request.max_width` and
/// report height in the units the container dimensions are given in.
/// Errors are propagated to the caller of the fitter untouched.
pub trait TextMeasurer {
    fn measure(&self, request: &MeasurementRequest<'_>) -> Result<MeasurementResult>;
}

impl<F> TextMeasurer for F
where
    F: Fn(&MeasurementRequest<'_>) -> Result<MeasurementResult>,
{
    fn measure(&self, request: &MeasurementRequest<'_>) -> Result<MeasurementResult> {
        self(request)
    }
}

/// Approximate measurer using a fixed average glyph width.
///
/// Lines are filled greedily with whitespace-separated words; a word wider
/// than the line is hard-broken by grapheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicMeasurer {
    /// Average glyph advance as a fraction of the font size
    pub glyph_width_em: f64,
    /// Line height as a multiple of the font size
    pub line_height: f64,
}

impl Default for HeuristicMeasurer {
    fn default() -> Self {
        Self {
            glyph_width_em: 0.6,
            line_height: 1.0,
        }
    }
}

impl HeuristicMeasurer {
    pub fn new(glyph_width_em: f64, line_height: f64) -> Self {
        Self {
            glyph_width_em,
            line_height,
        }
    }

    /// Number of lines `text` wraps to. Blank text still occupies one line.
    pub fn line_count(&self, text: &str, font_size: f64, max_width: f64) -> usize {
        let glyph = font_size * self.glyph_width_em;
        let per_line = ((max_width / glyph).floor() as usize).max(1);

        let mut lines = 0usize;
        let mut current: Option<f64> = None;

        for word in text.split_whitespace() {
            let count = word.graphemes(true).count();
            let word_width = count as f64 * glyph;

            match current {
                Some(width) if width + glyph + word_width <= max_width => {
                    current = Some(width + glyph + word_width);
                    continue;
                }
                Some(_) => lines += 1,
                None => {}
            }

            if word_width <= max_width {
                current = Some(word_width);
            } else {
                lines += count / per_line;
                let rest = count % per_line;
                current = (rest > 0).then(|| rest as f64 * glyph);
            }
        }

        if current.is_some() {
            lines += 1;
        }
        lines.max(1)
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&self, request: &MeasurementRequest<'_>) -> Result<MeasurementResult> {
        if !(request.font_size > 0.0) || !(request.max_width > 0.0) {
            return Err(FitError::MeasurementFailed(format!(
                "cannot lay out text at size {} within width {}",
                request.font_size, request.max_width
            )));
        }

        let lines = self.line_count(request.text, request.font_size, request.max_width);
        Ok(MeasurementResult::new(
            lines as f64 * request.font_size * self.line_height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let measurer = HeuristicMeasurer::default();
        // 5 glyphs * 6.0 = 30 wide
        assert_eq!(measurer.line_count("Hello", 10.0, 100.0), 1);
        let result = measurer
            .measure(&MeasurementRequest::new("Hello", 10.0, 100.0))
            .unwrap();
        assert_eq!(result.rendered_height, 10.0);
    }

    #[test]
    fn test_wraps_on_words() {
        let measurer = HeuristicMeasurer::default();
        // "Hello World" is 66 wide at size 10; each word is 30
        assert_eq!(measurer.line_count("Hello World", 10.0, 66.0), 1);
        assert_eq!(measurer.line_count("Hello World", 10.0, 65.0), 2);
    }

    #[test]
    fn test_hard_breaks_long_word() {
        let measurer = HeuristicMeasurer::default();
        // 10 glyphs of 6.0 into a 30-wide line: 5 per line
        assert_eq!(measurer.line_count("abcdefghij", 10.0, 30.0), 2);
        assert_eq!(measurer.line_count("abcdefghijk", 10.0, 30.0), 3);
    }

    #[test]
    fn test_long_word_after_short_word() {
        let measurer = HeuristicMeasurer::default();
        // "ab" on line 1, then "abcdefghij" splits into two full lines
        assert_eq!(measurer.line_count("ab abcdefghij", 10.0, 30.0), 3);
    }

    #[test]
    fn test_blank_text_is_one_line() {
        let measurer = HeuristicMeasurer::default();
        assert_eq!(measurer.line_count("", 10.0, 30.0), 1);
        assert_eq!(measurer.line_count("   ", 10.0, 30.0), 1);
    }

    #[test]
    fn test_line_height_scales_result() {
        let measurer = HeuristicMeasurer::new(0.6, 1.5);
        let result = measurer
            .measure(&MeasurementRequest::new("Hello World", 10.0, 40.0))
            .unwrap();
        assert_eq!(result.rendered_height, 30.0);
    }

    #[test]
    fn test_rejects_degenerate_request() {
        let measurer = HeuristicMeasurer::default();
        let err = measurer
            .measure(&MeasurementRequest::new("Hello", 10.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, FitError::MeasurementFailed(_)));
    }

    #[test]
    fn test_closure_measurer() {
        let measurer = |request: &MeasurementRequest<'_>| -> Result<MeasurementResult> {
            Ok(MeasurementResult::new(request.font_size * 2.0))
        };
        let result = measurer
            .measure(&MeasurementRequest::new("x", 12.0, 100.0))
            .unwrap();
        assert_eq!(result.rendered_height, 24.0);
    }
}
