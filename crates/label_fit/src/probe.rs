//! Size probes
//!
//! A probe is one measurement of the label text at one candidate font size.
//! Probes are taken fresh for every candidate and never mutated afterwards.

use crate::{MeasurementRequest, Result, TextMeasurer};

/// Rendered height of a text at a single font size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeProbe {
    /// Font size the text was measured at
    pub font_size: f64,
    /// Height reported by the measurer
    pub rendered_height: f64,
}

impl SizeProbe {
    /// Measure `text` at `font_size`, wrapped at `max_width`.
    pub fn take<M>(measurer: &M, text: &str, font_size: f64, max_width: f64) -> Result<Self>
    where
        M: TextMeasurer + ?Sized,
    {
        let result = measurer.measure(&MeasurementRequest::new(text, font_size, max_width))?;
        Ok(Self {
            font_size,
            rendered_height: result.rendered_height,
        })
    }

    /// Rendered height in units of the font size, i.e. roughly the number
    /// of lines the text occupies.
    pub fn lines(&self) -> f64 {
        self.rendered_height / self.font_size
    }
}
