//! Stacked label sizing
//!
//! Sizes several labels that share one container, stacked vertically with
//! equal row heights. Each label gets the full container width and
//! `container_height / labels` of height, and is fitted on its own.

use crate::{FitError, FitRequest, FontFitter, Result, TextMeasurer};

/// Container and font range shared by every row of a stack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackLayout {
    pub min_font_size: f64,
    pub max_font_size: f64,
    pub container_width: f64,
    pub container_height: f64,
    pub word_safe: bool,
}

impl StackLayout {
    pub fn new(
        min_font_size: f64,
        max_font_size: f64,
        container_width: f64,
        container_height: f64,
    ) -> Self {
        Self {
            min_font_size,
            max_font_size,
            container_width,
            container_height,
            word_safe: true,
        }
    }

    pub fn word_safe(mut self, word_safe: bool) -> Self {
        self.word_safe = word_safe;
        self
    }

    /// Height available to each of `rows` labels
    pub fn row_height(&self, rows: usize) -> f64 {
        self.container_height / rows as f64
    }
}

/// Fit every label in `texts`, returning one font size per label in order.
pub fn fit_stack<M>(
    fitter: &FontFitter<'_, M>,
    texts: &[&str],
    layout: &StackLayout,
) -> Result<Vec<f64>>
where
    M: TextMeasurer + ?Sized,
{
    if texts.is_empty() {
        return Err(FitError::InvalidArgument("no labels to size".into()));
    }

    let row_height = layout.row_height(texts.len());
    texts
        .iter()
        .map(|text| {
            let request = FitRequest::new(
                text,
                layout.min_font_size,
                layout.max_font_size,
                layout.container_width,
                row_height,
            )
            .word_safe(layout.word_safe);
            fitter.calculate_max_font_size(&request)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MeasurementRequest, MeasurementResult};

    fn one_line(request: &MeasurementRequest<'_>) -> Result<MeasurementResult> {
        Ok(MeasurementResult::new(request.font_size))
    }

    #[test]
    fn test_rows_split_height_evenly() {
        let layout = StackLayout::new(10.0, 100.0, 400.0, 200.0);
        assert_eq!(layout.row_height(4), 50.0);
    }

    #[test]
    fn test_fit_stack_sizes_each_label() {
        let fitter = FontFitter::new(&one_line);
        let layout = StackLayout::new(10.0, 100.0, 400.0, 200.0).word_safe(false);
        let sizes = fit_stack(&fitter, &["one", "two", "three", "four"], &layout).unwrap();

        assert_eq!(sizes.len(), 4);
        for size in sizes {
            assert!(size <= 50.0);
            assert!(size + 1.0 > 50.0);
        }
    }

    #[test]
    fn test_fit_stack_matches_single_fit() {
        let fitter = FontFitter::new(&one_line);
        let layout = StackLayout::new(10.0, 100.0, 400.0, 120.0);
        let sizes = fit_stack(&fitter, &["alpha", "beta"], &layout).unwrap();

        let single = fitter
            .calculate_max_font_size(&FitRequest::new("beta", 10.0, 100.0, 400.0, 60.0))
            .unwrap();
        assert_eq!(sizes[1], single);
    }

    #[test]
    fn test_fit_stack_rejects_empty() {
        let fitter = FontFitter::new(&one_line);
        let layout = StackLayout::new(10.0, 100.0, 400.0, 200.0);
        let err = fit_stack(&fitter, &[], &layout).unwrap_err();
        assert!(matches!(err, FitError::InvalidArgument(_)));
    }

    #[test]
    fn test_fit_stack_propagates_invalid_label() {
        let fitter = FontFitter::new(&one_line);
        let layout = StackLayout::new(10.0, 100.0, 400.0, 200.0);
        let err = fit_stack(&fitter, &["ok", ""], &layout).unwrap_err();
        assert!(matches!(err, FitError::InvalidArgument(_)));
    }
}
