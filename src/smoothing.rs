//! Per-side temporal smoothing of boundary fits.
//!
//! Each side keeps a bounded FIFO of its most recent fits. The smoothed fit
//! is the component-wise mean of everything in the window. A frame without a
//! fit leaves the window untouched, so a boundary survives short detection
//! dropouts and only disappears once its window has been emptied by
//! [`FitHistory::clear`].

use crate::types::LineFit;
use std::collections::VecDeque;

pub const DEFAULT_SMOOTHING_WINDOW: usize = 5;

/// Bounded history of recent fits for one side.
#[derive(Clone, Debug)]
pub struct FitHistory {
    fits: VecDeque<LineFit>,
    window: usize,
}

impl Default for FitHistory {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING_WINDOW)
    }
}

impl FitHistory {
    /// Create an empty history holding at most `window` fits (at least one).
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            fits: VecDeque::with_capacity(window + 1),
            window,
        }
    }

    /// Record this frame's fit (if any) and return the smoothed fit.
    ///
    /// A missing fit never evicts older entries.
    pub fn update(&mut self, fit: Option<LineFit>) -> Option<LineFit> {
        if let Some(fit) = fit {
            self.push(fit);
        }
        self.smoothed()
    }

    /// Append a fit, evicting the oldest entries beyond the window.
    pub fn push(&mut self, fit: LineFit) {
        self.fits.push_back(fit);
        while self.fits.len() > self.window {
            self.fits.pop_front();
        }
    }

    /// Component-wise mean of the fits currently in the window.
    pub fn smoothed(&self) -> Option<LineFit> {
        if self.fits.is_empty() {
            return None;
        }
        // Running mean: a window of identical fits reproduces the fit exactly.
        let mut mean = LineFit::new(0.0, 0.0);
        for (k, fit) in self.fits.iter().enumerate() {
            let w = 1.0 / (k + 1) as f64;
            mean.slope += (fit.slope - mean.slope) * w;
            mean.intercept += (fit.intercept - mean.intercept) * w;
        }
        Some(mean)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineFit> + '_ {
        self.fits.iter()
    }

    pub fn len(&self) -> usize {
        self.fits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fits.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn clear(&mut self) {
        self.fits.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_history_has_no_smoothed_fit() {
        let mut history = FitHistory::default();
        assert!(history.smoothed().is_none());
        assert!(history.update(None).is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn identical_fits_smooth_to_themselves_exactly() {
        let fit = LineFit::new(-0.789_473_684_210_526_3, 478.947_368_421_052_6);
        let mut history = FitHistory::new(5);
        let mut smoothed = None;
        for _ in 0..5 {
            smoothed = history.update(Some(fit));
        }
        assert_eq!(smoothed, Some(fit));
    }

    #[test]
    fn length_never_exceeds_window() {
        let mut history = FitHistory::new(5);
        for i in 0..12 {
            history.update(Some(LineFit::new(i as f64, 0.0)));
            assert!(history.len() <= 5);
        }
        assert_eq!(history.len(), 5);
    }

    #[test]
    fn oldest_fit_is_evicted_first() {
        let mut history = FitHistory::new(5);
        for i in 1..=5 {
            history.update(Some(LineFit::new(i as f64, 10.0 * i as f64)));
        }
        let before = history.smoothed().unwrap();
        assert!(approx_eq(before.slope, 3.0));
        assert!(approx_eq(before.intercept, 30.0));

        // The sixth update drops the fit (1, 10).
        let after = history.update(Some(LineFit::new(6.0, 60.0))).unwrap();
        assert!(approx_eq(after.slope, 4.0));
        assert!(approx_eq(after.intercept, 40.0));
        assert!(history.iter().all(|f| f.slope > 1.0));
        assert!(approx_eq(after.slope - before.slope, (6.0 - 1.0) / 5.0));
    }

    #[test]
    fn missing_fit_keeps_history_and_estimate() {
        let mut history = FitHistory::new(5);
        history.update(Some(LineFit::new(1.0, 2.0)));
        history.update(Some(LineFit::new(3.0, 4.0)));
        let before = history.smoothed();
        for _ in 0..10 {
            assert_eq!(history.update(None), before);
            assert_eq!(history.len(), 2);
        }
    }

    #[test]
    fn zero_window_is_clamped_to_one() {
        let mut history = FitHistory::new(0);
        assert_eq!(history.window(), 1);
        history.update(Some(LineFit::new(1.0, 1.0)));
        let smoothed = history.update(Some(LineFit::new(2.0, 2.0)));
        assert_eq!(smoothed, Some(LineFit::new(2.0, 2.0)));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn clear_empties_history() {
        let mut history = FitHistory::default();
        history.update(Some(LineFit::new(1.0, 1.0)));
        history.clear();
        assert!(history.smoothed().is_none());
    }
}
