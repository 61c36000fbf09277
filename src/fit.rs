//! Least-squares boundary fitting.
//!
//! Regresses x on y (`x = m * y + b`) so that near-vertical boundaries stay
//! well conditioned. Sums are taken around the centroid in `f64`.

use crate::types::LineFit;
use nalgebra::{Matrix2, Vector2};

const EPS: f64 = 1e-9;

/// Fit `x = slope * y + intercept` to `points` by ordinary least squares.
///
/// Returns `None` when fewer than two points are supplied, when all points
/// share the same row (the regression of x on y is undefined), or when the
/// input contains non-finite coordinates.
pub fn fit_line(points: &[[f32; 2]]) -> Option<LineFit> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let centroid = points
        .iter()
        .fold(Vector2::<f64>::zeros(), |acc, p| acc + to_vec(p))
        / n;

    // Scatter matrix [[sxx, sxy], [sxy, syy]] about the centroid.
    let scatter = points.iter().fold(Matrix2::<f64>::zeros(), |acc, p| {
        let d = to_vec(p) - centroid;
        acc + d * d.transpose()
    });
    let syy = scatter[(1, 1)];
    let sxy = scatter[(0, 1)];
    if !(syy > EPS * n) {
        return None;
    }

    let slope = sxy / syy;
    let fit = LineFit::new(slope, centroid[0] - slope * centroid[1]);
    fit.is_finite().then_some(fit)
}

/// Root-mean-square horizontal residual of `points` against `fit`.
pub fn rms_residual(fit: &LineFit, points: &[[f32; 2]]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = points
        .iter()
        .map(|p| {
            let r = p[0] as f64 - fit.x_at(p[1] as f64);
            r * r
        })
        .sum();
    (sum_sq / points.len() as f64).sqrt()
}

#[inline]
fn to_vec(p: &[f32; 2]) -> Vector2<f64> {
    Vector2::new(p[0] as f64, p[1] as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn recovers_exact_line_from_two_points() {
        // x = 2y + 3
        let fit = fit_line(&[[3.0, 0.0], [23.0, 10.0]]).expect("two points define a line");
        assert!(approx_eq(fit.slope, 2.0), "slope={}", fit.slope);
        assert!(approx_eq(fit.intercept, 3.0), "intercept={}", fit.intercept);
    }

    #[test]
    fn too_few_points_yield_none() {
        assert!(fit_line(&[]).is_none());
        assert!(fit_line(&[[1.0, 2.0]]).is_none());
    }

    #[test]
    fn points_on_one_row_yield_none() {
        assert!(fit_line(&[[1.0, 5.0], [9.0, 5.0], [4.0, 5.0]]).is_none());
    }

    #[test]
    fn vertical_line_has_zero_slope() {
        let fit = fit_line(&[[50.0, 0.0], [50.0, 100.0], [50.0, 240.0]]).unwrap();
        assert!(approx_eq(fit.slope, 0.0));
        assert!(approx_eq(fit.intercept, 50.0));
    }

    #[test]
    fn duplicate_points_do_not_bias_exact_line() {
        let pts = [
            [100.0, 480.0],
            [175.0, 385.0],
            [175.0, 385.0],
            [250.0, 290.0],
        ];
        let fit = fit_line(&pts).unwrap();
        assert!((fit.slope - (-75.0 / 95.0)).abs() < 1e-6);
        assert!((fit.x_at(480.0) - 100.0).abs() < 1e-6);
        assert!(rms_residual(&fit, &pts) < 1e-6);
    }

    #[test]
    fn noisy_points_are_averaged() {
        // x = 0.5y + 10 with symmetric +-1 noise
        let pts = [[11.0, 0.0], [14.0, 10.0], [21.0, 20.0], [24.0, 30.0]];
        let fit = fit_line(&pts).unwrap();
        assert!((fit.slope - 0.46).abs() < 1e-9, "slope={}", fit.slope);
        assert!(rms_residual(&fit, &pts) > 0.0);
    }

    #[test]
    fn non_finite_input_yields_none() {
        assert!(fit_line(&[[f32::NAN, 0.0], [1.0, 10.0]]).is_none());
    }
}
