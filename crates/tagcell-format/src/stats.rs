//! Normal distribution curves for chart cells

use std::f64::consts::PI;

/// Sample count used when no precision is given
pub const DEFAULT_CURVE_POINTS: usize = 201;

/// Density of the normal distribution with the given mean and variance at `x`
pub fn normal_distribution(average: f64, variance: f64, x: f64) -> f64 {
    (-(x - average).powi(2) / (2.0 * variance)).exp() / (2.0 * PI * variance).sqrt()
}

/// Sample the normal distribution fitted to `values` as `(x, density)` points.
///
/// The x range spans the values widened on both sides by half the mean plus
/// three times the variance-to-mean ratio. A zero variance is taken as
/// `0.001`. Non-finite values are skipped; no values give no points.
pub fn normal_distribution_curve(values: &[f64], points: Option<usize>) -> Vec<(f64, f64)> {
    let values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if values.is_empty() {
        return Vec::new();
    }
    let points = points.filter(|p| *p > 0).unwrap_or(DEFAULT_CURVE_POINTS);

    let count = values.len() as f64;
    let average = values.iter().sum::<f64>() / count;
    let mut variance = values.iter().map(|v| (v - average).powi(2)).sum::<f64>() / count;
    if variance == 0.0 {
        variance = 0.001;
    }

    let spread = if average == 0.0 {
        0.0
    } else {
        average / 100.0 * 50.0 + variance / average * 3.0
    };
    let max = values.iter().copied().fold(f64::MIN, f64::max) + spread;
    let min = values.iter().copied().fold(f64::MAX, f64::min) - spread;

    (0..points)
        .map(|i| {
            let x = (max - min) * i as f64 / points as f64 + min;
            (x, normal_distribution(average, variance, x))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_normal_density() {
        let peak = normal_distribution(0.0, 1.0, 0.0);
        assert!((peak - 0.398_942_280_401_432_7).abs() < 1e-12);
        assert_eq!(
            normal_distribution(0.0, 1.0, 1.0),
            normal_distribution(0.0, 1.0, -1.0)
        );
    }

    #[test]
    fn test_curve_shape() {
        let curve = normal_distribution_curve(&[10.0, 12.0, 14.0], None);
        assert_eq!(curve.len(), DEFAULT_CURVE_POINTS);
        assert!(curve.windows(2).all(|w| w[0].0 < w[1].0));

        // densest sample is the one nearest the mean
        let (x, _) = curve
            .iter()
            .copied()
            .fold((0.0, f64::MIN), |best, p| if p.1 > best.1 { p } else { best });
        assert!((x - 12.0).abs() < 0.2);
    }

    #[test]
    fn test_curve_edge_cases() {
        assert!(normal_distribution_curve(&[], None).is_empty());
        assert!(normal_distribution_curve(&[f64::NAN], Some(5)).is_empty());

        let flat = normal_distribution_curve(&[5.0, 5.0], Some(4));
        assert_eq!(flat.len(), 4);
        assert!(flat.iter().all(|(x, y)| x.is_finite() && y.is_finite()));

        let zero = normal_distribution_curve(&[0.0, 0.0], Some(3));
        assert!(zero.iter().all(|(x, y)| x.is_finite() && y.is_finite()));
    }
}
