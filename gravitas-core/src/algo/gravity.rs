//! Two-stage gravity model over a completed distance matrix.
//!
//! Stage one weighs every facility by the demand that reaches it:
//! `F_j = value_j * Σ_i mass_i * decay(d_ij)`.
//! Stage two scores every origin from the facilities it reaches:
//! `A_i = multiplier * Σ_j F_j * decay(d_ij)`, restricted to the `k`
//! smallest terms so that the score reflects the worst-served facilities.

use itertools::Itertools;
use rayon::prelude::*;

use super::matrix::DistanceMatrix;
use crate::Cost;

/// Distances below this are treated as this value so decay stays finite
pub const MIN_DISTANCE: Cost = 1e-3;

/// Inverse-power distance decay; unreachable pairs weigh nothing
pub fn decay(distance: Cost, exponent: f64) -> f64 {
    if distance.is_finite() {
        distance.max(MIN_DISTANCE).powf(-exponent)
    } else {
        0.0
    }
}

/// Stage one: demand-weighted attractiveness of every facility (matrix column)
pub fn facility_metrics(
    matrix: &DistanceMatrix,
    origin_masses: &[f64],
    facility_values: &[f64],
    exponent: f64,
) -> Vec<f64> {
    (0..matrix.cols())
        .into_par_iter()
        .map(|col| {
            let demand: f64 = matrix
                .column(col)
                .zip(origin_masses)
                .map(|(distance, mass)| mass * decay(distance, exponent))
                .sum();
            facility_values[col] * demand
        })
        .collect()
}

/// Stage two: accessibility of every origin (matrix row) from the sum of its
/// `lowest` smallest facility contributions
pub fn origin_metrics(
    matrix: &DistanceMatrix,
    facility_metrics: &[f64],
    exponent: f64,
    multiplier: f64,
    lowest: usize,
) -> Vec<f64> {
    (0..matrix.rows())
        .into_par_iter()
        .map(|row| {
            let access: f64 = matrix
                .row(row)
                .iter()
                .zip(facility_metrics)
                .map(|(&distance, metric)| metric * decay(distance, exponent))
                .k_smallest_by(lowest, f64::total_cmp)
                .sum();
            multiplier * access
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rayon::prelude::*;

    use super::*;

    fn matrix(rows: &[&[Cost]]) -> DistanceMatrix {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut matrix = DistanceMatrix::new(rows.len(), cols);
        matrix
            .par_rows_mut()
            .zip(rows.par_iter())
            .for_each(|(target, source)| target.copy_from_slice(source));
        matrix
    }

    #[test]
    fn decay_is_inverse_power() {
        assert_eq!(decay(2.0, 1.0), 0.5);
        assert!((decay(4.0, 2.0) - 1.0 / 16.0).abs() < 1e-15);
        assert_eq!(decay(Cost::INFINITY, 1.0), 0.0);
        assert!(decay(0.0, 2.0).is_finite());
        assert!(decay(1.0, 1.5) > decay(3.0, 1.5));
    }

    #[test]
    fn single_pair() {
        let m = matrix(&[&[2.0]]);
        let facilities = facility_metrics(&m, &[1.0], &[2.0], 1.0);
        assert_eq!(facilities, vec![1.0]);
        let origins = origin_metrics(&m, &facilities, 1.0, 1.0, 1);
        assert_eq!(origins, vec![0.5]);
    }

    #[test]
    fn unreachable_origin_scores_zero() {
        let inf = Cost::INFINITY;
        let m = matrix(&[&[1.0, 2.0], &[inf, inf]]);
        let facilities = facility_metrics(&m, &[3.0, 100.0], &[1.0, 1.0], 1.0);
        // the disconnected origin adds no demand
        assert_eq!(facilities, vec![3.0, 1.5]);
        let origins = origin_metrics(&m, &facilities, 1.0, 2.0, 2);
        assert_eq!(origins[1], 0.0);
        assert!((origins[0] - 2.0 * (3.0 + 0.75)).abs() < 1e-12);
    }

    #[test]
    fn lowest_keeps_only_the_smallest_contributions() {
        let m = matrix(&[&[1.0, 2.0, 4.0]]);
        let facilities = [8.0, 8.0, 8.0];
        // contributions are 8, 4 and 2
        assert_eq!(origin_metrics(&m, &facilities, 1.0, 1.0, 3), vec![14.0]);
        assert_eq!(origin_metrics(&m, &facilities, 1.0, 1.0, 2), vec![6.0]);
        assert_eq!(origin_metrics(&m, &facilities, 1.0, 1.0, 1), vec![2.0]);
    }

    #[test]
    fn closer_origin_never_scores_lower() {
        let m = matrix(&[&[1.0, 5.0], &[3.0, 5.0]]);
        let facilities = facility_metrics(&m, &[1.0, 1.0], &[2.0, 1.0], 1.5);
        for k in 1..=2 {
            let origins = origin_metrics(&m, &facilities, 1.5, 1.0, k);
            assert!(origins[0] >= origins[1], "k={k}: {origins:?}");
        }
    }
}
