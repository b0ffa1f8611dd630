//! Linear quantiles and `qcut`-style quantile binning.

use crate::MathError;

/// Linear interpolation that stays exact at both endpoints.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t < 0.5 { a + diff * t } else { b - diff * (1.0 - t) }
}

/// Linear-interpolated quantile of data sorted in ascending order.
///
/// The quantile sits at virtual index `p * (n - 1)` and interpolates between
/// its neighbouring order statistics.
///
/// # Errors
/// Returns `MathError::EmptyData` for empty input and
/// `MathError::InvalidProbability` if `p` is outside [0, 1].
pub fn quantile_linear(sorted: &[f64], p: f64) -> Result<f64, MathError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(MathError::InvalidProbability(p));
    }
    let n = sorted.len();
    if n == 0 {
        return Err(MathError::EmptyData);
    }

    let h = (n - 1) as f64 * p;
    let lo = (h.floor() as usize).min(n - 1);
    let hi = (lo + 1).min(n - 1);
    Ok(lerp(sorted[lo], sorted[hi], h - lo as f64))
}

/// Distinct bin edges for `q` equal-frequency buckets.
///
/// Edges are the linear quantiles at `i / q` for `i = 0..=q`. Repeated edges
/// are dropped, so heavily tied data yields fewer buckets. `NaN` values are
/// ignored; an all-missing input has no edges.
///
/// # Errors
/// Returns `MathError::InvalidQuantileCount` if `q == 0`.
pub fn qcut_edges(values: &[f64], q: usize) -> Result<Vec<f64>, MathError> {
    if q == 0 {
        return Err(MathError::InvalidQuantileCount(q));
    }

    let mut sorted: Vec<f64> = values.iter().copied().filter(|x| !x.is_nan()).collect();
    if sorted.is_empty() {
        return Ok(Vec::new());
    }
    sorted.sort_by(f64::total_cmp);

    let mut edges = (0..=q)
        .map(|i| quantile_linear(&sorted, i as f64 / q as f64))
        .collect::<Result<Vec<_>, _>>()?;
    edges.dedup();
    Ok(edges)
}

/// Zero-based quantile bucket of every value.
///
/// A value `x` falls in bucket `i` when `edge_i < x <= edge_{i+1}`; the
/// lowest edge is inclusive. Missing values, and every value when fewer than
/// two distinct edges exist, get `None`.
///
/// # Errors
/// Returns `MathError::InvalidQuantileCount` if `q == 0`.
pub fn qcut_labels(values: &[f64], q: usize) -> Result<Vec<Option<usize>>, MathError> {
    let edges = qcut_edges(values, q)?;
    if edges.len() < 2 {
        return Ok(vec![None; values.len()]);
    }

    let labels = values
        .iter()
        .map(|&x| {
            if x.is_nan() {
                return None;
            }
            let id = if x == edges[0] { 1 } else { edges.partition_point(|&e| e < x) };
            (id > 0 && id < edges.len()).then(|| id - 1)
        })
        .collect();
    Ok(labels)
}
