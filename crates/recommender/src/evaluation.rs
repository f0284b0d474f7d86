//! Offline evaluation metrics for ranked recommendations
//!
//! Scores a ranked prediction list against the items a reader actually
//! engaged with. Intersections count distinct shared items.
//!
//! Precision is normalised by the number of true items and recall by the
//! number of predictions:
//!
//! ```
//! use scholarrec_recommender::evaluation::{precision, recall};
//!
//! assert!((precision(&[1, 2, 3], &[1, 4, 5]).unwrap() - 1.0 / 3.0).abs() < 1e-9);
//! assert_eq!(recall(&[1, 2, 3], &[1, 2, 5, 4]).unwrap(), 0.5);
//! ```

use scholarrec_common::errors::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// Default cutoff for [`avg_precision`]
pub const DEFAULT_MAX_K: usize = 20;

/// Cutoff metrics computed by [`cls_metrics`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClsMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Precision, recall and F1 over the first `top_k` predictions.
///
/// `top_k` of `None` or `Some(0)` uses `y_true.len()`. Fails when
/// `y_pred` holds fewer than `top_k` items.
///
/// ```
/// use scholarrec_recommender::evaluation::cls_metrics;
///
/// let m = cls_metrics(&[1, 2, 3, 4], &[1, 4, 5, 6, 7], Some(2)).unwrap();
/// assert_eq!((m.precision, m.recall), (0.5, 1.0));
/// ```
pub fn cls_metrics<T: Eq + Hash>(y_true: &[T], y_pred: &[T], top_k: Option<usize>) -> Result<ClsMetrics> {
    non_empty(y_true, "y_true")?;

    let top_k = top_k.filter(|&k| k > 0).unwrap_or(y_true.len());
    if y_pred.len() < top_k {
        return Err(AppError::InsufficientPredictions { top_k, len: y_pred.len() });
    }

    let y_pred = &y_pred[..top_k];

    Ok(ClsMetrics {
        precision: precision(y_true, y_pred)?,
        recall: recall(y_true, y_pred)?,
        f1: f1_score(y_true, y_pred)?,
    })
}

/// Average of the precision values at each relevant position within the
/// first `max_k` predictions, divided by `min(|y_true|, |y_pred[..max_k]|)`.
pub fn avg_precision<T: PartialEq>(y_true: &[T], y_pred: &[T], max_k: usize) -> Result<f64> {
    let y_pred = &y_pred[..y_pred.len().min(max_k)];
    non_empty(y_true, "y_true")?;
    non_empty(y_pred, "y_pred")?;

    let m = y_true.len().min(y_pred.len());
    let mut total = 0.0;
    let mut hits = 0usize;

    for (i, pred) in y_pred.iter().enumerate() {
        if y_true.contains(pred) {
            hits += 1;
            total += hits as f64 / (i + 1) as f64;
        }
    }

    Ok(total / m as f64)
}

/// Mean of [`avg_precision`] over `(y_true, y_pred)` query pairs
pub fn mean_avg_precision<T: PartialEq>(queries: &[(Vec<T>, Vec<T>)], max_k: usize) -> Result<f64> {
    non_empty(queries, "queries")?;

    let mut sum = 0.0;
    for (y_true, y_pred) in queries {
        sum += avg_precision(y_true, y_pred, max_k)?;
    }

    Ok(sum / queries.len() as f64)
}

/// Shared items divided by `|y_true|`
pub fn precision<T: Eq + Hash>(y_true: &[T], y_pred: &[T]) -> Result<f64> {
    non_empty(y_true, "y_true")?;
    Ok(shared_count(y_true, y_pred) as f64 / y_true.len() as f64)
}

/// Shared items divided by `|y_pred|`
pub fn recall<T: Eq + Hash>(y_true: &[T], y_pred: &[T]) -> Result<f64> {
    non_empty(y_pred, "y_pred")?;
    Ok(shared_count(y_true, y_pred) as f64 / y_pred.len() as f64)
}

/// Harmonic mean of [`precision`] and [`recall`]; 0.0 when both are zero
pub fn f1_score<T: Eq + Hash>(y_true: &[T], y_pred: &[T]) -> Result<f64> {
    let p = precision(y_true, y_pred)?;
    let r = recall(y_true, y_pred)?;

    if p + r == 0.0 {
        return Ok(0.0);
    }
    Ok(2.0 * p * r / (p + r))
}

fn shared_count<T: Eq + Hash>(y_true: &[T], y_pred: &[T]) -> usize {
    let truth: HashSet<&T> = y_true.iter().collect();
    let predicted: HashSet<&T> = y_pred.iter().collect();
    truth.intersection(&predicted).count()
}

fn non_empty<T>(values: &[T], argument: &str) -> Result<()> {
    if values.is_empty() {
        return Err(AppError::EmptyInput { argument: argument.to_string() });
    }
    Ok(())
}
