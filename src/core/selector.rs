//! Weighted random selection over an ordered collection.

use crate::domain::model::Weighted;
use crate::utils::error::{Result, SpinnerError};
use rand::Rng;

/// Picks an index with probability proportional to each item's weight.
///
/// Consumes exactly one `f64` draw from `rng`.
pub fn select<T: Weighted, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Result<usize> {
    let total = total_weight(items)?;
    let draw = rng.random::<f64>() * total;
    tracing::debug!(total, draw, "weighted draw");
    pick_with_draw(items, draw)
}

/// Walks the collection subtracting weights from `draw` until it reaches zero.
///
/// `draw` is expected in `[0, total_weight)`. If floating point error leaves
/// the remainder above zero after the last item, the last item wins.
pub fn pick_with_draw<T: Weighted>(items: &[T], draw: f64) -> Result<usize> {
    let last = items.len().checked_sub(1).ok_or(SpinnerError::EmptyInput)?;

    let mut remaining = draw;
    for (index, item) in items.iter().enumerate() {
        remaining -= f64::from(item.weight());
        if remaining <= 0.0 {
            return Ok(index);
        }
    }

    Ok(last)
}

pub fn total_weight<T: Weighted>(items: &[T]) -> Result<f64> {
    if items.is_empty() {
        return Err(SpinnerError::EmptyInput);
    }

    let total: u64 = items.iter().map(|item| u64::from(item.weight())).sum();
    if total == 0 {
        return Err(SpinnerError::InvalidWeight {
            id: "<collection>".to_string(),
            weight: 0,
        });
    }

    Ok(total as f64)
}
