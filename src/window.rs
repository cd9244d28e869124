//! Temporal window resolution.

use crate::error::PathError;
use crate::types::Timestamp;

/// Clips a requested `[start, end]` window to the network's snapshots.
///
/// `timestamps` must be sorted ascending and deduplicated, as
/// [`TemporalNetwork::timestamps`](crate::TemporalNetwork::timestamps) returns them.
/// A missing `start` defaults to the first snapshot and a missing `end` to the last.
///
/// # Returns
///
/// The snapshots lying in `[start, end]`, in order.
///
/// # Errors
///
/// - [`PathError::NoSnapshots`] if `timestamps` is empty
/// - [`PathError::InvalidWindow`] if `start` is before the first snapshot,
///   `end` is after the last one, or `start > end`
///
/// # Example
///
/// ```rust
/// use tempograph::resolve_window;
///
/// let snapshots = [1, 3, 5, 8];
/// assert_eq!(resolve_window(&snapshots, Some(2), Some(5)).unwrap(), &[3, 5]);
/// assert_eq!(resolve_window(&snapshots, None, Some(3)).unwrap(), &[1, 3]);
/// assert!(resolve_window(&snapshots, Some(9), None).is_err());
/// ```
pub fn resolve_window<T: Timestamp>(
    timestamps: &[T],
    start: Option<T>,
    end: Option<T>,
) -> Result<&[T], PathError> {
    debug_assert!(timestamps.windows(2).all(|pair| pair[0] < pair[1]));

    let (Some(&min), Some(&max)) = (timestamps.first(), timestamps.last()) else {
        return Err(PathError::NoSnapshots);
    };

    let start = start.unwrap_or(min);
    let end = end.unwrap_or(max);

    if start < min || start > end || end > max || start > max {
        return Err(PathError::invalid_window(start, end, min, max));
    }

    let from = timestamps.partition_point(|&t| t < start);
    let to = timestamps.partition_point(|&t| t <= end);

    #[cfg(feature = "logging")]
    log::trace!(
        "resolved window [{start:?}, {end:?}] to {} snapshots",
        to - from
    );

    Ok(&timestamps[from..to])
}
