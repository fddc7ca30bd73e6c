pub mod clean;
pub mod compare;
pub mod fetch;
pub mod prepare;
pub mod profile;
pub mod random;
pub mod revcomp;

use crate::profile::OffsetRange;
use crate::utils::Result;

/// Resolves the offsets to aggregate for sequences of at most `max_len` bases.
///
/// Without an explicit upper bound the range spans one offset per k-mer
/// window of the longest sequence.
pub fn resolve_range(
    lowest: i32,
    highest: Option<i32>,
    max_len: usize,
    k: usize,
) -> Result<OffsetRange> {
    let range = match highest {
        Some(highest) => OffsetRange::new(lowest, highest)?,
        None => OffsetRange::for_windows(max_len, k, lowest)?,
    };
    log::debug!(
        "Aggregating offsets {}..={} ({} slots)",
        range.lowest(),
        range.highest(),
        range.len()
    );
    Ok(range)
}
