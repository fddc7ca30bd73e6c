use crate::utils::Result;

/// Offset that follows `offset`; the anchor itself (0) is never an index.
pub fn next_offset(offset: i32) -> Option<i32> {
    if offset == -1 {
        Some(1)
    } else {
        offset.checked_add(1)
    }
}

/// Inclusive range of offsets around the anchor, 0 excluded.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct OffsetRange {
    lowest: i32,
    highest: i32,
}

impl OffsetRange {
    pub fn new(lowest: i32, highest: i32) -> Result<Self> {
        if lowest == 0 || highest == 0 {
            return Err(format!(
                "Offset 0 is the anchor and cannot bound a range: {}..{}",
                lowest, highest
            ));
        }
        if lowest > highest {
            return Err(format!(
                "Invalid offset range: lowest {} > highest {}",
                lowest, highest
            ));
        }
        Ok(Self { lowest, highest })
    }

    /// Range in which each window of a `seq_len` long sequence gets one offset.
    pub fn for_windows(seq_len: usize, k: usize, lowest: i32) -> Result<Self> {
        let windows = (seq_len + 1)
            .checked_sub(k)
            .filter(|&windows| windows > 0 && k > 0)
            .ok_or(format!(
                "Sequences of length {} hold no window of length {}",
                seq_len, k
            ))?;
        let windows = i64::try_from(windows).map_err(|e| e.to_string())?;
        let mut highest = lowest as i64 + windows - 1;
        if lowest < 0 && highest >= 0 {
            highest += 1;
        }
        let highest = i32::try_from(highest)
            .map_err(|_| format!("Offset range starting at {} overflows", lowest))?;
        Self::new(lowest, highest)
    }

    pub fn lowest(&self) -> i32 {
        self.lowest
    }

    pub fn highest(&self) -> i32 {
        self.highest
    }

    /// Number of offsets in the range.
    pub fn len(&self) -> usize {
        let span = self.highest as i64 - self.lowest as i64 + 1;
        let anchor = (self.lowest < 0 && self.highest > 0) as i64;
        (span - anchor) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Walks the range from its lowest offset: …, -2, -1, 1, 2, …
    pub fn cursor(&self) -> OffsetCursor {
        OffsetCursor {
            next: Some(self.lowest),
            highest: self.highest,
        }
    }
}

/// State machine over the offsets of an [`OffsetRange`].
///
/// Each call to `next` hands out the current offset and advances by one
/// step, jumping from -1 straight to 1. It is exhausted past the upper bound.
#[derive(Debug, Clone)]
pub struct OffsetCursor {
    next: Option<i32>,
    highest: i32,
}

impl Iterator for OffsetCursor {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let current = self.next.filter(|&offset| offset <= self.highest)?;
        self.next = next_offset(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_offset_skips_anchor() {
        assert_eq!(next_offset(-2), Some(-1));
        assert_eq!(next_offset(-1), Some(1));
        assert_eq!(next_offset(1), Some(2));
        assert_eq!(next_offset(i32::MAX), None);
    }

    #[test]
    fn cursor_walks_range_without_zero() {
        let range = OffsetRange::new(-3, 2).unwrap();
        let offsets: Vec<i32> = range.cursor().collect();
        assert_eq!(offsets, vec![-3, -2, -1, 1, 2]);
        assert_eq!(range.len(), offsets.len());
    }

    #[test]
    fn cursor_steps_by_one_except_single_skip() {
        let range = OffsetRange::new(-50, 30).unwrap();
        let offsets: Vec<i32> = range.cursor().collect();
        assert_eq!(offsets.len(), 80);
        assert_eq!(range.len(), 80);
        assert!(!offsets.contains(&0));
        assert_eq!(offsets.first(), Some(&-50));
        assert_eq!(offsets.last(), Some(&30));

        let steps: Vec<i32> = offsets.windows(2).map(|w| w[1] - w[0]).collect();
        assert_eq!(steps.iter().filter(|&&s| s == 2).count(), 1);
        assert!(steps.iter().all(|&s| s == 1 || s == 2));
        let skip = offsets.windows(2).find(|w| w[1] - w[0] == 2).unwrap();
        assert_eq!(skip, [-1, 1]);
    }

    #[test]
    fn one_sided_ranges_have_no_skip() {
        let below: Vec<i32> = OffsetRange::new(-4, -1).unwrap().cursor().collect();
        assert_eq!(below, vec![-4, -3, -2, -1]);
        let above: Vec<i32> = OffsetRange::new(3, 5).unwrap().cursor().collect();
        assert_eq!(above, vec![3, 4, 5]);
    }

    #[test]
    fn cursor_stops_at_upper_bound() {
        let mut cursor = OffsetRange::new(-1, 1).unwrap().cursor();
        assert_eq!(cursor.next(), Some(-1));
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn cursor_at_integer_limit_terminates() {
        let offsets: Vec<i32> = OffsetRange::new(i32::MAX - 1, i32::MAX)
            .unwrap()
            .cursor()
            .collect();
        assert_eq!(offsets, vec![i32::MAX - 1, i32::MAX]);
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        assert!(OffsetRange::new(0, 10).is_err());
        assert!(OffsetRange::new(-10, 0).is_err());
        assert!(OffsetRange::new(5, -5).is_err());
        assert!(OffsetRange::new(-5, -5).is_ok());
    }

    #[test]
    fn range_for_promoter_windows() {
        assert_eq!(
            OffsetRange::for_windows(81, 2, -50),
            OffsetRange::new(-50, 30)
        );
        assert_eq!(
            OffsetRange::for_windows(81, 4, -50),
            OffsetRange::new(-50, 28)
        );
        assert_eq!(
            OffsetRange::for_windows(81, 6, -50),
            OffsetRange::new(-50, 26)
        );
    }

    #[test]
    fn range_for_windows_covers_every_window() {
        for (seq_len, k, lowest) in [(81, 2, -50), (10, 4, -3), (10, 2, -20), (8, 2, 1)] {
            let range = OffsetRange::for_windows(seq_len, k, lowest).unwrap();
            assert_eq!(range.len(), seq_len - k + 1);
        }
    }

    #[test]
    fn range_ending_just_below_anchor() {
        assert_eq!(OffsetRange::for_windows(51, 2, -50), OffsetRange::new(-50, -1));
        assert_eq!(OffsetRange::for_windows(52, 2, -50), OffsetRange::new(-50, 1));
    }

    #[test]
    fn too_short_for_a_window() {
        assert!(OffsetRange::for_windows(1, 2, -50).is_err());
        assert!(OffsetRange::for_windows(0, 2, -50).is_err());
        assert!(OffsetRange::for_windows(5, 0, -50).is_err());
    }
}
