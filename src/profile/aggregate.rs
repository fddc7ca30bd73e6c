use super::OffsetRange;
use crate::props::PropertyTable;
use crate::utils::Result;
use std::collections::BTreeMap;

/// Mean value of one property at each offset around the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub property: String,
    pub means: BTreeMap<i32, f64>,
}

impl Profile {
    pub fn get(&self, offset: i32) -> Option<f64> {
        self.means.get(&offset).copied()
    }

    pub fn offsets(&self) -> impl Iterator<Item = i32> + '_ {
        self.means.keys().copied()
    }
}

/// Per-property, per-offset running sums.
struct Accumulator<'a> {
    table: &'a PropertyTable,
    range: OffsetRange,
    // sums[property][slot], slots in cursor order
    sums: Vec<Vec<f64>>,
    num_sequences: usize,
}

impl<'a> Accumulator<'a> {
    fn new(table: &'a PropertyTable, range: OffsetRange) -> Self {
        Self {
            table,
            range,
            sums: vec![vec![0.0; range.len()]; table.names().len()],
            num_sequences: 0,
        }
    }

    /// Every window consumes one offset slot, whether or not the table knows it.
    fn add(&mut self, seq: &str) {
        let table = self.table;
        let windows = kmers(seq, table.k());
        for (kmer, (slot, _offset)) in windows.zip(self.range.cursor().enumerate()) {
            if let Some(values) = table.lookup(kmer) {
                for (sums, value) in self.sums.iter_mut().zip(values) {
                    sums[slot] += value;
                }
            }
        }
        self.num_sequences += 1;
    }

    /// Divides by the number of sequences added, including those that never
    /// reached or never matched at a given offset.
    fn finish(self) -> Vec<Profile> {
        let Self {
            table,
            range,
            sums,
            num_sequences,
        } = self;
        let denominator = num_sequences as f64;
        table
            .names()
            .iter()
            .zip(sums)
            .map(|(name, sums)| Profile {
                property: name.clone(),
                means: range
                    .cursor()
                    .zip(sums)
                    .map(|(offset, sum)| (offset, sum / denominator))
                    .collect(),
            })
            .collect()
    }
}

/// Windows of `k` characters, sliding one character at a time.
fn kmers(seq: &str, k: usize) -> impl Iterator<Item = &str> + '_ {
    let bounds: Vec<usize> = seq
        .char_indices()
        .map(|(index, _)| index)
        .chain(std::iter::once(seq.len()))
        .collect();
    let count = bounds.len().saturating_sub(k);
    (0..count).map(move |start| &seq[bounds[start]..bounds[start + k]])
}

/// Mean profile of every table property over `sequences`, in table row order.
pub fn aggregate(
    sequences: &[String],
    table: &PropertyTable,
    range: &OffsetRange,
) -> Result<Vec<Profile>> {
    if sequences.is_empty() {
        return Err("Cannot average over an empty sequence set".to_string());
    }
    let mut accumulator = Accumulator::new(table, *range);
    for seq in sequences {
        accumulator.add(seq);
    }
    Ok(accumulator.finish())
}
