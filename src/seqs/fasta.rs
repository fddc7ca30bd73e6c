use super::{is_nucleotide, AMBIGUOUS_BASE};
use crate::utils::Result;
use std::io::BufRead;

/// Tally of what happened to the records of a raw input.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct CleanStats {
    pub records: usize,
    pub kept: usize,
    pub empty: usize,
    pub ambiguous: usize,
    pub invalid: usize,
}

impl CleanStats {
    pub fn dropped(&self) -> usize {
        self.empty + self.ambiguous + self.invalid
    }
}

/// Collapses multi-record text into one uppercase sequence per record.
///
/// Header lines (`>`) are discarded and the content lines of a record are
/// joined. Records that end up empty, contain the ambiguous base `N`, or any
/// other character outside ACGT are dropped whole.
pub fn clean_records<R: BufRead>(reader: R) -> Result<(Vec<String>, CleanStats)> {
    let mut sequences = Vec::new();
    let mut stats = CleanStats::default();
    let mut pending = String::new();
    let mut in_record = false;

    for (line_number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Error reading line {}: {}", line_number + 1, e))?;
        if line.starts_with('>') {
            if in_record {
                finish_record(&mut pending, &mut sequences, &mut stats);
            }
            in_record = true;
        } else if !line.trim().is_empty() {
            // Content before the first header forms a leading record
            in_record = true;
            pending.push_str(line.trim());
        }
    }
    if in_record {
        finish_record(&mut pending, &mut sequences, &mut stats);
    }

    Ok((sequences, stats))
}

fn finish_record(pending: &mut String, sequences: &mut Vec<String>, stats: &mut CleanStats) {
    stats.records += 1;
    let seq = std::mem::take(pending).to_ascii_uppercase();
    if seq.is_empty() {
        stats.empty += 1;
    } else if seq.contains(AMBIGUOUS_BASE) {
        stats.ambiguous += 1;
    } else if !seq.chars().all(is_nucleotide) {
        stats.invalid += 1;
    } else {
        stats.kept += 1;
        sequences.push(seq);
    }
}
