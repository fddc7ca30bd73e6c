use super::is_nucleotide;
use crate::utils::{in_file, open_text_reader, write_atomically, Result};
use itertools::Itertools;
use std::io::{BufRead, Write};
use std::path::Path;

/// Anchor-aligned sequences sharing one TSS position, one per line on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSet {
    pub label: String,
    pub sequences: Vec<String>,
}

impl SequenceSet {
    pub fn new(label: impl Into<String>, sequences: Vec<String>) -> Self {
        Self {
            label: label.into(),
            sequences,
        }
    }

    pub fn from_path(label: impl Into<String>, path: &Path) -> Result<Self> {
        let reader = open_text_reader(path)?;
        let set = in_file(Self::from_reader(label, reader), path)?;
        log::info!(
            "Loaded {} {} sequences from {}",
            set.len(),
            set.label,
            path.display()
        );
        Ok(set)
    }

    /// Reads one sequence per line, skipping blank lines.
    ///
    /// Content is taken as-is; unexpected characters and uneven lengths are
    /// reported as warnings since aggregation tolerates both.
    pub fn from_reader<R: BufRead>(label: impl Into<String>, reader: R) -> Result<Self> {
        let mut sequences = Vec::new();
        for (line_number, line) in reader.lines().enumerate() {
            let line =
                line.map_err(|e| format!("Error reading line {}: {}", line_number + 1, e))?;
            let seq = line.trim();
            if !seq.is_empty() {
                sequences.push(seq.to_string());
            }
        }
        let set = Self::new(label, sequences);
        set.check_content();
        Ok(set)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        write_atomically(path, |writer| {
            for seq in &self.sequences {
                writeln!(writer, "{}", seq)?;
            }
            Ok(())
        })?;
        log::info!(
            "Wrote {} {} sequences to {}",
            self.len(),
            self.label,
            path.display()
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Length in characters of the longest sequence.
    pub fn max_len(&self) -> usize {
        self.sequences.iter().map(|s| s.chars().count()).max().unwrap_or(0)
    }

    fn check_content(&self) {
        let non_acgt = self
            .sequences
            .iter()
            .filter(|s| !s.chars().all(is_nucleotide))
            .count();
        if non_acgt > 0 {
            log::warn!(
                "{} of {} {} sequences contain characters outside ACGT",
                non_acgt,
                self.len(),
                self.label
            );
        }

        let lengths = self.sequences.iter().map(|s| s.chars().count()).counts();
        if lengths.len() > 1 {
            let summary = lengths
                .iter()
                .sorted()
                .map(|(len, count)| format!("{}x{}bp", count, len))
                .join(", ");
            log::warn!("{} sequences differ in length: {}", self.label, summary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_one_sequence_per_line() {
        let set = SequenceSet::from_reader("observed", Cursor::new("ACGT\n\n  GGCC \nTT\n")).unwrap();
        assert_eq!(set.label, "observed");
        assert_eq!(set.sequences, vec!["ACGT", "GGCC", "TT"]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.max_len(), 4);
    }

    #[test]
    fn unexpected_content_is_kept() {
        let set = SequenceSet::from_reader("observed", Cursor::new("ACNT\nAC\n")).unwrap();
        assert_eq!(set.sequences, vec!["ACNT", "AC"]);
    }

    #[test]
    fn lengths_count_characters() {
        let set = SequenceSet::from_reader("observed", Cursor::new("éAA\nAC\n")).unwrap();
        assert_eq!(set.max_len(), 3);
    }

    #[test]
    fn empty_input_is_empty_set() {
        let set = SequenceSet::from_reader("random", Cursor::new("")).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.max_len(), 0);
    }

    #[test]
    fn write_then_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean.txt");
        let set = SequenceSet::new("observed", vec!["ACGT".to_string(), "TTAA".to_string()]);
        set.write(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ACGT\nTTAA\n");

        let loaded = SequenceSet::from_path("observed", &path).unwrap();
        assert_eq!(loaded, set);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SequenceSet::from_path("observed", &dir.path().join("none.txt")).is_err());
    }
}
