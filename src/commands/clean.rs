use crate::cli::CleanArgs;
use crate::seqs::{clean_records, CleanStats, SequenceSet};
use crate::utils::{in_file, open_text_reader, Result};
use std::path::Path;

pub fn clean(args: CleanArgs) -> Result<()> {
    let set = load_clean(&args.input_path)?;
    set.write(&args.output_path)
}

/// Reads raw records and keeps the sequences made purely of ACGT.
pub(crate) fn load_clean(path: &Path) -> Result<SequenceSet> {
    let reader = open_text_reader(path)?;
    let (sequences, stats) = in_file(clean_records(reader), path)?;
    report(&stats, path);
    if sequences.is_empty() {
        return Err(format!("No clean sequences found in {}", path.display()));
    }
    Ok(SequenceSet::new("observed", sequences))
}

fn report(stats: &CleanStats, path: &Path) {
    log::info!(
        "{}: {} records, {} kept, {} dropped",
        path.display(),
        stats.records,
        stats.kept,
        stats.dropped()
    );
    if stats.dropped() > 0 {
        log::debug!(
            "Dropped records: empty={}, ambiguous={}, invalid={}",
            stats.empty,
            stats.ambiguous,
            stats.invalid
        );
    }
}
