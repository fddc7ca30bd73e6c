use super::clean::load_clean;
use crate::cli::PrepareArgs;
use crate::seqs::{random_sequences, reverse_complement_all, seeded_rng, SequenceSet};
use crate::utils::{create_writer, Result};
use std::path::Path;

pub fn prepare(args: PrepareArgs) -> Result<()> {
    let observed = load_clean(&args.input_path)?;
    create_writer(&args.output_prefix, "clean.txt", |path| {
        observed.write(Path::new(path))
    })?;

    let rc = SequenceSet::new(
        "reverse complement",
        reverse_complement_all(&observed.sequences),
    );
    create_writer(&args.output_prefix, "revcomp.txt", |path| {
        rc.write(Path::new(path))
    })?;

    let count = args.random_count.unwrap_or(observed.len());
    let mut rng = seeded_rng(args.seed);
    let random = SequenceSet::new(
        "random",
        random_sequences(&mut rng, count, args.random_length),
    );
    create_writer(&args.output_prefix, "random.txt", |path| {
        random.write(Path::new(path))
    })?;
    Ok(())
}
