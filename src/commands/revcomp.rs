use crate::cli::RevcompArgs;
use crate::seqs::{reverse_complement_all, SequenceSet};
use crate::utils::Result;

pub fn revcomp(args: RevcompArgs) -> Result<()> {
    let set = SequenceSet::from_path("observed", &args.input_path)?;
    let rc = SequenceSet::new("reverse complement", reverse_complement_all(&set.sequences));
    rc.write(&args.output_path)
}
