use crate::cli::RandomArgs;
use crate::seqs::{random_sequences, seeded_rng, SequenceSet};
use crate::utils::Result;

pub fn random(args: RandomArgs) -> Result<()> {
    let mut rng = seeded_rng(args.seed);
    let set = SequenceSet::new(
        "random",
        random_sequences(&mut rng, args.count, args.length),
    );
    set.write(&args.output_path)
}
