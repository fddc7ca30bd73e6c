use super::resolve_range;
use crate::cli::CompareArgs;
use crate::plot::{check_output_names, Comparison};
use crate::profile::{aggregate, OffsetRange, Profile};
use crate::props::PropertyTable;
use crate::seqs::{random_sequences, seeded_rng, SequenceSet};
use crate::utils::Result;
use rayon::{
    iter::{IntoParallelRefIterator, ParallelIterator},
    ThreadPoolBuilder,
};
use std::path::Path;

pub fn compare(args: CompareArgs) -> Result<()> {
    let table = PropertyTable::from_path(&args.table_path, args.table_kind)?;
    check_output_names(table.names().iter().map(String::as_str))?;
    let observed = SequenceSet::from_path("observed", &args.observed_path)?;
    if observed.is_empty() {
        return Err(format!(
            "No sequences found in {}",
            args.observed_path.display()
        ));
    }
    let random = match &args.random_path {
        Some(path) => SequenceSet::from_path("random", path)?,
        None => {
            // Same count and length as the observed set, so both cover the same offsets
            let length = observed.max_len();
            log::info!(
                "Generating {} random sequences of length {}",
                observed.len(),
                length
            );
            let mut rng = seeded_rng(args.seed);
            SequenceSet::new(
                "random",
                random_sequences(&mut rng, observed.len(), length),
            )
        }
    };
    let revcomp = match &args.revcomp_path {
        Some(path) => Some(SequenceSet::from_path("reverse complement", path)?),
        None => None,
    };

    let range = resolve_range(
        args.lowest_offset,
        args.highest_offset,
        observed.max_len(),
        table.k(),
    )?;

    let output_dir = Path::new(&args.output_dir);
    std::fs::create_dir_all(output_dir)
        .map_err(|e| format!("Could not create {}: {}", output_dir.display(), e))?;

    let pool = ThreadPoolBuilder::new()
        .num_threads(args.num_threads)
        .thread_name(|i| format!("tssprof-{}", i))
        .build()
        .map_err(|e| format!("Failed to initialize thread pool: {}", e))?;

    let mut sets = vec![&observed, &random];
    sets.extend(revcomp.as_ref());
    let profiles = pool.install(|| profile_sets(&sets, &table, &range))?;

    let comparisons = comparisons(table.names(), &profiles);
    pool.install(|| {
        comparisons
            .par_iter()
            .map(|comparison| comparison.present(output_dir, args.image_format))
            .collect::<Result<Vec<_>>>()
    })?;
    log::info!(
        "Wrote {} comparisons to {}",
        comparisons.len(),
        output_dir.display()
    );
    Ok(())
}

/// Profiles of every property, one vector per set, in the order of `sets`.
fn profile_sets(
    sets: &[&SequenceSet],
    table: &PropertyTable,
    range: &OffsetRange,
) -> Result<Vec<Vec<Profile>>> {
    sets.par_iter()
        .map(|set| {
            log::debug!("Aggregating {} {} sequences", set.len(), set.label);
            aggregate(&set.sequences, table, range)
                .map_err(|e| format!("{} set: {}", set.label, e))
        })
        .collect()
}

/// Pairs up the per-set profiles of each property.
///
/// `profiles` holds observed, random and optionally reverse complement.
fn comparisons<'a>(names: &'a [String], profiles: &'a [Vec<Profile>]) -> Vec<Comparison<'a>> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Comparison {
            property: name,
            observed: &profiles[0][i],
            random: &profiles[1][i],
            reverse_complement: profiles.get(2).map(|rc| &rc[i]),
        })
        .collect()
}
