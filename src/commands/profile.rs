use super::resolve_range;
use crate::cli::ProfileArgs;
use crate::profile::{aggregate, write_profiles, Profile};
use crate::props::PropertyTable;
use crate::seqs::SequenceSet;
use crate::utils::{write_atomically, Result};

pub fn profile(args: ProfileArgs) -> Result<()> {
    let table = PropertyTable::from_path(&args.table_path, args.table_kind)?;
    let set = SequenceSet::from_path("observed", &args.sequences_path)?;
    let range = resolve_range(
        args.lowest_offset,
        args.highest_offset,
        set.max_len(),
        table.k(),
    )?;

    let profiles = aggregate(&set.sequences, &table, &range)?;
    let columns: Vec<(&str, &Profile)> = profiles
        .iter()
        .map(|profile| (profile.property.as_str(), profile))
        .collect();
    write_atomically(&args.output_path, |writer| write_profiles(writer, &columns))?;
    log::info!(
        "Wrote {} profiles over {} sequences to {}",
        profiles.len(),
        set.len(),
        args.output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::TableKind;

    #[test]
    fn writes_one_column_per_property() {
        let dir = tempfile::tempdir().unwrap();
        let seqs = dir.path().join("clean.txt");
        let table = dir.path().join("table.tsv");
        let output = dir.path().join("profile.tsv");
        std::fs::write(&seqs, "AAAA\nAACC\n").unwrap();
        std::fs::write(&table, "Property\tAA\tAC\tCC\nTwist\t1\t2\t4\nRise\t3\t0\t0\n").unwrap();

        profile(ProfileArgs {
            sequences_path: seqs,
            table_path: table,
            table_kind: TableKind::Dinucleotide,
            output_path: output.clone(),
            lowest_offset: -1,
            highest_offset: None,
        })
        .unwrap();

        // windows AA AA AA / AA AC CC over offsets -1, 1, 2
        assert_eq!(
            std::fs::read_to_string(output).unwrap(),
            "offset\tTwist\tRise\n-1\t1\t3\n1\t1.5\t1.5\n2\t2.5\t1.5\n"
        );
    }
}
