use super::Profile;
use itertools::Itertools;
use std::io::{self, Write};

/// Writes `offset` plus one column per profile, rows in ascending offset order.
///
/// Profiles are expected to share their offsets; a missing value is written
/// as `NA`.
pub fn write_profiles<W: Write + ?Sized>(
    writer: &mut W,
    columns: &[(&str, &Profile)],
) -> io::Result<()> {
    let header = std::iter::once("offset")
        .chain(columns.iter().map(|(name, _)| *name))
        .join("\t");
    writeln!(writer, "{}", header)?;

    let offsets = columns
        .iter()
        .flat_map(|(_, profile)| profile.offsets())
        .sorted()
        .dedup();
    for offset in offsets {
        let values = columns
            .iter()
            .map(|(_, profile)| match profile.get(offset) {
                Some(mean) => mean.to_string(),
                None => "NA".to_string(),
            })
            .join("\t");
        writeln!(writer, "{}\t{}", offset, values)?;
    }
    Ok(())
}
