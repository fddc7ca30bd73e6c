use super::TableKind;
use crate::utils::{in_file, open_text_reader, Result};
use itertools::Itertools;
use std::collections::{HashMap, HashSet};
use std::io::BufRead;
use std::path::Path;

/// Read-only lookup from a k-mer to one value per named property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTable {
    k: usize,
    names: Vec<String>,
    rows: HashMap<String, Vec<f64>>,
}

impl PropertyTable {
    pub fn new<I>(k: usize, names: Vec<String>, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<f64>)>,
    {
        if k == 0 {
            return Err("Window length must be at least 1".to_string());
        }
        if let Some(name) = names.iter().duplicates().next() {
            return Err(format!("Duplicate property: {}", name));
        }
        let mut rows = HashMap::new();
        for (kmer, values) in entries {
            if kmer.chars().count() != k {
                return Err(format!("Expected {}-mer, found {:?}", k, kmer));
            }
            if values.len() != names.len() {
                return Err(format!(
                    "Expected {} values for {}, found {}",
                    names.len(),
                    kmer,
                    values.len()
                ));
            }
            if rows.insert(kmer.clone(), values).is_some() {
                return Err(format!("Duplicate k-mer: {}", kmer));
            }
        }
        Ok(Self { k, names, rows })
    }

    pub fn from_path(path: &Path, kind: TableKind) -> Result<Self> {
        let reader = open_text_reader(path)?;
        let table = in_file(Self::from_reader(reader, kind), path)?;
        log::info!(
            "Loaded {} table from {}: {} properties over {} {}-mers",
            kind,
            path.display(),
            table.names.len(),
            table.rows.len(),
            table.k
        );
        Ok(table)
    }

    /// Parses a table whose header row lists the k-mers and whose following
    /// rows hold one named property each.
    ///
    /// Fields are separated by tabs or, if the header has no tab, by
    /// semicolons. Values may use a decimal comma.
    pub fn from_reader<R: BufRead>(reader: R, kind: TableKind) -> Result<Self> {
        let k = kind.k();
        let mut lines = reader.lines().enumerate().filter(|(_, line)| match line {
            Ok(line) => !line.trim().is_empty(),
            Err(_) => true,
        });

        let (header_number, header) = lines.next().ok_or("Property table is empty")?;
        let header =
            header.map_err(|e| format!("Error reading line {}: {}", header_number + 1, e))?;
        let delimiter = detect_delimiter(&header)
            .ok_or("Header must be tab or semicolon delimited".to_string())?;

        let kmers: Vec<String> = split_fields(&header, delimiter)
            .into_iter()
            .skip(1)
            .map(|kmer| kmer.to_ascii_uppercase())
            .collect();
        if kmers.is_empty() {
            return Err("Header lists no k-mers".to_string());
        }
        let mut seen = HashSet::new();
        for kmer in &kmers {
            if kmer.chars().count() != k {
                return Err(format!(
                    "Header entry {:?} is not a {}-mer as required by a {} table",
                    kmer, k, kind
                ));
            }
            if !seen.insert(kmer.as_str()) {
                return Err(format!("Duplicate k-mer in header: {}", kmer));
            }
        }

        let max_rows = kind.max_rows().unwrap_or(usize::MAX);
        let mut names = Vec::new();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); kmers.len()];
        let mut skipped = 0;
        for (line_number, line) in lines {
            let line = line.map_err(|e| format!("Error reading line {}: {}", line_number + 1, e))?;
            if names.len() == max_rows {
                skipped += 1;
                continue;
            }
            let fields = split_fields(&line, delimiter);
            if fields.len() != kmers.len() + 1 {
                return Err(format!(
                    "Expected {} fields at line {}, found {}",
                    kmers.len() + 1,
                    line_number + 1,
                    fields.len()
                ));
            }
            let name = fields[0];
            if name.is_empty() {
                return Err(format!("Missing property name at line {}", line_number + 1));
            }
            if names.iter().any(|seen| seen == name) {
                return Err(format!(
                    "Duplicate property {} at line {}",
                    name,
                    line_number + 1
                ));
            }
            for (column, field) in columns.iter_mut().zip(&fields[1..]) {
                let value = parse_value(field).ok_or(format!(
                    "Invalid value {:?} for property {} at line {}",
                    field,
                    name,
                    line_number + 1
                ))?;
                column.push(value);
            }
            names.push(name.to_string());
        }

        if names.is_empty() {
            return Err("Property table has no property rows".to_string());
        }
        if skipped > 0 {
            log::debug!(
                "Ignored {} trailing rows of single-property {} table",
                skipped,
                kind
            );
        }

        Self::new(k, names, kmers.into_iter().zip(columns))
    }

    /// Values for `kmer` in property order; `None` for anything not in the table.
    pub fn lookup(&self, kmer: &str) -> Option<&[f64]> {
        self.rows.get(kmer).map(|values| values.as_slice())
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn detect_delimiter(header: &str) -> Option<char> {
    ['\t', ';'].into_iter().find(|&d| header.contains(d))
}

// Fields are never quoted. Trailing empty fields from spreadsheet exports are dropped
fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();
    while fields.len() > 1 && fields.last() == Some(&"") {
        fields.pop();
    }
    fields
}

fn parse_value(field: &str) -> Option<f64> {
    field
        .parse::<f64>()
        .ok()
        .or_else(|| field.replace(',', ".").parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const DINUCLEOTIDE_TSV: &str = "\
Property\tAA\tAC\tAG\tAT
Twist\t35.62\t34.4\t27.7\t31.5
Stacking energy\t-17.5\t-18.1\t-15.8\t-16.7
Rise\t3.27\t3.36\t3.34\t3.31
";

    #[test]
    fn parses_tab_delimited_rows() {
        let table =
            PropertyTable::from_reader(Cursor::new(DINUCLEOTIDE_TSV), TableKind::Dinucleotide)
                .unwrap();
        assert_eq!(table.k(), 2);
        assert_eq!(table.names(), ["Twist", "Stacking energy", "Rise"]);
        assert_eq!(table.len(), 4);
        assert_eq!(table.lookup("AC"), Some(&[34.4, -18.1, 3.36][..]));
    }

    #[test]
    fn parses_semicolon_delimited_with_decimal_comma() {
        let data = "name;aaaa;ACGT;\nCleavage;0,25;1,5;\nIgnored;1;2\n";
        let table =
            PropertyTable::from_reader(Cursor::new(data), TableKind::Tetranucleotide).unwrap();
        assert_eq!(table.names(), ["Cleavage"]);
        assert_eq!(table.lookup("AAAA"), Some(&[0.25][..]));
        assert_eq!(table.lookup("ACGT"), Some(&[1.5][..]));
    }

    #[test]
    fn single_property_kinds_use_first_row() {
        let table =
            PropertyTable::from_reader(Cursor::new(DINUCLEOTIDE_TSV), TableKind::Ultrasonic)
                .unwrap();
        assert_eq!(table.names(), ["Twist"]);
        assert_eq!(table.lookup("AT"), Some(&[31.5][..]));
    }

    #[test]
    fn blank_lines_are_ignored() {
        let data = "\n\nP\tAA\n\nS\t1.0\n\n";
        let table = PropertyTable::from_reader(Cursor::new(data), TableKind::Ultrasonic).unwrap();
        assert_eq!(table.lookup("AA"), Some(&[1.0][..]));
    }

    #[test]
    fn lookup_misses_are_none() {
        let table =
            PropertyTable::from_reader(Cursor::new(DINUCLEOTIDE_TSV), TableKind::Dinucleotide)
                .unwrap();
        assert_eq!(table.lookup("GG"), None);
        assert_eq!(table.lookup("AN"), None);
        assert_eq!(table.lookup("NN"), None);
        assert_eq!(table.lookup("A"), None);
        assert_eq!(table.lookup("AAA"), None);
        assert_eq!(table.lookup(""), None);
        assert_eq!(table.lookup("aa"), None);
    }

    #[test]
    fn wrong_kmer_length_is_an_error() {
        let result =
            PropertyTable::from_reader(Cursor::new(DINUCLEOTIDE_TSV), TableKind::Hexanucleotide);
        assert!(result.unwrap_err().contains("is not a 6-mer"));
    }

    #[test]
    fn duplicate_kmer_is_an_error() {
        let data = "P\tAA\taa\nS\t1\t2\n";
        let result = PropertyTable::from_reader(Cursor::new(data), TableKind::Ultrasonic);
        assert_eq!(result, Err("Duplicate k-mer in header: AA".to_string()));
    }

    #[test]
    fn duplicate_property_is_an_error() {
        let data = "P\tAA\nTwist\t1\nTwist\t2\n";
        let result = PropertyTable::from_reader(Cursor::new(data), TableKind::Dinucleotide);
        assert_eq!(result, Err("Duplicate property Twist at line 3".to_string()));
    }

    #[test]
    fn ragged_row_is_an_error() {
        let data = "P\tAA\tAC\nS\t1\n";
        let result = PropertyTable::from_reader(Cursor::new(data), TableKind::Ultrasonic);
        assert_eq!(
            result,
            Err("Expected 3 fields at line 2, found 2".to_string())
        );
    }

    #[test]
    fn non_numeric_value_is_an_error() {
        let data = "P\tAA\tAC\nS\t1\tx\n";
        let result = PropertyTable::from_reader(Cursor::new(data), TableKind::Ultrasonic);
        assert!(result.unwrap_err().contains("Invalid value \"x\""));
    }

    #[test]
    fn empty_and_header_only_tables_are_errors() {
        assert!(PropertyTable::from_reader(Cursor::new(""), TableKind::Ultrasonic).is_err());
        assert!(PropertyTable::from_reader(Cursor::new("P\tAA\n"), TableKind::Ultrasonic).is_err());
        assert!(PropertyTable::from_reader(Cursor::new("P AA\nS 1\n"), TableKind::Ultrasonic).is_err());
    }

    #[test]
    fn new_validates_entries() {
        let names = vec!["p".to_string()];
        assert!(PropertyTable::new(2, names.clone(), [("AA".to_string(), vec![5.0])]).is_ok());
        assert!(PropertyTable::new(2, names.clone(), [("AAA".to_string(), vec![5.0])]).is_err());
        assert!(PropertyTable::new(2, names.clone(), [("AA".to_string(), vec![])]).is_err());
        assert!(PropertyTable::new(0, names, Vec::new()).is_err());
        let twice = vec!["p".to_string(), "p".to_string()];
        assert_eq!(
            PropertyTable::new(2, twice, [("AA".to_string(), vec![1.0, 2.0])]),
            Err("Duplicate property: p".to_string())
        );
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dinucleotide.tsv");
        std::fs::write(&path, DINUCLEOTIDE_TSV).unwrap();
        let table = PropertyTable::from_path(&path, TableKind::Dinucleotide).unwrap();
        assert_eq!(table.names().len(), 3);
    }
}
