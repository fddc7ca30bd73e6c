use std::{fmt, str::FromStr};

/// Property table layouts the tool knows how to read.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TableKind {
    /// Dinucleotide thermodynamic and mechanical properties, every row used
    Dinucleotide,
    /// Dinucleotide ultrasonic cleavage rates
    Ultrasonic,
    Tetranucleotide,
    Hexanucleotide,
}

impl TableKind {
    pub fn k(&self) -> usize {
        match self {
            TableKind::Dinucleotide | TableKind::Ultrasonic => 2,
            TableKind::Tetranucleotide => 4,
            TableKind::Hexanucleotide => 6,
        }
    }

    /// Number of property rows read from the table, `None` for all of them.
    pub fn max_rows(&self) -> Option<usize> {
        match self {
            TableKind::Dinucleotide => None,
            _ => Some(1),
        }
    }
}

impl FromStr for TableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dinucleotide" => Ok(TableKind::Dinucleotide),
            "ultrasonic" => Ok(TableKind::Ultrasonic),
            "tetranucleotide" => Ok(TableKind::Tetranucleotide),
            "hexanucleotide" => Ok(TableKind::Hexanucleotide),
            _ => Err(
                "must be one of dinucleotide, ultrasonic, tetranucleotide, hexanucleotide"
                    .to_string(),
            ),
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TableKind::Dinucleotide => "dinucleotide",
            TableKind::Ultrasonic => "ultrasonic",
            TableKind::Tetranucleotide => "tetranucleotide",
            TableKind::Hexanucleotide => "hexanucleotide",
        };
        write!(formatter, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_lengths() {
        assert_eq!(TableKind::Dinucleotide.k(), 2);
        assert_eq!(TableKind::Ultrasonic.k(), 2);
        assert_eq!(TableKind::Tetranucleotide.k(), 4);
        assert_eq!(TableKind::Hexanucleotide.k(), 6);
    }

    #[test]
    fn only_dinucleotide_reads_every_row() {
        assert_eq!(TableKind::Dinucleotide.max_rows(), None);
        assert_eq!(TableKind::Ultrasonic.max_rows(), Some(1));
        assert_eq!(TableKind::Hexanucleotide.max_rows(), Some(1));
    }

    #[test]
    fn parse_and_display_agree() {
        for kind in [
            TableKind::Dinucleotide,
            TableKind::Ultrasonic,
            TableKind::Tetranucleotide,
            TableKind::Hexanucleotide,
        ] {
            assert_eq!(kind.to_string().parse::<TableKind>(), Ok(kind));
        }
        assert!("trinucleotide".parse::<TableKind>().is_err());
    }
}
