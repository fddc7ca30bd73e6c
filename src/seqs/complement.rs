/// Watson-Crick complement; anything outside ACGT is returned unchanged.
pub fn complement(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        other => other,
    }
}

/// Position `i` of the result pairs with position `len - 1 - i` of `seq`.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement).collect()
}

pub fn reverse_complement_all(seqs: &[String]) -> Vec<String> {
    seqs.iter().map(|seq| reverse_complement(seq)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seqs::{random_sequences, seeded_rng};

    #[test]
    fn reverse_complement_known_cases() {
        assert_eq!(reverse_complement("AACG"), "CGTT");
        assert_eq!(reverse_complement("AAAC"), "GTTT");
        assert_eq!(reverse_complement(""), "");
    }

    #[test]
    fn palindromes_map_to_themselves() {
        for seq in ["ACGT", "AATT", "GGCC", "GAATTC"] {
            assert_eq!(reverse_complement(seq), seq);
        }
    }

    #[test]
    fn reverse_complement_twice_is_identity() {
        let mut rng = seeded_rng(Some(7));
        for seq in random_sequences(&mut rng, 50, 81) {
            assert_eq!(reverse_complement(&reverse_complement(&seq)), seq);
        }
    }

    #[test]
    fn positions_pair_with_mirrored_positions() {
        let seq = "ACCGTTTAG";
        let rc: Vec<char> = reverse_complement(seq).chars().collect();
        for (i, base) in seq.chars().enumerate() {
            assert_eq!(rc[seq.len() - 1 - i], complement(base));
        }
    }

    #[test]
    fn unknown_characters_are_kept_in_place() {
        assert_eq!(reverse_complement("ANG"), "CNT");
    }

    #[test]
    fn set_order_and_count_are_preserved() {
        let seqs = vec!["AAC".to_string(), "GGT".to_string(), "T".to_string()];
        assert_eq!(reverse_complement_all(&seqs), vec!["GTT", "ACC", "A"]);
    }
}
