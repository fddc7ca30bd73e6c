use super::NUCLEOTIDES;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of the control sequences, matching the promoter windows they stand in for.
pub const RANDOM_SEQUENCE_LEN: usize = 81;

pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Draws `count` sequences whose bases are independent and uniform over ATGC.
pub fn random_sequences<R: Rng>(rng: &mut R, count: usize, length: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            (0..length)
                .map(|_| NUCLEOTIDES[rng.random_range(0..NUCLEOTIDES.len())])
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seqs::is_nucleotide;

    #[test]
    fn count_and_length_are_respected() {
        let mut rng = seeded_rng(Some(1));
        let seqs = random_sequences(&mut rng, 25, RANDOM_SEQUENCE_LEN);
        assert_eq!(seqs.len(), 25);
        assert!(seqs.iter().all(|s| s.len() == RANDOM_SEQUENCE_LEN));
        assert!(seqs.iter().all(|s| s.chars().all(is_nucleotide)));
    }

    #[test]
    fn same_seed_same_sequences() {
        let first = random_sequences(&mut seeded_rng(Some(42)), 10, 81);
        let second = random_sequences(&mut seeded_rng(Some(42)), 10, 81);
        assert_eq!(first, second);
    }

    #[test]
    fn all_bases_are_drawn() {
        let seqs = random_sequences(&mut seeded_rng(Some(3)), 100, 81);
        for base in NUCLEOTIDES {
            let count = seqs.iter().flat_map(|s| s.chars()).filter(|&c| c == base).count();
            // 8100 draws, expectation 2025 per base
            assert!(count > 1700 && count < 2350, "{base}: {count}");
        }
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(random_sequences(&mut seeded_rng(Some(0)), 0, 81).is_empty());
    }
}
