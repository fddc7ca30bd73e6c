mod complement;
mod fasta;
mod random;
mod store;

pub use complement::{complement, reverse_complement, reverse_complement_all};
pub use fasta::{clean_records, CleanStats};
pub use random::{random_sequences, seeded_rng, RANDOM_SEQUENCE_LEN};
pub use store::SequenceSet;

pub const NUCLEOTIDES: [char; 4] = ['A', 'T', 'G', 'C'];

pub const AMBIGUOUS_BASE: char = 'N';

pub fn is_nucleotide(base: char) -> bool {
    matches!(base, 'A' | 'C' | 'G' | 'T')
}
