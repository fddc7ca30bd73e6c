mod color;
mod compare;

pub use compare::{check_output_names, Comparison};
