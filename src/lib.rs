pub mod cli;
pub mod commands;
pub mod plot;
pub mod profile;
pub mod props;
pub mod seqs;
pub mod utils;
