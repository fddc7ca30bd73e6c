use crate::profile::DEFAULT_LOWEST_OFFSET;
use crate::props::TableKind;
use crate::seqs::RANDOM_SEQUENCE_LEN;
use crate::utils::Result;
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use lineplot::ImageFormat;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="tssprof",
          version=&**FULL_VERSION,
          about="Positional k-mer property profiles of promoter sequences around the TSS",
          long_about = None,
          disable_help_subcommand = true,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(global = true)]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Download raw promoter sequences")]
    Fetch(FetchArgs),
    #[clap(about = "Extract clean sequences from multi-record text")]
    Clean(CleanArgs),
    #[clap(about = "Reverse-complement a sequence file")]
    Revcomp(RevcompArgs),
    #[clap(about = "Generate a random control sequence set")]
    Random(RandomArgs),
    #[clap(about = "Build clean, reverse-complement and random sets in one go")]
    Prepare(PrepareArgs),
    #[clap(about = "Average table properties per offset over one sequence set")]
    Profile(ProfileArgs),
    #[clap(about = "Compare observed, random and reverse-complement profiles")]
    Compare(CompareArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("fetch")))]
#[command(arg_required_else_help(true))]
pub struct FetchArgs {
    #[clap(required = true)]
    #[clap(short = 'u')]
    #[clap(long = "url")]
    #[clap(help = "URL of the raw sequence records")]
    #[clap(value_name = "URL")]
    #[arg(value_parser = check_url)]
    pub url: String,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Path of the downloaded file")]
    #[clap(value_name = "OUTPUT")]
    #[arg(value_parser = check_output_path)]
    pub output_path: PathBuf,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("clean")))]
#[command(arg_required_else_help(true))]
pub struct CleanArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "Raw multi-record sequence file (optionally gzipped)")]
    #[clap(value_name = "RAW")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Clean sequence file, one sequence per line")]
    #[clap(value_name = "OUTPUT")]
    #[arg(value_parser = check_output_path)]
    pub output_path: PathBuf,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("revcomp")))]
#[command(arg_required_else_help(true))]
pub struct RevcompArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "Clean sequence file")]
    #[clap(value_name = "SEQUENCES")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Reverse-complement sequence file")]
    #[clap(value_name = "OUTPUT")]
    #[arg(value_parser = check_output_path)]
    pub output_path: PathBuf,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("random")))]
#[command(arg_required_else_help(true))]
pub struct RandomArgs {
    #[clap(required = true)]
    #[clap(short = 'n')]
    #[clap(long = "count")]
    #[clap(help = "Number of sequences")]
    #[clap(value_name = "COUNT")]
    #[arg(value_parser = positive_count)]
    pub count: usize,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Random sequence file")]
    #[clap(value_name = "OUTPUT")]
    #[arg(value_parser = check_output_path)]
    pub output_path: PathBuf,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "length")]
    #[clap(value_name = "LENGTH")]
    #[clap(help = "Length of each sequence")]
    #[clap(default_value_t = RANDOM_SEQUENCE_LEN)]
    #[arg(value_parser = positive_count)]
    pub length: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "seed")]
    #[clap(value_name = "SEED")]
    #[clap(help = "Seed for reproducible sequences")]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("prepare")))]
#[command(arg_required_else_help(true))]
pub struct PrepareArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "Raw multi-record sequence file (optionally gzipped)")]
    #[clap(value_name = "RAW")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-prefix")]
    #[clap(help = "Prefix for output files")]
    #[clap(value_name = "OUTPUT_PREFIX")]
    #[arg(value_parser = check_prefix_path)]
    pub output_prefix: String,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "random-count")]
    #[clap(value_name = "COUNT")]
    #[clap(help = "Number of random sequences [default: number of clean sequences]")]
    #[arg(value_parser = positive_count)]
    pub random_count: Option<usize>,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "random-length")]
    #[clap(value_name = "LENGTH")]
    #[clap(help = "Length of each random sequence")]
    #[clap(default_value_t = RANDOM_SEQUENCE_LEN)]
    #[arg(value_parser = positive_count)]
    pub random_length: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "seed")]
    #[clap(value_name = "SEED")]
    #[clap(help = "Seed for reproducible random sequences")]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("profile")))]
#[command(arg_required_else_help(true))]
pub struct ProfileArgs {
    #[clap(required = true)]
    #[clap(short = 's')]
    #[clap(long = "sequences")]
    #[clap(help = "Anchor-aligned sequence file")]
    #[clap(value_name = "SEQUENCES")]
    #[arg(value_parser = check_file_exists)]
    pub sequences_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'p')]
    #[clap(long = "table")]
    #[clap(help = "Tab or semicolon delimited property table")]
    #[clap(value_name = "TABLE")]
    #[arg(value_parser = check_file_exists)]
    pub table_path: PathBuf,

    #[clap(short = 'k')]
    #[clap(long = "table-kind")]
    #[clap(value_name = "KIND")]
    #[clap(help = "Table layout: dinucleotide, ultrasonic, tetranucleotide or hexanucleotide")]
    #[clap(default_value = "dinucleotide")]
    pub table_kind: TableKind,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Profile table (TSV)")]
    #[clap(value_name = "OUTPUT")]
    #[arg(value_parser = check_output_path)]
    pub output_path: PathBuf,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "lowest-offset")]
    #[clap(value_name = "OFFSET")]
    #[clap(help = "Offset of the first window relative to the TSS")]
    #[clap(default_value_t = DEFAULT_LOWEST_OFFSET)]
    #[clap(allow_negative_numbers = true)]
    pub lowest_offset: i32,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "highest-offset")]
    #[clap(value_name = "OFFSET")]
    #[clap(help = "Last offset to aggregate [default: one offset per window of the longest sequence]")]
    #[clap(allow_negative_numbers = true)]
    pub highest_offset: Option<i32>,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("compare")))]
#[command(arg_required_else_help(true))]
pub struct CompareArgs {
    #[clap(required = true)]
    #[clap(short = 's')]
    #[clap(long = "observed")]
    #[clap(help = "Observed (clean) sequence file")]
    #[clap(value_name = "SEQUENCES")]
    #[arg(value_parser = check_file_exists)]
    pub observed_path: PathBuf,

    #[clap(short = 'r')]
    #[clap(long = "random")]
    #[clap(help = "Random control sequence file [default: generated on the fly]")]
    #[clap(value_name = "SEQUENCES")]
    #[arg(value_parser = check_file_exists)]
    pub random_path: Option<PathBuf>,

    #[clap(short = 'c')]
    #[clap(long = "revcomp")]
    #[clap(help = "Reverse-complement sequence file")]
    #[clap(value_name = "SEQUENCES")]
    #[arg(value_parser = check_file_exists)]
    pub revcomp_path: Option<PathBuf>,

    #[clap(required = true)]
    #[clap(short = 'p')]
    #[clap(long = "table")]
    #[clap(help = "Tab or semicolon delimited property table")]
    #[clap(value_name = "TABLE")]
    #[arg(value_parser = check_file_exists)]
    pub table_path: PathBuf,

    #[clap(short = 'k')]
    #[clap(long = "table-kind")]
    #[clap(value_name = "KIND")]
    #[clap(help = "Table layout: dinucleotide, ultrasonic, tetranucleotide or hexanucleotide")]
    #[clap(default_value = "dinucleotide")]
    pub table_kind: TableKind,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-dir")]
    #[clap(help = "Directory for charts and profile tables")]
    #[clap(value_name = "DIR")]
    #[arg(value_parser = check_prefix_path)]
    pub output_dir: String,

    #[clap(short = 'f')]
    #[clap(long = "format")]
    #[clap(value_name = "FORMAT")]
    #[clap(help = "Chart format: svg, png or pdf")]
    #[clap(default_value = "png")]
    pub image_format: ImageFormat,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "lowest-offset")]
    #[clap(value_name = "OFFSET")]
    #[clap(help = "Offset of the first window relative to the TSS")]
    #[clap(default_value_t = DEFAULT_LOWEST_OFFSET)]
    #[clap(allow_negative_numbers = true)]
    pub lowest_offset: i32,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "highest-offset")]
    #[clap(value_name = "OFFSET")]
    #[clap(help = "Last offset to aggregate [default: one offset per window of the longest observed sequence]")]
    #[clap(allow_negative_numbers = true)]
    pub highest_offset: Option<i32>,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "seed")]
    #[clap(value_name = "SEED")]
    #[clap(help = "Seed for the generated random control set")]
    pub seed: Option<u64>,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

fn check_output_path(s: &str) -> Result<PathBuf> {
    let prefix_check = check_prefix_path(s)?;
    let path = PathBuf::from(prefix_check);
    if path.is_dir() {
        Err(format!("Output path is a directory: {}", path.display()))
    } else {
        Ok(path)
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn check_url(s: &str) -> Result<String> {
    if s.starts_with("http://") || s.starts_with("https://") {
        Ok(s.to_string())
    } else {
        Err(format!("URL must start with http:// or https://, got: {}", s))
    }
}

fn positive_count(s: &str) -> Result<usize> {
    let count: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid count", s))?;
    if count >= 1 {
        Ok(count)
    } else {
        Err("Value must be at least 1".into())
    }
}

fn threads_in_range(s: &str) -> Result<usize> {
    let thread: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid thread number", s))?;
    if thread >= 1 {
        Ok(thread)
    } else {
        Err("Number of threads must be at least 1".into())
    }
}
