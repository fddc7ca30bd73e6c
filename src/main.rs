use clap::Parser;
use tssprof::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{clean, compare, fetch, prepare, profile, random, revcomp},
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::Fetch(_) => "fetch",
        Command::Clean(_) => "clean",
        Command::Revcomp(_) => "revcomp",
        Command::Random(_) => "random",
        Command::Prepare(_) => "prepare",
        Command::Profile(_) => "profile",
        Command::Compare(_) => "compare",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        subcommand_name
    );
    match cli.command {
        Command::Fetch(args) => fetch::fetch(args)?,
        Command::Clean(args) => clean::clean(args)?,
        Command::Revcomp(args) => revcomp::revcomp(args)?,
        Command::Random(args) => random::random(args)?,
        Command::Prepare(args) => prepare::prepare(args)?,
        Command::Profile(args) => profile::profile(args)?,
        Command::Compare(args) => compare::compare(args)?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
