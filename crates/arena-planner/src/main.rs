//! arena CLI
//!
//! Interactive planner for choosing board games from a CSV catalog.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use arena_planner::{
    load_games, write_results, Console, PlannerConfig, DEFAULT_CATALOG, DEFAULT_LIST_FILE,
};
use arena_seeker::QueryEngine;

#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Filter a board game catalog and build a list of games to play", long_about = None)]
struct Cli {
    /// CSV catalog to load
    #[arg(short, long, env = "ARENA_GAMES", default_value = DEFAULT_CATALOG)]
    games: PathBuf,

    /// File written by 'list save' when no name is given
    #[arg(long, default_value = DEFAULT_LIST_FILE)]
    list_file: PathBuf,

    /// Print one filtered result set and exit instead of starting the shell
    #[arg(short, long)]
    filter: Option<String>,

    /// Attribute to sort --filter results by
    #[arg(short, long, requires = "filter")]
    sort: Option<String>,

    /// Sort --filter results in descending order
    #[arg(long, requires = "sort")]
    desc: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = PlannerConfig::new(cli.games).with_list_file(cli.list_file);
    let games = load_games(&config.catalog)
        .with_context(|| format!("failed to load catalog {}", config.catalog.display()))?;
    let mut engine = QueryEngine::new(games);

    if let Some(text) = cli.filter {
        let stdout = io::stdout().lock();
        let results = match cli.sort {
            Some(attribute) => engine.filter_sorted_str(&text, &attribute, !cli.desc)?,
            None => engine.filter(&text),
        };
        write_results(stdout, results)?;
        return Ok(());
    }

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut console = Console::new(engine, config, stdin, &mut stdout);
    console.run()?;
    stdout.flush()?;
    Ok(())
}
