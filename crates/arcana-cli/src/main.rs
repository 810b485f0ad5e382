//! CLI frontend for the Arcana tarot companion.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "arcana",
    about = "Arcana — quotes, spreads, and reflection for tarot readings",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick quotes for a card
    Quote {
        /// Card key (0-77) or name, e.g. "the-fool"
        card: String,

        /// Seed for a reproducible pick (default: random)
        #[arg(short, long, allow_negative_numbers = true)]
        seed: Option<f64>,

        /// Use the reversed card's quotes
        #[arg(short, long)]
        reversed: bool,

        /// How many quotes to pick
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Quote data file (default: bundled quotes)
        #[arg(short, long)]
        quotes: Option<PathBuf>,
    },

    /// List the deck with the number of quotes per card
    Cards {
        /// Quote data file (default: bundled quotes)
        #[arg(short, long)]
        quotes: Option<PathBuf>,
    },

    /// Deal a reading for a spread
    Draw {
        /// Spread id, e.g. three_card or celtic_cross
        #[arg(default_value = "three_card")]
        spread: String,

        /// Seed for a reproducible reading (default: random)
        #[arg(short, long, allow_negative_numbers = true)]
        seed: Option<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Quote data file (default: bundled quotes)
        #[arg(short, long)]
        quotes: Option<PathBuf>,
    },

    /// List the available spreads
    Spreads,

    /// Show the positions of a spread
    Spread {
        /// Spread id
        id: String,
    },

    /// Browse a content library (mindfulness, cbt, dbt, journal, gamification)
    Content {
        /// Library name
        library: String,

        /// Only items in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Show a single item
        #[arg(long)]
        id: Option<String>,

        /// Directory of library JSON files (default: bundled content)
        #[arg(short = 'd', long)]
        content_dir: Option<PathBuf>,
    },

    /// Describe a personality type and its card
    Mbti {
        /// Four-letter type, e.g. INFJ
        code: String,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Quote {
            card,
            seed,
            reversed,
            count,
            json,
            quotes,
        } => commands::quote::run(&card, seed, reversed, count, json, quotes.as_deref()),
        Commands::Cards { quotes } => commands::cards::run(quotes.as_deref()),
        Commands::Draw {
            spread,
            seed,
            json,
            quotes,
        } => commands::draw::run(&spread, seed, json, quotes.as_deref()),
        Commands::Spreads => commands::spreads::list(),
        Commands::Spread { id } => commands::spreads::show(&id),
        Commands::Content {
            library,
            category,
            id,
            content_dir,
        } => commands::content::run(
            &library,
            category.as_deref(),
            id.as_deref(),
            content_dir.as_deref(),
        ),
        Commands::Mbti { code } => commands::mbti::run(&code),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
