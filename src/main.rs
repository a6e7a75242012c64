//! linkshelf: CLI bookmark organizer
//!
//! Categories of titled links, kept in a local SQLite key/value store.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use linkshelf::config;

mod commands;

#[derive(Parser)]
#[command(name = "linkshelf")]
#[command(about = "Organize bookmarks into named categories", long_about = None)]
#[command(version)]
struct Cli {
    /// Store database file (defaults to $LINKSHELF_DB, then the user data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an empty category
    AddCategory {
        /// Category name (blank names are ignored)
        name: String,
    },

    /// Add a link to a category
    AddLink {
        /// Category to add the link to
        category: String,

        /// Link title
        title: String,

        /// Link URL (http:// is added when no scheme is given)
        url: String,
    },

    /// Delete a category and all of its links
    DeleteCategory {
        /// Category name
        name: String,
    },

    /// Delete a link from a category
    DeleteLink {
        /// Category name
        category: String,

        /// Link title
        title: String,
    },

    /// Show all categories and links
    List {
        /// Only show categories or link titles containing this text
        #[arg(long, short)]
        filter: Option<String>,
    },

    /// Export all categories as pretty-printed JSON
    Export {
        /// Output file, or - for stdout (default: categories.json)
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Toggle the dark-mode preference
    DarkMode {
        /// Only print the current preference
        #[arg(long)]
        status: bool,
    },
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(config::LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let db = cli.db.as_deref();

    match cli.command {
        Commands::AddCategory { name } => {
            commands::category::add(db, &name)?;
        }

        Commands::AddLink {
            category,
            title,
            url,
        } => {
            commands::link::add(db, &category, &title, &url)?;
        }

        Commands::DeleteCategory { name } => {
            commands::category::delete(db, &name)?;
        }

        Commands::DeleteLink { category, title } => {
            commands::link::delete(db, &category, &title)?;
        }

        Commands::List { filter } => {
            let output = commands::list::execute(db, filter.as_deref())?;
            println!("{}", output);
        }

        Commands::Export { output } => {
            let target = commands::export::ExportTarget::from_arg(output.as_deref());
            commands::export::execute(db, &target)?;
        }

        Commands::DarkMode { status } => {
            commands::dark_mode::execute(db, status)?;
        }
    }

    Ok(())
}
