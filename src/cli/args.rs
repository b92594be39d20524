use std::path::PathBuf;

use clap::{Parser, Subcommand};
use neuria::{CategorySelection, Language, PriceSelection};

#[derive(Parser)]
#[command(name = "neuria")]
#[command(about = "Browse curated AI tools and discover new ones with web-grounded search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Profile and logo store (default: platform data directory)
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    #[arg(
        long,
        value_parser = ["error", "warn", "info", "debug", "trace"],
        default_value = "warn",
        global = true
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List catalog tools, grouped by category when no search or category is given
    List {
        /// Case-insensitive match on name or description
        #[arg(long, default_value = "")]
        search: String,

        /// Category key or label, or "all"
        #[arg(long, default_value = "all")]
        category: CategorySelection,

        /// Free, Freemium, Paid or "all"
        #[arg(long, default_value = "all")]
        price: PriceSelection,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask Gemini with Google Search for tools outside the catalog
    Discover {
        /// Search subject (default: a generic term)
        query: Option<String>,

        #[arg(long, default_value = "all")]
        category: CategorySelection,

        /// Prompt language (default: profile language)
        #[arg(long)]
        lang: Option<Language>,

        /// Truncate long descriptions and drop entries without a web link
        #[arg(long)]
        enforce: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the application logo as a data URI, generating it on first use
    Logo {
        /// Generate a new logo even when one is cached
        #[arg(long)]
        refresh: bool,

        /// Write the decoded image to a file instead. Without a path the
        /// file is named after the image type, e.g. `neuria-logo.png`
        #[arg(long, num_args = 0..=1, value_name = "FILE")]
        out: Option<Option<PathBuf>>,
    },

    /// Register an email address and start the trial
    Register { email: String },

    /// Show profile and trial status
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the display and prompt language
    Lang { language: Language },

    /// Mark the profile as paid
    Paid,

    /// Forget the stored profile
    Reset,
}
