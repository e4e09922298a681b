use crate::model::CardStatus;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum StatusArg {
    Owned,
    Ordered,
    No,
}

impl From<StatusArg> for CardStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Owned => CardStatus::Owned,
            StatusArg::Ordered => CardStatus::Ordered,
            StatusArg::No => CardStatus::No,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "cardz", bin_name = "cardz", version)]
#[command(about = "Track ownership of a trading-card collection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory override (default: the platform data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Card catalog JSON override
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// View a shared collection (share link or user id); read-only
    #[arg(short, long, global = true, value_name = "LINK", help_heading = "Options")]
    pub user: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and sign in
    #[command(display_order = 1)]
    Signup {
        email: String,
        password: String,
    },

    /// Sign in with email and password, or a federated provider
    #[command(display_order = 2)]
    Login {
        email: Option<String>,

        #[arg(short, long)]
        password: Option<String>,

        /// Trust the provider-verified email instead of a password
        #[arg(long)]
        federated: bool,
    },

    /// Sign out and clear the saved session
    #[command(display_order = 3)]
    Logout,

    /// List cards (the default command)
    #[command(alias = "ls", display_order = 10)]
    List {
        /// Only cards with this status
        #[arg(short, long, value_enum)]
        status: Option<StatusArg>,

        /// Only cards from this era
        #[arg(short, long)]
        era: Option<String>,

        /// Sort by sheet number descending
        #[arg(long)]
        desc: bool,

        /// Only cards with trade surplus
        #[arg(long)]
        trade: bool,
    },

    /// List the eras in the catalog
    #[command(display_order = 11)]
    Eras,

    /// Collection statistics
    #[command(display_order = 12)]
    Stats,

    /// Show one card with all its variations
    #[command(display_order = 13)]
    Show {
        card_id: String,
    },

    /// Add one copy of a variation
    #[command(display_order = 20)]
    Inc {
        card_id: String,
        /// Variation key (e.g. normal, reverse_holo)
        key: String,
    },

    /// Remove one copy of a variation
    #[command(display_order = 21)]
    Dec {
        card_id: String,
        key: String,
    },

    /// Toggle the pending-order flag of a variation
    #[command(display_order = 22)]
    Order {
        card_id: String,
        key: String,
    },

    /// Toggle an owned language of a variation
    #[command(display_order = 23)]
    Lang {
        card_id: String,
        key: String,
        language: String,
    },

    /// Print the read-only share link
    #[command(display_order = 30)]
    Share {
        /// Also copy the link to the clipboard
        #[arg(long)]
        copy: bool,
    },
}
