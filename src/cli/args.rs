// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Base URL of the notes API (overrides the config file)
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Path to the config file (optional)
    #[arg(long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in with an existing account
    Login {
        email: String,
        password: String,
    },

    /// Create an account and log in
    Signup {
        email: String,
        password: String,
    },

    /// Forget the stored session (no server call)
    Logout,

    /// Show the identity behind the current session
    Whoami,

    /// List notes, narrowed by category, tag, and search term
    List {
        /// Only notes in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only notes carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only notes whose text matches this search term
        #[arg(short, long)]
        search: Option<String>,

        /// Output notes as JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Show {
        /// Note ID to show
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Output the note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note
    Add {
        /// Note title (may be empty)
        #[arg(short = 'T', long, default_value = "")]
        title: String,

        /// Note content (may be empty)
        #[arg(short = 'C', long, default_value = "")]
        content: String,

        /// Category label
        #[arg(short, long)]
        category: Option<String>,

        /// Comma-separated tags
        #[arg(short, long, default_value = "")]
        tags: String,
    },

    /// Edit fields of an existing note
    Edit {
        /// Note ID to edit
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// New title
        #[arg(short = 'T', long)]
        title: Option<String>,

        /// New content
        #[arg(short = 'C', long)]
        content: Option<String>,

        /// New category label (empty string clears it)
        #[arg(short, long)]
        category: Option<String>,

        /// New comma-separated tags (replaces the old set)
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Delete a note
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List categories
    Categories,

    /// Create a category
    NewCategory {
        /// Category name
        name: String,
    },

    /// List tags across the server enumeration and the loaded notes
    Tags,

    /// Toggle between the light and dark theme
    Theme,
}
