use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "board", bin_name = "board", version)]
#[command(about = "A local bulletin board for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the database file (default: board.db)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all posts, newest first
    List,

    /// Show a single post, content included
    View {
        /// Post id as shown by `list`
        id: i64,
    },

    /// Create a new post
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,

        /// Author name; blank means "anonymous"
        #[arg(short, long, default_value = "")]
        author: String,
    },

    /// Edit an existing post's title and content
    Edit {
        /// Post id as shown by `list`
        id: i64,

        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,
    },

    /// Delete a post
    Delete {
        /// Post id as shown by `list`
        id: i64,
    },
}
