use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_BASE_ACTOR: &str = "Bacon, Kevin";

#[derive(Parser, Debug)]
#[command(name = "moviematch")]
#[command(about = "Degrees of separation between movie actors")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log more detail (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Leading characters of a hint query that must match
    #[arg(long, value_name = "K", default_value_t = 6, global = true)]
    pub hint_length: usize,

    /// Field separator in the movie database
    #[arg(long, value_name = "C", default_value_t = '/', global = true)]
    pub delimiter: char,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Degrees of separation between an actor and the base actor
    Distance {
        /// Actor name as it appears in the database
        actor: String,

        /// Base actor that every distance is measured from
        #[arg(short, long, value_name = "NAME", default_value = DEFAULT_BASE_ACTOR)]
        base: String,

        /// Movie database file
        #[arg(short, long, value_name = "PATH")]
        database: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive game: type actor names, get their distance and path
    Play {
        /// Base actor that every distance is measured from
        #[arg(short, long, value_name = "NAME", default_value = DEFAULT_BASE_ACTOR)]
        base: String,

        /// Movie database file
        #[arg(short, long, value_name = "PATH")]
        database: Option<PathBuf>,
    },

    /// List the cast of a movie or the movies of an actor
    Star {
        name: String,

        /// Movie database file
        #[arg(short, long, value_name = "PATH")]
        database: Option<PathBuf>,
    },

    /// Suggest database names close to a prefix
    Hint {
        prefix: String,

        /// Maximum number of suggestions
        #[arg(short, long, value_name = "N", default_value_t = 10)]
        limit: usize,

        /// Movie database file
        #[arg(short, long, value_name = "PATH")]
        database: Option<PathBuf>,
    },

    /// Survey a plain graph file breadth-first or depth-first
    Survey {
        graph_file: PathBuf,

        /// Traversal strategy
        #[arg(short, long, default_value = "bfs", value_parser = ["bfs", "dfs"])]
        algorithm: String,

        /// Treat edges as one-way
        #[arg(long)]
        directed: bool,

        /// Survey only the component reachable from the start vertex
        #[arg(long)]
        single: bool,

        /// First root of the survey
        #[arg(short, long, value_name = "V", default_value_t = 0)]
        start: usize,
    },

    /// Structural summary of a plain graph file
    GraphInfo {
        graph_file: PathBuf,

        /// Treat edges as one-way
        #[arg(long)]
        directed: bool,
    },
}
