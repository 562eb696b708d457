use moviematch_core::{LoadSummary, MatchConfig, MovieMatch};
use std::{env, error::Error, ffi::OsString, path::PathBuf};
use tracing::info;

use crate::args::Args;

pub const DATABASE_ENV: &str = "MOVIEMATCH_DATABASE";

/// Database location in precedence order: explicit flag, environment
/// variable, then `<data_dir>/moviematch/movies.txt`.
pub fn resolve_database_path(
    flag: Option<PathBuf>,
    env_value: Option<OsString>,
    data_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    flag.or_else(|| env_value.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| data_dir.map(|dir| dir.join("moviematch").join("movies.txt")))
}

pub fn match_config(args: &Args) -> MatchConfig {
    MatchConfig {
        delimiter: args.delimiter,
        hint_prefix_len: args.hint_length,
        ..MatchConfig::default()
    }
}

pub struct MovieMatchApp {
    pub database_path: PathBuf,
    pub config: MatchConfig,
}

impl MovieMatchApp {
    pub fn new(database: Option<PathBuf>, config: MatchConfig) -> Result<Self, Box<dyn Error>> {
        let database_path =
            resolve_database_path(database, env::var_os(DATABASE_ENV), dirs::data_dir())
                .ok_or("No database given and no data directory found; pass --database")?;

        if !database_path.exists() {
            return Err(format!("Database file does not exist: {:?}", database_path).into());
        }

        Ok(Self {
            database_path,
            config,
        })
    }

    pub fn load(&self) -> Result<(MovieMatch, LoadSummary), Box<dyn Error>> {
        let mut movie_match = MovieMatch::new(self.config.clone());
        let summary = movie_match.load(&self.database_path)?;
        info!(
            path = %self.database_path.display(),
            movies = summary.movies,
            actors = summary.actors,
            "database loaded"
        );
        Ok((movie_match, summary))
    }

    /// Loads the database and surveys from `base`.
    pub fn load_with_base(&self, base: &str) -> Result<MovieMatch, Box<dyn Error>> {
        let (mut movie_match, _) = self.load()?;
        movie_match.init(base)?;
        Ok(movie_match)
    }
}
