use moviematch_core::{MatchConfig, MovieMatch};

/// `A - M1 - B - M2 - C` plus a separate `D - M3 - E` component.
pub const CHAIN_DATABASE: &str = "\
M1 (2001)/A/B
M2 (2002)/B/C
M3 (2003)/D/E
";

/// Two equally short routes from `A` to `D`: through `B` or through `C`.
pub const SQUARE_DATABASE: &str = "\
M1 (2001)/A/B
M2 (2002)/A/C
M3 (2003)/B/D
M4 (2004)/C/D
";

pub const HINT_DATABASE: &str = "\
Apollo 13 (1995)/Bacon, Kevin/Hanks, Tom
Beauty Shop (2005)/Bacon, Kyra/Baker, Joe/Baldwin, Alec
Desperado (1995)/Banderas, Antonio
";

pub fn loaded(database: &str) -> MovieMatch {
    loaded_with(database, MatchConfig::default())
}

pub fn loaded_with(database: &str, config: MatchConfig) -> MovieMatch {
    let mut movie_match = MovieMatch::new(config);
    movie_match.load_str(database).unwrap();
    movie_match
}
