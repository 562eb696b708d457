use super::fixtures::{HINT_DATABASE, loaded, loaded_with};
use moviematch_core::hint::hint_key;
use moviematch_core::{HintIndex, MatchConfig, MatchError};

#[test]
fn test_hint_widens_matching_range() {
    let movie_match = loaded(HINT_DATABASE);

    assert_eq!(
        movie_match.hint("Bacon, K", 20),
        vec![
            "Apollo 13 (1995)",
            "Bacon, Kevin",
            "Bacon, Kyra",
            "Baker, Joe",
            "Baldwin, Alec",
        ]
    );
}

#[test]
fn test_hint_is_case_insensitive() {
    let movie_match = loaded(HINT_DATABASE);

    assert_eq!(movie_match.hint("BACON", 20), movie_match.hint("bacon, k", 20));
}

#[test]
fn test_hint_past_the_end_returns_tail() {
    let movie_match = loaded(HINT_DATABASE);

    assert_eq!(
        movie_match.hint("zzz", 20),
        vec!["Desperado (1995)", "Hanks, Tom"]
    );
}

#[test]
fn test_hint_respects_limit() {
    let movie_match = loaded(HINT_DATABASE);

    assert_eq!(
        movie_match.hint("b", 3),
        vec!["Bacon, Kevin", "Bacon, Kyra", "Baker, Joe"]
    );
}

#[test]
fn test_hint_fills_limit_with_nearest_near_misses() {
    let movie_match = loaded(HINT_DATABASE);

    assert_eq!(
        movie_match.hint("Desperado", 2),
        vec!["Beauty Shop (2005)", "Desperado (1995)"]
    );
    assert_eq!(
        movie_match.hint("Desperado", 3),
        vec!["Beauty Shop (2005)", "Desperado (1995)", "Hanks, Tom"]
    );
}

#[test]
fn test_hint_prefix_length_from_config() {
    let movie_match = loaded_with(HINT_DATABASE, MatchConfig::new('/', 2, 2));

    let suggestions = movie_match.hint("Baxter, Anne", 20);

    assert_eq!(suggestions.len(), 8);
    assert_eq!(suggestions[0], "Apollo 13 (1995)");
    assert_eq!(suggestions[7], "Desperado (1995)");
}

#[test]
fn test_hint_range_contains_every_prefix_match() {
    let movie_match = loaded(HINT_DATABASE);
    let hints = HintIndex::build(movie_match.names());
    let sorted_keys: Vec<String> = hints
        .sorted_vertices()
        .map(|vertex| hint_key(movie_match.names().name(vertex).unwrap()))
        .collect();

    for query in ["a", "ba", "bac", "bacon, kyra", "BAL", "d", "h", "q"] {
        let truncated: String = hint_key(query).chars().take(6).collect();
        let range = hints.range(query, 6, 2);

        for (position, key) in sorted_keys.iter().enumerate() {
            if key.starts_with(&truncated) {
                assert!(range.contains(&position), "{query:?} misses {key:?}");
            }
        }

        let matches: Vec<usize> = sorted_keys
            .iter()
            .enumerate()
            .filter(|(_, key)| key.starts_with(&truncated))
            .map(|(position, _)| position)
            .collect();
        if let (Some(&first), Some(&last)) = (matches.first(), matches.last()) {
            assert_eq!(range.start, first.saturating_sub(2));
            assert_eq!(range.end, (last + 3).min(sorted_keys.len()));
        }
    }
}

#[test]
fn test_show_star_lists_linked_names_sorted() {
    let movie_match = loaded(HINT_DATABASE);

    assert_eq!(
        movie_match.show_star("Beauty Shop (2005)").unwrap(),
        vec!["Bacon, Kyra", "Baker, Joe", "Baldwin, Alec"]
    );
    assert_eq!(
        movie_match.show_star("Bacon, Kevin").unwrap(),
        vec!["Apollo 13 (1995)"]
    );
    assert!(matches!(
        movie_match.show_star("Nobody"),
        Err(MatchError::NotInDatabase(_))
    ));
}

#[test]
fn test_show_star_collapses_repeated_credits() {
    let movie_match = loaded("Twice (1999)/Zed/Amy/Zed\n");

    assert_eq!(movie_match.show_star("Twice (1999)").unwrap(), vec!["Amy", "Zed"]);
}
