use moviematch_core::{LoadSummary, MatchError, MovieMatch};

use crate::colors::ColorScheme;

/// Retained path of the last distance query, queried actor first. Movies
/// sit on odd positions and are drawn as branches of the actor above.
pub fn format_path(movie_match: &MovieMatch, colors: &ColorScheme) -> String {
    let mut output = String::from("\n");
    for (position, name) in movie_match.path_names().into_iter().enumerate() {
        if position % 2 == 1 {
            output.push_str(&format!("   | {}\n", colors.movie_name(name)));
        } else {
            output.push_str(&format!(" {}\n", colors.actor_name(name)));
        }
    }
    output.push('\n');
    output
}

pub fn format_distance(actor: &str, base: &str, distance: usize, colors: &ColorScheme) -> String {
    let unit = if distance == 1 { "degree" } else { "degrees" };
    format!(
        "{} {} is {} {} from {}",
        colors.success("✅"),
        colors.actor_name(&format!("\"{}\"", actor)),
        colors.number(&distance.to_string()),
        unit,
        colors.actor_name(&format!("\"{}\"", base))
    )
}

pub fn format_match_error(error: &MatchError, colors: &ColorScheme) -> String {
    colors.error(&format!("❌ {}", error)).to_string()
}

pub fn display_distance_result(
    movie_match: &MovieMatch,
    actor: &str,
    outcome: &Result<usize, MatchError>,
    colors: &ColorScheme,
) {
    let base = movie_match.base_actor().unwrap_or_default();
    match outcome {
        Ok(distance) => {
            println!("{}", format_distance(actor, base, *distance, colors));
            print!("{}", format_path(movie_match, colors));
        }
        Err(error) => println!("{}", format_match_error(error, colors)),
    }
}

/// A movie with its cast or an actor with their movies, one per line.
pub fn format_star(name: &str, linked: &[&str], movie_match: &MovieMatch, colors: &ColorScheme) -> String {
    let paint = |text: &str| {
        let is_movie = movie_match
            .names()
            .get(text)
            .is_some_and(|vertex| movie_match.is_movie(vertex));
        if is_movie {
            colors.movie_name(text).to_string()
        } else {
            colors.actor_name(text).to_string()
        }
    };

    let mut output = format!("\n {}\n", paint(name));
    for linked_name in linked {
        output.push_str(&format!("   | {}\n", paint(linked_name)));
    }
    output.push('\n');
    output
}

pub fn format_hints(prefix: &str, suggestions: &[&str], colors: &ColorScheme) -> String {
    if suggestions.is_empty() {
        return format!("{} \"{}\"\n", colors.error("No names close to"), prefix);
    }

    let mut output = format!("Names close to \"{}\":\n", prefix);
    for suggestion in suggestions {
        output.push_str(&format!("   {}\n", suggestion));
    }
    output
}

pub fn format_load_summary(summary: &LoadSummary, colors: &ColorScheme) -> String {
    let mut line = format!(
        "{} Loaded {} movies and {} actors",
        colors.stats("📊"),
        colors.number(&summary.movies.to_string()),
        colors.number(&summary.actors.to_string())
    );
    if summary.skipped_credits > 0 {
        line.push_str(&format!(
            " ({} credits skipped)",
            colors.error(&summary.skipped_credits.to_string())
        ));
    }
    line
}
