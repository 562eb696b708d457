use clap::Parser;
use moviematch::colors::ColorScheme;
use moviematch::display::{
    display_distance_result, format_hints, format_load_summary, format_star,
};
use moviematch::graph_report::{format_graph_info, format_survey};
use moviematch::json_output::{create_json_output, print_json_output};
use moviematch::play::{HELP, PlaySession};
use moviematch::{Args, Command, MovieMatchApp, app::match_config};
use moviematch_core::graph_util::load_graph_file;
use moviematch_core::{Directedness, SurveyAlgorithm};
use std::error::Error;
use std::io;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = run(args, &colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let config = match_config(&args);

    match args.command {
        Command::Distance {
            actor,
            base,
            database,
            json,
        } => {
            let app = MovieMatchApp::new(database, config)?;
            let mut movie_match = app.load_with_base(&base)?;
            let outcome = movie_match.distance(&actor);
            if json {
                print_json_output(&create_json_output(&actor, &movie_match, &outcome));
            } else {
                display_distance_result(&movie_match, &actor, &outcome, colors);
            }
        }
        Command::Play { base, database } => {
            let app = MovieMatchApp::new(database, config)?;
            let (mut movie_match, summary) = app.load()?;
            println!("{}", format_load_summary(&summary, colors));
            movie_match.init(&base)?;
            println!(
                "🎬 Base actor: {}\n",
                colors.actor_name(&format!("\"{}\"", base))
            );
            print!("{}", HELP);

            let stdin = io::stdin();
            let mut stdout = io::stdout();
            PlaySession::new(&mut movie_match, colors, 10).run(stdin.lock(), &mut stdout)?;
        }
        Command::Star { name, database } => {
            let app = MovieMatchApp::new(database, config)?;
            let (movie_match, _) = app.load()?;
            let linked = movie_match.show_star(&name)?;
            print!("{}", format_star(&name, &linked, &movie_match, colors));
        }
        Command::Hint {
            prefix,
            limit,
            database,
        } => {
            let app = MovieMatchApp::new(database, config)?;
            let (movie_match, _) = app.load()?;
            let suggestions = movie_match.hint(&prefix, limit);
            print!("{}", format_hints(&prefix, &suggestions, colors));
        }
        Command::Survey {
            graph_file,
            algorithm,
            directed,
            single,
            start,
        } => {
            let graph = load_graph_file(&graph_file, directedness(directed))?;
            let algorithm = SurveyAlgorithm::from(algorithm);
            print!("{}", format_survey(&graph, algorithm, single, start)?);
        }
        Command::GraphInfo {
            graph_file,
            directed,
        } => {
            let graph = load_graph_file(&graph_file, directedness(directed))?;
            print!("{}", format_graph_info(&graph));
        }
    }

    Ok(())
}

fn directedness(directed: bool) -> Directedness {
    if directed {
        Directedness::Directed
    } else {
        Directedness::Undirected
    }
}
