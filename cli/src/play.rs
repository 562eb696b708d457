//! The interactive game. Every plain line is an actor query against the
//! base actor; lines starting with `:` are commands.

use moviematch_core::{MatchError, MovieMatch};
use std::io::{self, BufRead, Write};

use crate::colors::ColorScheme;
use crate::display::{format_distance, format_hints, format_match_error, format_path, format_star};

pub const HELP: &str = "\
Type an actor name to see how far they are from the base actor.
Commands:
  :base NAME     survey from a new base actor
  :star NAME     list a movie's cast or an actor's movies
  :hint PREFIX   suggest names close to PREFIX
  :shuffle       pick among equally short paths at random
  :dump          print the graph, survey data and name index
  :help          show this message
  :quit          leave the game
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand<'a> {
    Query(&'a str),
    Base(&'a str),
    Star(&'a str),
    Hint(&'a str),
    Shuffle,
    Dump,
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

pub fn parse_play_command(line: &str) -> PlayCommand<'_> {
    let line = line.trim();
    if line.is_empty() {
        return PlayCommand::Empty;
    }
    let Some(command) = line.strip_prefix(':') else {
        return PlayCommand::Query(line);
    };

    let (name, argument) = match command.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (command, ""),
    };
    match (name, argument.is_empty()) {
        ("base", false) => PlayCommand::Base(argument),
        ("star", false) => PlayCommand::Star(argument),
        ("hint", false) => PlayCommand::Hint(argument),
        ("shuffle", _) => PlayCommand::Shuffle,
        ("dump", _) => PlayCommand::Dump,
        ("help", _) => PlayCommand::Help,
        ("quit" | "q" | "exit", _) => PlayCommand::Quit,
        _ => PlayCommand::Unknown(line),
    }
}

pub struct PlaySession<'a> {
    movie_match: &'a mut MovieMatch,
    colors: &'a ColorScheme,
    hint_limit: usize,
}

impl<'a> PlaySession<'a> {
    pub fn new(movie_match: &'a mut MovieMatch, colors: &'a ColorScheme, hint_limit: usize) -> Self {
        Self {
            movie_match,
            colors,
            hint_limit,
        }
    }

    /// Reads commands until `:quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(out, "{} ", self.colors.prompt("actor>"))?;
            out.flush()?;

            let Some(line) = lines.next().transpose()? else {
                writeln!(out)?;
                return Ok(());
            };
            if !self.execute(parse_play_command(&line), out)? {
                return Ok(());
            }
        }
    }

    /// Returns false once the player asks to leave.
    pub fn execute<W: Write>(&mut self, command: PlayCommand<'_>, out: &mut W) -> io::Result<bool> {
        match command {
            PlayCommand::Query(actor) => self.query(actor, out)?,
            PlayCommand::Base(actor) => match self.movie_match.init(actor) {
                Ok(()) => writeln!(
                    out,
                    "{} Base actor is now {}",
                    self.colors.success("✅"),
                    self.colors.actor_name(&format!("\"{}\"", actor))
                )?,
                Err(error) => self.report(&error, actor, out)?,
            },
            PlayCommand::Star(name) => match self.movie_match.show_star(name) {
                Ok(linked) => write!(out, "{}", format_star(name, &linked, self.movie_match, self.colors))?,
                Err(error) => self.report(&error, name, out)?,
            },
            PlayCommand::Hint(prefix) => {
                let suggestions = self.movie_match.hint(prefix, self.hint_limit);
                write!(out, "{}", format_hints(prefix, &suggestions, self.colors))?;
            }
            PlayCommand::Shuffle => match self.movie_match.shuffle(&mut rand::rng()) {
                Ok(()) => writeln!(out, "Adjacency order shuffled")?,
                Err(error) => writeln!(out, "{}", format_match_error(&error, self.colors))?,
            },
            PlayCommand::Dump => self.movie_match.write_dump(out)?,
            PlayCommand::Help => write!(out, "{}", HELP)?,
            PlayCommand::Quit => return Ok(false),
            PlayCommand::Empty => {}
            PlayCommand::Unknown(line) => writeln!(
                out,
                "{} {} (try :help)",
                self.colors.error("Unknown command"),
                line
            )?,
        }
        Ok(true)
    }

    fn query<W: Write>(&mut self, actor: &str, out: &mut W) -> io::Result<()> {
        match self.movie_match.distance(actor) {
            Ok(distance) => {
                let base = self.movie_match.base_actor().unwrap_or_default();
                writeln!(out, "{}", format_distance(actor, base, distance, self.colors))?;
                write!(out, "{}", format_path(self.movie_match, self.colors))
            }
            Err(error) => self.report(&error, actor, out),
        }
    }

    /// Unknown names come with suggestions so the player can retype them.
    fn report<W: Write>(&self, error: &MatchError, name: &str, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", format_match_error(error, self.colors))?;
        if matches!(error, MatchError::NotInDatabase(_)) {
            let suggestions = self.movie_match.hint(name, self.hint_limit);
            write!(out, "{}", format_hints(name, &suggestions, self.colors))?;
        }
        Ok(())
    }
}
