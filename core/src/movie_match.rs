//! Degrees of separation between actors.
//!
//! Movies and actors share one vertex id space in an undirected bipartite
//! graph: every database line links its movie to each cast member. A
//! breadth-first survey rooted at the base actor then answers every
//! distance query against the current graph. Paths alternate actor and
//! movie vertices, so the distance between two actors is half the graph
//! distance.

use crate::error::{LoadError, MatchError};
use crate::graph::{Graph, Vertex};
use crate::graph_util::format_adjacency_list;
use crate::hint::{HintIndex, hint_key};
use crate::mapped_file::read_mapped_text;
use crate::match_config::MatchConfig;
use crate::name_index::NameIndex;
use crate::parsing::{MovieRecord, is_movie_title, parse_records};
use crate::survey::report::format_bfs_table;
use crate::survey::{BreadthFirstSurvey, Color, Survey};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Movies first seen in this load.
    pub movies: usize,
    /// Actors first seen in this load.
    pub actors: usize,
    /// Credits dropped because both ends were movies or both were actors.
    pub skipped_credits: usize,
    /// Records whose title does not end in a `(year)` and was therefore
    /// registered as an actor.
    pub non_movie_titles: usize,
}

#[derive(Debug)]
pub struct MovieMatch {
    graph: Graph,
    names: NameIndex,
    hints: HintIndex,
    survey: BreadthFirstSurvey,
    base_actor: Option<Vertex>,
    path: Vec<Vertex>,
    config: MatchConfig,
}

impl Default for MovieMatch {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl MovieMatch {
    pub fn new(config: MatchConfig) -> Self {
        let graph = Graph::undirected();
        let survey = BreadthFirstSurvey::new(&graph);
        Self {
            graph,
            names: NameIndex::new(),
            hints: HintIndex::new(),
            survey,
            base_actor: None,
            path: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn names(&self) -> &NameIndex {
        &self.names
    }

    pub fn survey(&self) -> &BreadthFirstSurvey {
        &self.survey
    }

    /// Loads a database file, one movie per line.
    pub fn load(&mut self, database_path: &Path) -> Result<LoadSummary, MatchError> {
        let delimiter = self.config.delimiter;
        read_mapped_text(database_path, |text| {
            self.load_records(parse_records(text, delimiter))
        })
        .map_err(LoadError::from)?
    }

    pub fn load_str(&mut self, text: &str) -> Result<LoadSummary, MatchError> {
        self.load_records(parse_records(text, self.config.delimiter))
    }

    /// Adds `records` to the database. Names already present keep their
    /// vertex. The base actor is cleared because earlier survey results no
    /// longer describe the grown graph.
    pub fn load_records<'a>(
        &mut self,
        records: impl IntoIterator<Item = MovieRecord<'a>>,
    ) -> Result<LoadSummary, MatchError> {
        let records: Vec<MovieRecord<'a>> = records.into_iter().collect();
        let mut summary = LoadSummary::default();

        let credits = self.register_names(&records, &mut summary);

        self.graph.set_vertex_count(self.names.len());
        for (movie, cast) in credits {
            for actor in cast {
                if self.is_movie(movie) == self.is_movie(actor) {
                    warn!(
                        movie = self.display_name(movie),
                        actor = self.display_name(actor),
                        "skipping credit that would join two vertices of the same kind"
                    );
                    summary.skipped_credits += 1;
                    continue;
                }
                self.graph.add_edge(movie, actor).map_err(LoadError::from)?;
            }
        }

        self.hints.rebuild(&self.names);
        self.base_actor = None;
        self.path.clear();
        self.survey.reset(&self.graph);

        debug!(
            movies = summary.movies,
            actors = summary.actors,
            skipped = summary.skipped_credits,
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "loaded movie records"
        );
        Ok(summary)
    }

    fn register_names(
        &mut self,
        records: &[MovieRecord<'_>],
        summary: &mut LoadSummary,
    ) -> Vec<(Vertex, Vec<Vertex>)> {
        let name_count: usize = records.iter().map(|record| 1 + record.cast.len()).sum();
        self.names.reserve(name_count);

        let mut register = |name: &str| {
            let (vertex, inserted) = self.names.insert(name);
            if inserted {
                if is_movie_title(name) {
                    summary.movies += 1;
                } else {
                    summary.actors += 1;
                }
            }
            vertex
        };

        let mut credits = Vec::with_capacity(records.len());
        for record in records {
            let movie = register(record.title);
            let mut cast = Vec::with_capacity(record.cast.len());
            for &actor in &record.cast {
                cast.push(register(actor));
            }
            credits.push((movie, cast));
        }

        for record in records.iter().filter(|record| !is_movie_title(record.title)) {
            warn!(
                title = record.title,
                "record title is not a movie title; it is registered as an actor"
            );
            summary.non_movie_titles += 1;
        }
        credits
    }

    /// Makes `actor` the base of all later distance queries.
    pub fn init(&mut self, actor: &str) -> Result<(), MatchError> {
        let vertex = self.lookup_actor(actor)?;

        self.base_actor = Some(vertex);
        self.path.clear();
        self.survey.reset(&self.graph);
        self.survey.search_from(&self.graph, vertex)?;

        debug!(base = actor, vertex, "surveyed from base actor");
        Ok(())
    }

    /// Degrees of separation between `actor` and the base actor. On success
    /// the connecting path is retained for [`MovieMatch::path`].
    pub fn distance(&mut self, actor: &str) -> Result<usize, MatchError> {
        let vertex = self.lookup_actor(actor)?;
        if self.base_actor.is_none() {
            return Err(MatchError::NoBaseActor);
        }

        let graph_distance = match (self.survey.color(vertex), self.survey.distance(vertex)) {
            (Some(Color::Black), Some(distance)) => distance,
            _ => return Err(MatchError::Unreachable(actor.to_string())),
        };
        debug_assert!(graph_distance % 2 == 0, "actor-to-actor distance must be even");

        self.path = self.survey.path_to_root(vertex);
        Ok(graph_distance / 2)
    }

    /// [`MovieMatch::distance`] in the classic numeric convention: `-3` for
    /// unknown names, `-2` for unreachable actors, `-1` for movies.
    pub fn movie_distance(&mut self, actor: &str) -> i64 {
        match self.distance(actor) {
            Ok(distance) => distance as i64,
            Err(error) => error.code(),
        }
    }

    /// Path of the last successful distance query, from the queried actor
    /// to the base actor, alternating actors and movies.
    pub fn path(&self) -> &[Vertex] {
        &self.path
    }

    pub fn path_names(&self) -> Vec<&str> {
        self.path.iter().map(|&vertex| self.display_name(vertex)).collect()
    }

    pub fn base_actor(&self) -> Option<&str> {
        self.base_actor.and_then(|vertex| self.names.name(vertex))
    }

    /// Everything directly linked to `name`: the cast of a movie or the
    /// movies of an actor, sorted for display.
    pub fn show_star(&self, name: &str) -> Result<Vec<&str>, MatchError> {
        let vertex = self
            .names
            .get(name)
            .ok_or_else(|| MatchError::NotInDatabase(name.to_string()))?;

        let mut neighbors = self.graph.neighbors(vertex).to_vec();
        neighbors.sort_unstable();
        neighbors.dedup();

        let mut linked: Vec<&str> = neighbors
            .into_iter()
            .map(|neighbor| self.display_name(neighbor))
            .collect();
        linked.sort_by_cached_key(|linked_name| (hint_key(linked_name), linked_name.to_string()));
        Ok(linked)
    }

    /// Names close to `prefix` in case-insensitive alphabetic order.
    pub fn hint(&self, prefix: &str, max_suggestions: usize) -> Vec<&str> {
        self.hints
            .suggest(
                prefix,
                self.config.hint_prefix_len,
                self.config.hint_margin,
                max_suggestions,
            )
            .into_iter()
            .map(|vertex| self.display_name(vertex))
            .collect()
    }

    /// Randomizes adjacency order and re-runs the base survey. Distances do
    /// not change; which of several equally short paths is reported may.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), MatchError> {
        self.graph.shuffle(rng);
        self.path.clear();
        self.survey.reset(&self.graph);

        if let Some(base) = self.base_actor {
            self.survey.search_from(&self.graph, base)?;
            debug!(base, "re-surveyed after shuffle");
        }
        Ok(())
    }

    pub fn is_movie(&self, vertex: Vertex) -> bool {
        self.names.name(vertex).is_some_and(is_movie_title)
    }

    pub fn movie_count(&self) -> usize {
        (0..self.names.len()).filter(|&vertex| self.is_movie(vertex)).count()
    }

    pub fn actor_count(&self) -> usize {
        self.names.len() - self.movie_count()
    }

    /// Diagnostic listing: adjacency lists, survey data and the name index.
    pub fn write_dump<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", format_adjacency_list(&self.graph))?;
        write!(out, "{}", format_bfs_table(&self.survey))?;
        writeln!(out)?;
        for (vertex, name) in self.names.names().iter().enumerate() {
            writeln!(out, "name[{}] = {}\tvertex[{}] = {}", vertex, name, name, vertex)?;
        }
        Ok(())
    }

    fn lookup_actor(&self, actor: &str) -> Result<Vertex, MatchError> {
        let vertex = self
            .names
            .get(actor)
            .ok_or_else(|| MatchError::NotInDatabase(actor.to_string()))?;
        if self.is_movie(vertex) {
            return Err(MatchError::IsMovie(actor.to_string()));
        }
        Ok(vertex)
    }

    fn display_name(&self, vertex: Vertex) -> &str {
        self.names.name(vertex).unwrap_or_default()
    }
}
