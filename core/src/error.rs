use crate::graph::Vertex;
use thiserror::Error;

/// Errors raised by the adjacency-list store and its file formats.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Vertex {vertex} is out of range for a graph with {count} vertices")]
    VertexOutOfRange { vertex: Vertex, count: usize },

    #[error("Malformed graph file at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised when a survey is asked to run against a graph it was not
/// sized for.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurveyError {
    /// The graph changed vertex count since the last reset.
    #[error("Survey holds {survey} vertices but the graph has {graph}; reset the survey first")]
    StaleSurvey { survey: usize, graph: usize },

    #[error("Vertex {vertex} is out of range for a survey over {count} vertices")]
    VertexOutOfRange { vertex: Vertex, count: usize },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read database: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Outcomes of the degrees-of-separation queries that are not a distance.
///
/// Each variant maps onto the numeric codes of the classic game through
/// [`MatchError::code`].
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{0} is not in the database")]
    NotInDatabase(String),

    #[error("{0} is a movie")]
    IsMovie(String),

    #[error("{0} cannot be reached from the base actor")]
    Unreachable(String),

    #[error("No base actor has been chosen")]
    NoBaseActor,

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Survey(#[from] SurveyError),
}

impl MatchError {
    pub const NOT_IN_DATABASE: i64 = -3;
    pub const UNREACHABLE: i64 = -2;
    pub const IS_MOVIE: i64 = -1;

    /// Numeric outcome reported by `movie_distance`.
    pub fn code(&self) -> i64 {
        match self {
            MatchError::NotInDatabase(_) => Self::NOT_IN_DATABASE,
            MatchError::IsMovie(_) => Self::IS_MOVIE,
            MatchError::Unreachable(_) | MatchError::NoBaseActor => Self::UNREACHABLE,
            MatchError::Load(_) | MatchError::Survey(_) => Self::UNREACHABLE,
        }
    }
}
