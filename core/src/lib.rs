pub mod error;
pub mod graph;
pub mod graph_util;
pub mod hint;
pub mod mapped_file;
pub mod match_config;
pub mod movie_match;
pub mod name_index;
pub mod parsing;
pub mod survey;

// Re-export commonly used items
pub use error::{GraphError, LoadError, MatchError, SurveyError};
pub use graph::{Directedness, Graph, Vertex};
pub use hint::HintIndex;
pub use match_config::MatchConfig;
pub use movie_match::{LoadSummary, MovieMatch};
pub use name_index::NameIndex;
pub use parsing::{MovieRecord, is_movie_title};
pub use survey::{BreadthFirstSurvey, Color, DepthFirstSurvey, Survey, SurveyAlgorithm};
