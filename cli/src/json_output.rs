use moviematch_core::{MatchError, MovieMatch};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub actor: String,
    pub base: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    /// Degrees of separation, or the negative outcome code.
    pub code: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Actor,
    Movie,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStep {
    pub name: String,
    pub kind: StepKind,
}

pub fn create_json_output(
    actor: &str,
    movie_match: &MovieMatch,
    outcome: &Result<usize, MatchError>,
) -> JsonOutput {
    let result = match outcome {
        Ok(distance) => JsonResult {
            found: true,
            code: *distance as i64,
            distance: Some(*distance),
            path: Some(
                movie_match
                    .path()
                    .iter()
                    .map(|&vertex| JsonStep {
                        name: movie_match.names().name(vertex).unwrap_or_default().to_string(),
                        kind: if movie_match.is_movie(vertex) {
                            StepKind::Movie
                        } else {
                            StepKind::Actor
                        },
                    })
                    .collect(),
            ),
            error: None,
        },
        Err(error) => JsonResult {
            found: false,
            code: error.code(),
            distance: None,
            path: None,
            error: Some(error.to_string()),
        },
    };

    JsonOutput {
        query: JsonQuery {
            actor: actor.to_string(),
            base: movie_match.base_actor().unwrap_or_default().to_string(),
        },
        result,
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
