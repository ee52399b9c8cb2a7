//! Typed records for the three dataset relations.
//!
//! Column names follow the CSV headers of the source files; extra columns
//! are ignored on load.

use serde::Deserialize;

/// Identifier of a movie, shared by the cast and returns relations.
pub type MovieId = i64;

/// One (actor, movie) pairing from the cast relation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CastAppearance {
    #[serde(rename = "name")]
    pub actor_name: String,
    pub movie_id: MovieId,
}

impl CastAppearance {
    pub fn new(actor_name: impl Into<String>, movie_id: MovieId) -> Self {
        Self {
            actor_name: actor_name.into(),
            movie_id,
        }
    }
}

/// The financial return of a single movie.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieReturn {
    #[serde(rename = "id")]
    pub movie_id: MovieId,

    /// Return ratio, where 1.0 is break-even. `None` when the cell is blank.
    #[serde(rename = "return")]
    pub return_ratio: Option<f64>,
}

impl MovieReturn {
    pub fn new(movie_id: MovieId, return_ratio: f64) -> Self {
        Self {
            movie_id,
            return_ratio: Some(return_ratio),
        }
    }

    /// A return record whose ratio is missing from the source data.
    pub fn missing(movie_id: MovieId) -> Self {
        Self {
            movie_id,
            return_ratio: None,
        }
    }
}

/// One entry of the actor directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActorEntry {
    #[serde(rename = "name")]
    pub actor_name: String,
}

impl ActorEntry {
    pub fn new(actor_name: impl Into<String>) -> Self {
        Self {
            actor_name: actor_name.into(),
        }
    }
}
