//! # marquee-dataset
//!
//! The immutable movie-cast dataset behind marquee.
//!
//! Three relations are loaded once at startup and never mutated:
//!
//! - **Cast appearances**: which actors appeared in which movies
//! - **Movie returns**: the financial return ratio of each movie (1.0 = break-even)
//! - **Actor directory**: the canonical list of known actor names
//!
//! Actor names are matched case-insensitively everywhere. No referential
//! integrity is enforced between the directory and the cast relation.

mod error;
mod load;
mod records;
mod store;

pub use error::{DatasetError, Relation};
pub use load::{DatasetPaths, CAST_FILE, DIRECTORY_FILE, RETURNS_FILE};
pub use records::{ActorEntry, CastAppearance, MovieId, MovieReturn};
pub use store::{DatasetStats, DatasetStore};

/// Normalize an actor name into its lookup key.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}
