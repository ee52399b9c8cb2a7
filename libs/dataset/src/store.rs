//! Read-only dataset store.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;

use crate::normalize_name;
use crate::records::{ActorEntry, CastAppearance, MovieId, MovieReturn};

/// Record counts per relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub cast_appearances: usize,
    pub movie_returns: usize,
    pub directory_entries: usize,
    pub distinct_cast_actors: usize,
}

/// The three relations, held in load order and never mutated.
///
/// Share it behind an `Arc`; every operation takes `&self`.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    cast: Vec<CastAppearance>,
    returns: Vec<MovieReturn>,
    directory: Vec<ActorEntry>,
    /// Normalized actor name -> movies the actor appeared in.
    movies_by_actor: HashMap<String, BTreeSet<MovieId>>,
}

impl DatasetStore {
    /// Build a store from already-parsed records.
    pub fn new(
        cast: Vec<CastAppearance>,
        returns: Vec<MovieReturn>,
        directory: Vec<ActorEntry>,
    ) -> Self {
        let mut movies_by_actor: HashMap<String, BTreeSet<MovieId>> = HashMap::new();
        for appearance in &cast {
            movies_by_actor
                .entry(normalize_name(&appearance.actor_name))
                .or_default()
                .insert(appearance.movie_id);
        }

        Self {
            cast,
            returns,
            directory,
            movies_by_actor,
        }
    }

    /// Movies the actor appeared in, matched case-insensitively.
    ///
    /// An unknown actor yields an empty set.
    pub fn movies_for_actor(&self, name: &str) -> BTreeSet<MovieId> {
        self.movies_by_actor
            .get(&normalize_name(name))
            .cloned()
            .unwrap_or_default()
    }

    /// Return records for the given movies, in load order.
    ///
    /// Duplicate records for one movie are all returned.
    pub fn returns_for_movies(&self, ids: &BTreeSet<MovieId>) -> Vec<&MovieReturn> {
        self.returns
            .iter()
            .filter(|r| ids.contains(&r.movie_id))
            .collect()
    }

    /// Every directory name, lower-cased, in load order. Not deduplicated.
    pub fn all_actor_names(&self) -> Vec<String> {
        self.directory
            .iter()
            .map(|entry| normalize_name(&entry.actor_name))
            .collect()
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            cast_appearances: self.cast.len(),
            movie_returns: self.returns.len(),
            directory_entries: self.directory.len(),
            distinct_cast_actors: self.movies_by_actor.len(),
        }
    }

    /// Number of distinct cast actors missing from the directory.
    pub fn directory_mismatches(&self) -> usize {
        let known: HashSet<String> = self.all_actor_names().into_iter().collect();
        self.movies_by_actor
            .keys()
            .filter(|name| !known.contains(*name))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn store() -> DatasetStore {
        DatasetStore::new(
            vec![
                CastAppearance::new("Leonardo DiCaprio", 27205),
                CastAppearance::new("Leonardo DiCaprio", 597),
                CastAppearance::new("Kate Winslet", 597),
                CastAppearance::new("Joseph Gordon-Levitt", 27205),
            ],
            vec![
                MovieReturn::new(597, 9.23),
                MovieReturn::new(1893, 0.0),
                MovieReturn::new(27205, 5.02),
            ],
            vec![
                ActorEntry::new("Leonardo DiCaprio"),
                ActorEntry::new("KATE WINSLET"),
                ActorEntry::new("Kate Winslet"),
            ],
        )
    }

    #[rstest]
    #[case("Leonardo DiCaprio")]
    #[case("leonardo dicaprio")]
    #[case("LEONARDO DICAPRIO")]
    fn test_movies_for_actor_ignores_case(#[case] name: &str) {
        let movies = store().movies_for_actor(name);
        assert_eq!(movies.into_iter().collect::<Vec<_>>(), vec![597, 27205]);
    }

    #[rstest]
    #[case("Brad Pitt")]
    #[case("")]
    #[case(" leonardo dicaprio")]
    fn test_movies_for_unknown_actor_is_empty(#[case] name: &str) {
        assert!(store().movies_for_actor(name).is_empty());
    }

    #[test]
    fn test_returns_for_movies_keeps_load_order() {
        let store = store();
        let ids: BTreeSet<MovieId> = [27205, 597, 42].into_iter().collect();
        let ids_found: Vec<MovieId> = store
            .returns_for_movies(&ids)
            .into_iter()
            .map(|r| r.movie_id)
            .collect();
        assert_eq!(ids_found, vec![597, 27205]);
    }

    #[test]
    fn test_all_actor_names_lowercased_without_dedup() {
        assert_eq!(
            store().all_actor_names(),
            vec!["leonardo dicaprio", "kate winslet", "kate winslet"]
        );
    }

    #[test]
    fn test_stats() {
        let stats = store().stats();
        assert_eq!(
            stats,
            DatasetStats {
                cast_appearances: 4,
                movie_returns: 3,
                directory_entries: 3,
                distinct_cast_actors: 3,
            }
        );
    }

    #[test]
    fn test_directory_mismatches_are_counted() {
        // Joseph Gordon-Levitt is cast but not in the directory.
        assert_eq!(store().directory_mismatches(), 1);
    }
}
