//! CSV loading for the dataset relations.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{DatasetError, Relation};
use crate::store::DatasetStore;

/// Default file name of the cast relation.
pub const CAST_FILE: &str = "ResultadoCastActores.csv";
/// Default file name of the returns relation.
pub const RETURNS_FILE: &str = "FuncionActor.csv";
/// Default file name of the actor directory.
pub const DIRECTORY_FILE: &str = "ListaActores.csv";

/// Locations of the three backing files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub cast: PathBuf,
    pub returns: PathBuf,
    pub directory: PathBuf,
}

impl DatasetPaths {
    /// The default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            cast: dir.join(CAST_FILE),
            returns: dir.join(RETURNS_FILE),
            directory: dir.join(DIRECTORY_FILE),
        }
    }
}

impl DatasetStore {
    /// Load all three relations from disk.
    ///
    /// Fails if any file is missing or malformed.
    pub fn load(paths: &DatasetPaths) -> Result<Self, DatasetError> {
        let cast = read_file(Relation::Cast, &paths.cast)?;
        let returns = read_file(Relation::Returns, &paths.returns)?;
        let directory = read_file(Relation::Directory, &paths.directory)?;

        let store = Self::new(cast, returns, directory);
        let stats = store.stats();
        info!(
            cast_appearances = stats.cast_appearances,
            movie_returns = stats.movie_returns,
            directory_entries = stats.directory_entries,
            "Dataset loaded"
        );
        Ok(store)
    }

    /// Parse all three relations from arbitrary CSV sources.
    pub fn from_readers<C, R, D>(cast: C, returns: R, directory: D) -> Result<Self, DatasetError>
    where
        C: Read,
        R: Read,
        D: Read,
    {
        Ok(Self::new(
            read_records(Relation::Cast, cast)?,
            read_records(Relation::Returns, returns)?,
            read_records(Relation::Directory, directory)?,
        ))
    }
}

fn read_file<T: DeserializeOwned>(relation: Relation, path: &Path) -> Result<Vec<T>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Open {
        relation,
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records(relation, file)?;
    debug!(%relation, path = %path.display(), records = records.len(), "Read relation");
    Ok(records)
}

fn read_records<T: DeserializeOwned, R: Read>(
    relation: Relation,
    reader: R,
) -> Result<Vec<T>, DatasetError> {
    csv::Reader::from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| DatasetError::Parse { relation, source })
}
