//! Dataset error types.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The relation a dataset error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Cast,
    Returns,
    Directory,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Cast => "cast",
            Relation::Returns => "returns",
            Relation::Directory => "directory",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while loading the dataset.
///
/// Any of these is fatal: a partially loaded dataset is never served.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The backing file could not be opened.
    #[error("failed to open {relation} file {}: {source}", .path.display())]
    Open {
        relation: Relation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be read or decoded.
    #[error("failed to parse {relation} records: {source}")]
    Parse {
        relation: Relation,
        #[source]
        source: csv::Error,
    },
}

impl DatasetError {
    /// The relation that failed to load.
    pub fn relation(&self) -> Relation {
        match self {
            DatasetError::Open { relation, .. } | DatasetError::Parse { relation, .. } => *relation,
        }
    }
}
