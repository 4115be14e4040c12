//! Loading and filtering the legislator roster.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::congress::Legislator;

/// Fatal roster errors. Nothing downstream runs without a roster.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("'{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Read and parse a roster file.
///
/// # Errors
/// Returns `RosterError::NotFound` if the file does not exist, `Io` for any
/// other read failure, and `Parse` if the contents are not a list of
/// legislators.
pub fn load_roster(path: &Path) -> Result<Vec<Legislator>, RosterError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            RosterError::NotFound(path.to_path_buf())
        } else {
            RosterError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let legislators = parse_roster(&contents).map_err(|source| RosterError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), count = legislators.len(), "roster loaded");
    Ok(legislators)
}

/// Parse roster YAML from a string.
///
/// # Errors
/// Returns the YAML error if the document is not a sequence of legislators.
pub fn parse_roster(yaml: &str) -> Result<Vec<Legislator>, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// Keep only legislators whose last term is a House seat, in roster order.
///
/// Entries with no terms are dropped, never rejected. A representative with
/// no Bioguide ID cannot be fetched and is skipped with a warning; every
/// returned entry has `bioguide_id()` set.
#[must_use]
pub fn current_representatives(legislators: &[Legislator]) -> Vec<&Legislator> {
    legislators
        .iter()
        .filter(|legislator| legislator.is_current_representative())
        .filter(|legislator| {
            let has_id = legislator.bioguide_id().is_some();
            if !has_id {
                tracing::warn!(
                    name = %legislator.display_name(),
                    "representative has no bioguide id; skipping"
                );
            }
            has_id
        })
        .collect()
}
