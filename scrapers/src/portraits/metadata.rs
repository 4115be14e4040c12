//! Per-representative metadata written alongside the portraits.

use serde::{Deserialize, Serialize};

use super::store::image_file_name;
use crate::congress::Legislator;

/// One row of `representatives_metadata.json`.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetadataRecord {
    pub bioguide_id: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub state: Option<String>,
    pub district: Option<i32>,
    pub party: Option<String>,
    pub image_file: String,
}

impl MetadataRecord {
    /// Build the record from the roster entry and its last term.
    ///
    /// `image_file` is the expected file name whether or not the download
    /// succeeded.
    #[must_use]
    pub fn from_legislator(legislator: &Legislator) -> Self {
        let term = legislator.current_term();
        let bioguide_id = legislator.bioguide_id().unwrap_or_default().to_string();

        Self {
            name: legislator.display_name(),
            first_name: legislator.name.first.clone().unwrap_or_default(),
            last_name: legislator.name.last.clone().unwrap_or_default(),
            state: term.and_then(|t| t.state.clone()),
            district: term.and_then(|t| t.district),
            party: term.and_then(|t| t.party.clone()),
            image_file: image_file_name(&bioguide_id),
            bioguide_id,
        }
    }
}

/// One record per legislator, in the given order.
#[must_use]
pub fn collect_metadata(legislators: &[&Legislator]) -> Vec<MetadataRecord> {
    legislators
        .iter()
        .map(|legislator| MetadataRecord::from_legislator(legislator))
        .collect()
}
