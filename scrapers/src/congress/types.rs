//! Data types for the congress-legislators roster.
//!
//! Mirrors the subset of `legislators-current.yaml` the fetchers read. Unknown
//! keys (bio, social, other ids, term dates) are ignored on deserialize.

use serde::{Deserialize, Serialize};

/// One officeholder from the roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Legislator {
    #[serde(default)]
    pub id: LegislatorIds,
    #[serde(default)]
    pub name: LegislatorName,
    /// Terms in chronological order; the last one is the current office.
    #[serde(default)]
    pub terms: Vec<Term>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegislatorIds {
    /// Bioguide ID (e.g., "P000197"); only required for entries that get fetched
    pub bioguide: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegislatorName {
    pub first: Option<String>,
    pub last: Option<String>,
    /// Name as printed on official material (e.g., "Nancy Pelosi")
    pub official_full: Option<String>,
}

/// One contiguous period of office.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Term {
    /// Missing tags read as `Other`; only the last term's tag is ever inspected.
    #[serde(rename = "type", default)]
    pub role: Role,
    /// State abbreviation (e.g., "CA")
    pub state: Option<String>,
    /// House district; `0` for at-large seats, absent for senators
    pub district: Option<i32>,
    pub party: Option<String>,
}

/// Role tag of a term.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Rep,
    Sen,
    #[default]
    #[serde(other)]
    Other,
}

impl Legislator {
    #[must_use]
    pub fn bioguide_id(&self) -> Option<&str> {
        self.id.bioguide.as_deref()
    }

    /// The chronologically last term, if the legislator has any.
    #[must_use]
    pub fn current_term(&self) -> Option<&Term> {
        self.terms.last()
    }

    /// Role of the last term. Earlier terms are never consulted.
    #[must_use]
    pub fn current_role(&self) -> Option<Role> {
        self.current_term().map(|term| term.role)
    }

    #[must_use]
    pub fn is_current_representative(&self) -> bool {
        self.current_role() == Some(Role::Rep)
    }

    /// Official full name, falling back to "first last".
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(full) = &self.name.official_full {
            return full.clone();
        }

        [self.name.first.as_deref(), self.name.last.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
