//! Portrait hosting origins and their URL layouts.

use reqwest::Url;

/// Where portraits are fetched from.
///
/// The two origins lay files out differently, so URLs must be built through
/// [`PortraitSource::portrait_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortraitSource {
    /// Congressional Bioguide: `<base>/<first char of id>/<id>.jpg`
    Bioguide { base_url: String },
    /// `unitedstates/images` mirror: `<base>/<id>.jpg`
    UnitedStates { base_url: String },
}

impl PortraitSource {
    pub fn bioguide(base_url: impl Into<String>) -> Self {
        Self::Bioguide {
            base_url: base_url.into(),
        }
    }

    pub fn united_states(base_url: impl Into<String>) -> Self {
        Self::UnitedStates {
            base_url: base_url.into(),
        }
    }

    /// Build the image URL for a Bioguide ID.
    #[must_use]
    pub fn portrait_url(&self, bioguide_id: &str) -> String {
        match self {
            Self::Bioguide { base_url } => {
                let bucket: String = bioguide_id.chars().take(1).collect();
                format!(
                    "{}/{bucket}/{bioguide_id}.jpg",
                    base_url.trim_end_matches('/')
                )
            }
            Self::UnitedStates { base_url } => {
                format!("{}/{bioguide_id}.jpg", base_url.trim_end_matches('/'))
            }
        }
    }

    fn base_url(&self) -> &str {
        match self {
            Self::Bioguide { base_url } | Self::UnitedStates { base_url } => base_url,
        }
    }

    /// Host name for console messages, e.g. "bioguide.congress.gov".
    ///
    /// Falls back to the raw base URL when it does not parse.
    #[must_use]
    pub fn host(&self) -> String {
        let base_url = self.base_url();
        Url::parse(base_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_owned))
            .unwrap_or_else(|| base_url.to_string())
    }
}
