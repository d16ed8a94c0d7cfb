//! Site profile loading.
//!
//! # Responsibility
//! - Parse the site profile JSON document into a validated [`SiteProfile`].
//!
//! # See also
//! - `catalog::projects` for the project-list counterpart; the two loaders
//!   share their shape but stay separate so a broken profile cannot be
//!   mistaken for a broken catalog at call sites.

use crate::model::site::{SiteProfile, SiteValidationError};
use log::{error, info};
use once_cell::sync::Lazy;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

static BUNDLED: Lazy<SiteProfile> = Lazy::new(|| {
    parse_site_profile(include_str!("defaults/site.json")).expect("bundled site profile is valid")
});

pub type ProfileResult<T> = Result<T, ProfileError>;

#[derive(Debug)]
pub enum ProfileError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Malformed {
        detail: String,
    },
    Invalid(SiteValidationError),
}

impl Display for ProfileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(
                    f,
                    "failed to read site profile `{}`: {source}",
                    path.display()
                )
            }
            Self::Malformed { detail } => write!(f, "site profile is malformed: {detail}"),
            Self::Invalid(source) => write!(f, "site profile is invalid: {source}"),
        }
    }
}

impl Error for ProfileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { .. } => None,
            Self::Invalid(source) => Some(source),
        }
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed {
            detail: value.to_string(),
        }
    }
}

impl From<SiteValidationError> for ProfileError {
    fn from(value: SiteValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Parses and validates a profile from raw JSON text.
pub fn parse_site_profile(raw: &str) -> ProfileResult<SiteProfile> {
    let profile: SiteProfile = serde_json::from_str(raw)?;
    profile.validate()?;
    Ok(profile)
}

/// Loads the profile from a JSON file, logging a `profile_load` event pair.
pub fn load_site_profile(path: impl AsRef<Path>) -> ProfileResult<SiteProfile> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=profile_load module=catalog status=start source=file");

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) => {
            error!(
                "event=profile_load module=catalog status=error duration_ms={} error_code=profile_read_failed error={}",
                started_at.elapsed().as_millis(),
                source
            );
            return Err(ProfileError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match parse_site_profile(&raw) {
        Ok(profile) => {
            info!(
                "event=profile_load module=catalog status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(profile)
        }
        Err(err) => {
            error!(
                "event=profile_load module=catalog status=error duration_ms={} error_code=profile_parse_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// The profile compiled into the binary.
pub fn bundled_site_profile() -> &'static SiteProfile {
    &BUNDLED
}

#[cfg(test)]
mod tests {
    use super::{bundled_site_profile, parse_site_profile, ProfileError};

    #[test]
    fn bundled_profile_parses_and_validates() {
        let profile = bundled_site_profile();
        assert!(profile.validate().is_ok());
        assert!(!profile.hero.links.is_empty());
    }

    #[test]
    fn malformed_text_is_reported_as_malformed() {
        let err = parse_site_profile("{ not json").unwrap_err();
        assert!(matches!(err, ProfileError::Malformed { .. }));
    }
}
