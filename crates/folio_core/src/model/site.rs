//! Site profile content model.
//!
//! # Responsibility
//! - Define the declarative page content: metadata, hero, section bodies,
//!   resume documents, contact links and remote-service endpoints.
//!
//! # Invariants
//! - Profile content is display data only; rendering never mutates it.
//! - Section text may use inline markdown (`**bold**`, `[label](url)`,
//!   backtick code) and `- ` bullet lines; interpretation is the renderer's
//!   concern, not the model's.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Head-of-document metadata, including the SEO tags injected into `<head>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Document `<title>` and hero-adjacent page name.
    pub title: String,
    /// Small glyph prefixed to the document title (e.g. an emoji).
    #[serde(default)]
    pub icon: String,
    /// `<meta name="description">` content.
    #[serde(default)]
    pub description: String,
    /// `<meta name="keywords">` content.
    #[serde(default)]
    pub keywords: String,
    /// `<link rel="canonical">` target, omitted when empty.
    #[serde(default)]
    pub canonical_url: String,
}

/// Labeled hyperlink used by hero actions and the contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    pub label: String,
    pub href: String,
}

/// Hero banner content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroBlock {
    /// Main headline; inline markdown allowed.
    pub headline: String,
    /// Supporting line under the headline.
    #[serde(default)]
    pub tagline: String,
    /// Action buttons rendered in order.
    #[serde(default)]
    pub links: Vec<LinkRef>,
    /// Small one-line announcement under the actions.
    #[serde(default)]
    pub announcement: String,
}

/// About section: markdown body plus a quick-facts bullet list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutBlock {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub facts: Vec<String>,
}

/// One experience entry rendered as a titled block with bullets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// Experience section: entries plus a flat achievements list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceBlock {
    #[serde(default)]
    pub entries: Vec<ExperienceEntry>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// One embeddable resume document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDoc {
    /// Column heading shown above the embedded document.
    pub label: String,
    /// PDF path, resolved relative to the profile file's directory.
    pub path: String,
}

/// Contact section content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBlock {
    #[serde(default)]
    pub lead: String,
    #[serde(default)]
    pub links: Vec<LinkRef>,
}

/// "Now" section: current focus bullets and an update caption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowBlock {
    #[serde(default)]
    pub focus: Vec<String>,
    #[serde(default)]
    pub updated: String,
}

/// Best-effort remote collaborators; either endpoint may be omitted to turn
/// the corresponding page element off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteServices {
    /// Lottie animation JSON URL for the hero block.
    #[serde(default)]
    pub animation_url: Option<String>,
    /// CountAPI-style `hit` endpoint returning `{"value": N}`.
    #[serde(default)]
    pub visits_url: Option<String>,
}

/// Full declarative page content loaded from a profile source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    pub meta: PageMeta,
    pub hero: HeroBlock,
    #[serde(default)]
    pub about: AboutBlock,
    #[serde(default)]
    pub experience: ExperienceBlock,
    #[serde(default)]
    pub resumes: Vec<ResumeDoc>,
    #[serde(default)]
    pub contact: ContactBlock,
    #[serde(default)]
    pub now: NowBlock,
    #[serde(default)]
    pub footer: String,
    #[serde(default)]
    pub services: RemoteServices,
}

impl SiteProfile {
    /// Checks the presence invariants for a loaded profile.
    ///
    /// # Errors
    /// - [`SiteValidationError::EmptyTitle`] when the page title is blank.
    /// - [`SiteValidationError::EmptyHeadline`] when the hero headline is
    ///   blank.
    /// - [`SiteValidationError::BlankLink`] when any hero/contact link has a
    ///   blank label or href.
    /// - [`SiteValidationError::BlankResume`] when a resume entry has a
    ///   blank label or path.
    pub fn validate(&self) -> Result<(), SiteValidationError> {
        if self.meta.title.trim().is_empty() {
            return Err(SiteValidationError::EmptyTitle);
        }
        if self.hero.headline.trim().is_empty() {
            return Err(SiteValidationError::EmptyHeadline);
        }

        for link in self.hero.links.iter().chain(self.contact.links.iter()) {
            if link.label.trim().is_empty() || link.href.trim().is_empty() {
                return Err(SiteValidationError::BlankLink {
                    label: link.label.clone(),
                    href: link.href.clone(),
                });
            }
        }

        for resume in &self.resumes {
            if resume.label.trim().is_empty() || resume.path.trim().is_empty() {
                return Err(SiteValidationError::BlankResume {
                    label: resume.label.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Profile-level invariant violations surfaced by the profile loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteValidationError {
    EmptyTitle,
    EmptyHeadline,
    BlankLink { label: String, href: String },
    BlankResume { label: String },
}

impl Display for SiteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "site profile page title must not be empty"),
            Self::EmptyHeadline => write!(f, "site profile hero headline must not be empty"),
            Self::BlankLink { label, href } => {
                write!(f, "site profile link is blank (label=`{label}` href=`{href}`)")
            }
            Self::BlankResume { label } => {
                write!(f, "site profile resume entry is blank (label=`{label}`)")
            }
        }
    }
}

impl Error for SiteValidationError {}
