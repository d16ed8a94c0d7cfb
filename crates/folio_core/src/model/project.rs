//! Project catalog domain model.
//!
//! # Responsibility
//! - Define the canonical project record rendered by the Projects section.
//! - Model the fixed category set as a closed enum while keeping the record
//!   permissive about labels outside that set.
//!
//! # Invariants
//! - `title` and `category` are non-empty after trimming.
//! - `stack` and `highlights` order is display order and is never resorted.
//! - An unlisted category label loads and renders fine but can never match
//!   an active category filter.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Display label for the "Web / AI" category.
pub const CATEGORY_WEB_AI: &str = "Web / AI";
/// Display label for the "Data / Dashboard" category.
pub const CATEGORY_DATA_DASHBOARD: &str = "Data / Dashboard";
/// Display label for the "ML / Finance" category.
pub const CATEGORY_ML_FINANCE: &str = "ML / Finance";
/// Display label for the "IoT / Power Electronics" category.
pub const CATEGORY_IOT_POWER: &str = "IoT / Power Electronics";
/// Display label for the "EV Systems" category.
pub const CATEGORY_EV_SYSTEMS: &str = "EV Systems";

/// Closed set of filterable project categories.
///
/// Filter selections are always drawn from this enum, so predicate matching
/// stays exhaustive; free-form labels live in [`CategoryLabel`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    WebAi,
    DataDashboard,
    MlFinance,
    IotPowerElectronics,
    EvSystems,
}

impl Category {
    /// Every category in stable display order.
    pub const ALL: [Category; 5] = [
        Category::WebAi,
        Category::DataDashboard,
        Category::MlFinance,
        Category::IotPowerElectronics,
        Category::EvSystems,
    ];

    /// Stable display label used in catalog sources and filter controls.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WebAi => CATEGORY_WEB_AI,
            Self::DataDashboard => CATEGORY_DATA_DASHBOARD,
            Self::MlFinance => CATEGORY_ML_FINANCE,
            Self::IotPowerElectronics => CATEGORY_IOT_POWER,
            Self::EvSystems => CATEGORY_EV_SYSTEMS,
        }
    }

    /// Parses an exact display label into a category.
    ///
    /// Returns `None` for anything outside the fixed set; callers decide
    /// whether that is an unlisted label (catalog side) or a usage error
    /// (filter-selection side).
    pub fn parse(label: &str) -> Option<Category> {
        match label {
            CATEGORY_WEB_AI => Some(Self::WebAi),
            CATEGORY_DATA_DASHBOARD => Some(Self::DataDashboard),
            CATEGORY_ML_FINANCE => Some(Self::MlFinance),
            CATEGORY_IOT_POWER => Some(Self::IotPowerElectronics),
            CATEGORY_EV_SYSTEMS => Some(Self::EvSystems),
            _ => None,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category label exactly as written in the catalog source.
///
/// Labels matching the fixed set resolve to a [`Category`]; anything else is
/// kept verbatim for display. Resolution happens in the constructor, so a
/// label can never claim to be unlisted while spelling a known category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CategoryLabel {
    raw: String,
    known: Option<Category>,
}

impl CategoryLabel {
    /// Creates a label, resolving it against the fixed category set.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let known = Category::parse(&raw);
        Self { raw, known }
    }

    /// Label text as written in the source.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The fixed-set category this label resolves to, if any.
    pub fn category(&self) -> Option<Category> {
        self.known
    }

    /// Whether the label belongs to the fixed category set.
    pub fn is_listed(&self) -> bool {
        self.known.is_some()
    }
}

impl From<String> for CategoryLabel {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for CategoryLabel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Category> for CategoryLabel {
    fn from(value: Category) -> Self {
        Self::new(value.as_str())
    }
}

impl From<CategoryLabel> for String {
    fn from(value: CategoryLabel) -> Self {
        value.raw
    }
}

impl Display for CategoryLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Display-only year label.
///
/// Catalog sources write years as strings (`"2023–2024"`) or bare numbers
/// (`2024`); both deserialize to the same text form. No ordering semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearLabel(String);

impl YearLabel {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for YearLabel {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for YearLabel {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for YearLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for YearLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for YearLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct YearVisitor;

        impl Visitor<'_> for YearVisitor {
            type Value = YearLabel;

            fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str("a year label string or integer")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(YearLabel(value.to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(YearLabel(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(YearLabel(value.to_string()))
            }
        }

        deserializer.deserialize_any(YearVisitor)
    }
}

/// One project entry as loaded from the catalog source.
///
/// Records are immutable after load; filtering and rendering only ever
/// derive new views from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Card heading. Expected unique across the catalog, not enforced.
    pub title: String,
    /// Category label; see [`CategoryLabel`] for fixed-set resolution.
    pub category: CategoryLabel,
    /// Display-only year text. Absent in the source means empty.
    #[serde(default)]
    pub year: YearLabel,
    /// Technology tags rendered as badges, left to right.
    #[serde(default)]
    pub stack: Vec<String>,
    /// Bullet lines rendered in source order.
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Optional source-repository URL.
    pub github: Option<String>,
    /// Optional live-deployment URL.
    pub link: Option<String>,
}

impl ProjectRecord {
    /// Creates a record with the required fields and everything else empty.
    pub fn new(title: impl Into<String>, category: impl Into<CategoryLabel>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            year: YearLabel::default(),
            stack: Vec::new(),
            highlights: Vec::new(),
            github: None,
            link: None,
        }
    }

    /// Checks the presence invariants for a loaded record.
    ///
    /// # Errors
    /// - [`ProjectValidationError::EmptyTitle`] when `title` trims to empty.
    /// - [`ProjectValidationError::EmptyCategory`] when the category label
    ///   trims to empty (an *unlisted* non-empty label is still valid).
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle);
        }
        if self.category.as_str().trim().is_empty() {
            return Err(ProjectValidationError::EmptyCategory {
                title: self.title.clone(),
            });
        }
        Ok(())
    }
}

/// Record-level invariant violations surfaced by the catalog loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyTitle,
    EmptyCategory { title: String },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "project title must not be empty"),
            Self::EmptyCategory { title } => {
                write!(f, "project `{title}` has an empty category label")
            }
        }
    }
}

impl Error for ProjectValidationError {}

#[cfg(test)]
mod tests {
    use super::{Category, CategoryLabel, ProjectRecord, ProjectValidationError, YearLabel};

    #[test]
    fn category_labels_round_trip_through_parse() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn unlisted_label_keeps_raw_text_and_no_category() {
        let label = CategoryLabel::new("Quantum / Art");
        assert_eq!(label.as_str(), "Quantum / Art");
        assert_eq!(label.category(), None);
        assert!(!label.is_listed());
    }

    #[test]
    fn known_label_resolves_even_when_built_from_text() {
        let label = CategoryLabel::new("EV Systems");
        assert_eq!(label.category(), Some(Category::EvSystems));
        assert_eq!(label, CategoryLabel::from(Category::EvSystems));
    }

    #[test]
    fn year_label_accepts_string_and_number_forms() {
        let from_text: YearLabel = serde_json::from_str("\"2023–2024\"").unwrap();
        assert_eq!(from_text.as_str(), "2023–2024");

        let from_number: YearLabel = serde_json::from_str("2024").unwrap();
        assert_eq!(from_number.as_str(), "2024");
    }

    #[test]
    fn record_serialization_uses_plain_category_strings() {
        let mut record = ProjectRecord::new("EV Dashboard", Category::EvSystems);
        record.year = YearLabel::from("2024");
        record.stack = vec!["React".to_string(), "MQTT".to_string()];

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["title"], "EV Dashboard");
        assert_eq!(json["category"], "EV Systems");
        assert_eq!(json["year"], "2024");
        assert_eq!(json["stack"][1], "MQTT");
        assert_eq!(json["github"], serde_json::Value::Null);

        let decoded: ProjectRecord = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn validate_rejects_blank_title() {
        let record = ProjectRecord::new("   ", Category::WebAi);
        assert_eq!(
            record.validate().unwrap_err(),
            ProjectValidationError::EmptyTitle
        );
    }

    #[test]
    fn validate_rejects_blank_category_label() {
        let record = ProjectRecord::new("Edge Probe", " ");
        assert!(matches!(
            record.validate().unwrap_err(),
            ProjectValidationError::EmptyCategory { .. }
        ));
    }

    #[test]
    fn validate_accepts_unlisted_category_label() {
        let record = ProjectRecord::new("Edge Probe", "Robotics / Edge");
        assert!(record.validate().is_ok());
    }
}
