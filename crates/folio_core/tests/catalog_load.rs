use folio_core::{
    load_site_profile, parse_site_profile, Catalog, CatalogError, Category, ProfileError,
};

const SMALL_CATALOG: &str = r#"[
  {"title": "Gamma", "category": "Web / AI", "stack": ["Python"]},
  {"title": "Alpha", "category": "EV Systems", "year": "2024", "stack": ["React", "MQTT"]},
  {"title": "Beta", "category": "ML / Finance"}
]"#;

const SMALL_PROFILE: &str = r#"{
  "meta": {"title": "Test Page"},
  "hero": {"headline": "Hello."}
}"#;

fn titles(catalog: &Catalog) -> Vec<&str> {
    catalog
        .projects()
        .iter()
        .map(|record| record.title.as_str())
        .collect()
}

#[test]
fn load_preserves_source_order() {
    let catalog = Catalog::from_json_str(SMALL_CATALOG).unwrap();
    assert_eq!(titles(&catalog), vec!["Gamma", "Alpha", "Beta"]);
}

#[test]
fn absent_optional_fields_default_to_empty() {
    let catalog = Catalog::from_json_str(SMALL_CATALOG).unwrap();
    let beta = &catalog.projects()[2];
    assert!(beta.year.is_empty());
    assert!(beta.stack.is_empty());
    assert!(beta.highlights.is_empty());
    assert_eq!(beta.github, None);
    assert_eq!(beta.link, None);
}

#[test]
fn numeric_year_loads_as_display_text() {
    let catalog =
        Catalog::from_json_str(r#"[{"title": "Bench", "category": "EV Systems", "year": 2022}]"#)
            .unwrap();
    assert_eq!(catalog.projects()[0].year.as_str(), "2022");
}

#[test]
fn missing_category_fails_the_whole_load() {
    let raw = r#"[
      {"title": "Fine", "category": "Web / AI"},
      {"title": "Broken"}
    ]"#;
    let err = Catalog::from_json_str(raw).unwrap_err();
    assert!(matches!(err, CatalogError::Malformed { .. }));
}

#[test]
fn blank_title_reports_the_entry_index() {
    let raw = r#"[
      {"title": "Fine", "category": "Web / AI"},
      {"title": "   ", "category": "EV Systems"}
    ]"#;
    match Catalog::from_json_str(raw).unwrap_err() {
        CatalogError::InvalidRecord { index, .. } => assert_eq!(index, 1),
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn top_level_object_is_malformed() {
    let err = Catalog::from_json_str(r#"{"title": "Not a list"}"#).unwrap_err();
    assert!(matches!(err, CatalogError::Malformed { .. }));
}

#[test]
fn unlisted_category_label_still_loads() {
    let catalog =
        Catalog::from_json_str(r#"[{"title": "Edge Probe", "category": "Robotics / Edge"}]"#)
            .unwrap();
    let record = &catalog.projects()[0];
    assert_eq!(record.category.as_str(), "Robotics / Edge");
    assert_eq!(record.category.category(), None);
}

#[test]
fn unreadable_file_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = Catalog::load_from_path(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn load_from_path_matches_in_memory_parse() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    std::fs::write(&path, SMALL_CATALOG).unwrap();

    let from_file = Catalog::load_from_path(&path).unwrap();
    let from_text = Catalog::from_json_str(SMALL_CATALOG).unwrap();
    assert_eq!(from_file, from_text);
}

#[test]
fn profile_loads_from_disk_like_in_memory_parse() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.json");
    std::fs::write(&path, SMALL_PROFILE).unwrap();

    let from_file = load_site_profile(&path).unwrap();
    let from_text = parse_site_profile(SMALL_PROFILE).unwrap();
    assert_eq!(from_file, from_text);
    assert_eq!(from_file.meta.title, "Test Page");
}

#[test]
fn unreadable_profile_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-site.json");
    let err = load_site_profile(&path).unwrap_err();
    assert!(matches!(err, ProfileError::Io { .. }));
    assert!(err.to_string().contains("missing-site.json"));
}

#[test]
fn bundled_catalog_covers_every_listed_category() {
    let catalog = Catalog::bundled();
    for category in Category::ALL {
        assert!(
            catalog
                .projects()
                .iter()
                .any(|record| record.category.category() == Some(category)),
            "bundled catalog lacks a {category} project"
        );
    }
}
