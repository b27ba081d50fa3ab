//! End-to-end command tests driven through argument parsing.

use super::helpers::{CatalogFiles, match_keys, run_json};
use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn filters_lists_every_purpose_and_context() {
    let listing = run_json(&["filters"]).expect("filters should run");
    let purposes = listing["purposes"].as_array().expect("purposes");
    let contexts = listing["contexts"].as_array().expect("contexts");
    assert_eq!(purposes.len(), 12);
    assert_eq!(contexts.len(), 6);
    assert_eq!(purposes.first().map(|p| &p["key"]), Some(&json!("grain-boundaries")));
    assert!(
        contexts
            .iter()
            .any(|c| c["key"] == "failure-analysis" && c["label"] == "Failure Analysis")
    );
}

#[rstest]
#[case::by_name("stainless", &["ss-304"])]
#[case::by_composition("cr", &["aisi-4140", "ss-304"])]
#[case::blank_lists_featured_first("", &["aisi-4140", "al-6061", "ss-304"])]
fn materials_searches_published_entries(#[case] query: &str, #[case] expected: &[&str]) {
    let files = CatalogFiles::new();
    let listing = run_json(&[
        "materials",
        "--materials",
        files.materials.as_str(),
        "--query",
        query,
    ])
    .expect("materials should run");
    let ids: Vec<_> = listing
        .as_array()
        .expect("material list")
        .iter()
        .filter_map(|entry| entry["id"].as_str())
        .collect();
    assert_eq!(ids, expected);
}

#[rstest]
fn materials_reports_derived_category_and_honours_limit() {
    let files = CatalogFiles::new();
    let listing = run_json(&[
        "materials",
        "--materials",
        files.materials.as_str(),
        "--limit",
        "1",
    ])
    .expect("materials should run");
    let entries = listing.as_array().expect("material list");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries.first().map(|m| &m["category"]), Some(&json!("carbon-steel")));
}

#[rstest]
fn recommend_ranks_steel_reagents() {
    let files = CatalogFiles::new();
    let response = run_json(&[
        "recommend",
        "--materials",
        files.materials.as_str(),
        "--etchants",
        files.etchants.as_str(),
        "--material",
        "AISI 4140",
        "--purpose",
        "martensite",
    ])
    .expect("recommend should run");

    assert_eq!(response["material"]["id"], "aisi-4140");
    assert_eq!(response["rule_catalog"], "v1");
    let keys = match_keys(&response);
    assert!(keys.contains(&"nital-2".to_owned()));
    assert!(keys.contains(&"picral-4".to_owned()));
    let scores: Vec<_> = response["matches"]
        .as_array()
        .expect("matches")
        .iter()
        .filter_map(|entry| entry["score"].as_u64())
        .collect();
    assert!(scores.windows(2).all(|pair| matches!(pair, [a, b] if a >= b)));
}

#[rstest]
fn recommend_excludes_incompatible_reagents() {
    let files = CatalogFiles::new();
    let response = run_json(&[
        "recommend",
        "--materials",
        files.materials.as_str(),
        "--etchants",
        files.etchants.as_str(),
        "--material",
        "al-6061",
    ])
    .expect("recommend should run");
    let keys = match_keys(&response);
    assert_eq!(keys.first().map(String::as_str), Some("kellers"));
    assert!(!keys.contains(&"caustic".to_owned()));
}

#[rstest]
fn recommend_numbers_a_failure_analysis_sequence() {
    let files = CatalogFiles::new();
    let response = run_json(&[
        "recommend",
        "--materials",
        files.materials.as_str(),
        "--etchants",
        files.etchants.as_str(),
        "--material",
        "aisi-4140",
        "--context",
        "failure-analysis",
    ])
    .expect("recommend should run");
    let sequence: Vec<_> = response["matches"]
        .as_array()
        .expect("matches")
        .iter()
        .map(|entry| entry["recommended_sequence"].as_u64())
        .collect();
    assert!(sequence.len() > 1, "steel should match several reagents");
    assert_eq!(sequence.first(), Some(&Some(1)));
    assert_eq!(sequence.get(1), Some(&Some(2)));
}

#[rstest]
fn recommend_reports_weight_overrides() {
    let files = CatalogFiles::new();
    let weights = files.write_weights(r#"{ "featured.featured": 0 }"#);
    let response = run_json(&[
        "recommend",
        "--materials",
        files.materials.as_str(),
        "--etchants",
        files.etchants.as_str(),
        "--material",
        "aisi-4140",
        "--weights",
        weights.as_str(),
    ])
    .expect("recommend should run");
    assert_eq!(response["rule_catalog"], "v1+custom");
}

#[rstest]
#[case::unknown("unobtainium")]
#[case::unpublished("draft")]
fn recommend_rejects_unknown_materials(#[case] key: &str) {
    let files = CatalogFiles::new();
    let err = run_json(&[
        "recommend",
        "--materials",
        files.materials.as_str(),
        "--etchants",
        files.etchants.as_str(),
        "--material",
        key,
    ])
    .expect_err("material should not resolve");
    match err {
        CliError::UnknownMaterial { key: missing } => assert_eq!(missing, key),
        other => panic!("expected UnknownMaterial, found {other:?}"),
    }
}

#[rstest]
fn unsupported_catalog_format_is_reported() {
    let files = CatalogFiles::new();
    let notes = files.root.join("materials.txt");
    super::helpers::write_utf8(&notes, b"id,name\n");
    let err = run_json(&["materials", "--materials", notes.as_str()])
        .expect_err("txt is not a catalog format");
    match err {
        CliError::LoadCatalog(etchant_data::CatalogError::UnsupportedFormat { path }) => {
            assert_eq!(path, notes);
        }
        other => panic!("expected UnsupportedFormat, found {other:?}"),
    }
}

#[rstest]
fn unknown_subcommand_is_an_argument_error() {
    match run_json(&["polish"]).expect_err("no such command") {
        CliError::ArgumentParsing(_) => {}
        other => panic!("expected ArgumentParsing, found {other:?}"),
    }
}

#[cfg(feature = "store-sqlite")]
#[rstest]
fn recommend_reads_a_shared_sqlite_database() {
    let files = CatalogFiles::new();
    let db = files.root.join("catalog.sqlite");
    let conn = rusqlite::Connection::open(db.as_std_path()).expect("create database");
    conn.execute_batch(
        r#"
        CREATE TABLE materials (id TEXT, name TEXT, category TEXT, status TEXT);
        INSERT INTO materials VALUES ('al-6061', '6061-T6', 'Aluminum 6061', 'published');
        CREATE TABLE etchants (
            id TEXT, name TEXT, category TEXT, reveals TEXT,
            compatible_materials TEXT, incompatible_materials TEXT, featured INTEGER
        );
        INSERT INTO etchants VALUES
            ('kellers', 'Keller''s Reagent', 'material-specific', 'grain boundaries',
             '["aluminum"]', NULL, 1),
            ('caustic', 'Hot Caustic Macro Etch', 'material-specific', 'grain structure',
             '["aluminum"]', '["aluminum"]', 1);
        "#,
    )
    .expect("seed database");
    drop(conn);

    let response = run_json(&[
        "recommend",
        "--materials",
        db.as_str(),
        "--etchants",
        db.as_str(),
        "--material",
        "6061-t6",
    ])
    .expect("recommend should run");
    assert_eq!(match_keys(&response), ["kellers"]);
}
