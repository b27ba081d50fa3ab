//! Focused unit tests covering command configuration.

use super::helpers::CatalogFiles;
use super::*;
use crate::materials::{MaterialsArgs, MaterialsConfig, config_from_layers_for_test};
use crate::recommend::{RecommendArgs, RecommendConfig, load_rule_catalog};
use camino::Utf8PathBuf;
use etchant_core::{ApplicationContext, Purpose, UnknownFilter};
use etchant_data::DEFAULT_SEARCH_LIMIT;
use etchant_matcher::RuleCatalogError;
use rstest::{fixture, rstest};

#[fixture]
fn complete_args() -> RecommendArgs {
    RecommendArgs {
        materials: Some(Utf8PathBuf::from("materials.json")),
        etchants: Some(Utf8PathBuf::from("etchants.csv")),
        material: Some("aisi-4140".to_owned()),
        ..RecommendArgs::default()
    }
}

#[rstest]
#[case::materials(ARG_MATERIALS, ENV_RECOMMEND_MATERIALS)]
#[case::etchants(ARG_ETCHANTS, ENV_RECOMMEND_ETCHANTS)]
#[case::material(ARG_MATERIAL, ENV_RECOMMEND_MATERIAL)]
fn converting_recommend_without_required_fields_errors(
    complete_args: RecommendArgs,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let mut args = complete_args;
    match field {
        ARG_MATERIALS => args.materials = None,
        ARG_ETCHANTS => args.etchants = None,
        _ => args.material = None,
    }
    let err = RecommendConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn recommend_filters_are_parsed(complete_args: RecommendArgs) {
    let args = RecommendArgs {
        purpose: Some("Grain Boundaries".to_owned()),
        context: Some("failure_analysis".to_owned()),
        ..complete_args
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(config.purpose, Some(Purpose::GrainBoundaries));
    assert_eq!(config.context, Some(ApplicationContext::FailureAnalysis));
}

#[rstest]
fn unknown_purpose_is_rejected(complete_args: RecommendArgs) {
    let args = RecommendArgs {
        purpose: Some("sparkle".to_owned()),
        ..complete_args
    };
    let err = RecommendConfig::try_from(args).expect_err("unknown purpose should error");
    match err {
        CliError::InvalidFilter(UnknownFilter { kind, value }) => {
            assert_eq!(kind, "purpose");
            assert_eq!(value, "sparkle");
        }
        other => panic!("expected InvalidFilter, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_catalogs() {
    let files = CatalogFiles::new();
    let config = RecommendConfig {
        materials: files.materials.clone(),
        etchants: files.root.join("absent.csv"),
        material: "aisi-4140".to_owned(),
        purpose: None,
        context: None,
        weights: None,
    };
    match config.validate_sources().expect_err("missing etchants") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_ETCHANTS),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let files = CatalogFiles::new();
    let config = RecommendConfig {
        materials: files.root.clone(),
        etchants: files.etchants.clone(),
        material: "aisi-4140".to_owned(),
        purpose: None,
        context: None,
        weights: None,
    };
    match config.validate_sources().expect_err("directory is not a file") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_MATERIALS),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn weights_file_customises_the_rule_catalog() {
    let files = CatalogFiles::new();
    let path = files.write_weights(r#"{ "featured.featured": 35 }"#);
    let rules = load_rule_catalog(Some(path.as_path())).expect("weights should apply");
    assert_eq!(rules.weight("featured.featured"), Some(35));
    assert_eq!(rules.version().to_string(), "v1+custom");
}

#[rstest]
fn absent_weights_keep_the_standard_catalog() {
    let rules = load_rule_catalog(None).expect("standard catalog");
    assert_eq!(rules.version().to_string(), "v1");
}

#[rstest]
#[case::unknown_key(r#"{ "featured.sparkle": 5 }"#)]
#[case::malformed_key(r#"{ "featured": 5 }"#)]
fn invalid_weight_keys_are_rejected(#[case] contents: &str) {
    let files = CatalogFiles::new();
    let path = files.write_weights(contents);
    match load_rule_catalog(Some(path.as_path())).expect_err("bad key") {
        CliError::InvalidWeights(
            RuleCatalogError::UnknownWeight { .. } | RuleCatalogError::MalformedKey { .. },
        ) => {}
        other => panic!("expected InvalidWeights, found {other:?}"),
    }
}

#[rstest]
#[case::not_an_object("[1, 2]")]
#[case::not_an_integer(r#"{ "featured.featured": "high" }"#)]
fn weights_must_be_an_object_of_integers(#[case] contents: &str) {
    let files = CatalogFiles::new();
    let path = files.write_weights(contents);
    match load_rule_catalog(Some(path.as_path())).expect_err("bad JSON shape") {
        CliError::ParseWeights { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseWeights, found {other:?}"),
    }
}

#[rstest]
fn materials_config_defaults_query_and_limit() {
    let args = MaterialsArgs {
        materials: Some(Utf8PathBuf::from("materials.csv")),
        ..MaterialsArgs::default()
    };
    let config = MaterialsConfig::try_from(args).expect("config should build");
    assert_eq!(config.query, "");
    assert_eq!(config.limit, DEFAULT_SEARCH_LIMIT);
}

#[rstest]
fn materials_config_requires_a_catalog() {
    match MaterialsConfig::try_from(MaterialsArgs::default()).expect_err("missing catalog") {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_MATERIALS);
            assert_eq!(env, ENV_MATERIALS_MATERIALS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "limit": "many" }));

    match config_from_layers_for_test(composer.layers()).expect_err("invalid layer") {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honour_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({ "materials": "from-file.csv", "query": "steel", "limit": 5 }),
        None,
    );
    composer.push_environment(json!({ "materials": "from-env.json", "limit": 7 }));
    composer.push_cli(json!({ "limit": 3 }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.materials, Utf8PathBuf::from("from-env.json"));
    assert_eq!(config.query, "steel");
    assert_eq!(config.limit, 3);
}
