use super::*;
use std::io::Write;

#[test]
fn defaults_match_the_cli_defaults() {
    let config = AppConfig::load(None).expect("defaults");
    assert_eq!(config.run, RunParams::default());
    assert_eq!(config.run.rounds, 1);
    assert_eq!(config.run.population, 2);
    assert_eq!(config.temperatures.critique, 0.2);
    assert_eq!(config.web_search.k, 5);
}

#[test]
fn partial_file_overrides_only_named_keys() {
    let config = AppConfig::parse(
        r#"
        [run]
        rounds = 3
        seed = 42

        [temperatures]
        debate = 0.4

        [model]
        base_url = "http://localhost:8000"
        "#,
    )
    .expect("parse");

    assert_eq!(config.run.rounds, 3);
    assert_eq!(config.run.seed, 42);
    assert_eq!(config.run.keep_top, 2);
    assert_eq!(config.temperatures.debate, 0.4);
    assert_eq!(config.temperatures.generation, 0.7);
    assert_eq!(config.model.base_url, "http://localhost:8000");
    assert_eq!(config.model.model, "gpt-4o-mini");
}

#[test]
fn load_reads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[run]\npopulation = 8").expect("write");
    let config = AppConfig::load(Some(file.path())).expect("load");
    assert_eq!(config.run.population, 8);
}

#[test]
fn malformed_file_is_a_config_error() {
    assert!(matches!(
        AppConfig::parse("[run]\nrounds = \"many\""),
        Err(RunError::Config(_))
    ));
}

#[test]
fn web_search_follows_the_run_flag() {
    let mut config = AppConfig::default();
    let agents = config.agents_config_with_key("k".into());
    assert_eq!(agents.web_search, Some(WebSearchConfig::default()));
    assert_eq!(agents.model.timeout, Duration::from_secs(60));

    config.run.web_search = false;
    assert_eq!(config.agents_config_with_key("k".into()).web_search, None);
}

#[test]
fn missing_api_key_variable_is_reported() {
    let mut config = AppConfig::default();
    config.model.api_key_env = "COSCIENTIST_TEST_KEY_THAT_IS_NEVER_SET".into();
    assert!(matches!(config.agents_config(), Err(RunError::Config(_))));
}
