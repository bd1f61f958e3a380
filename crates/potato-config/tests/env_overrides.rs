use figment::Jail;
use potato_config::{ClassifierKind, PotatoConfig};

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("POTATO_LLM__BASE_URL", "http://10.0.0.5:11434");
        jail.set_env("POTATO_LLM__TIMEOUT_SECS", "15");
        jail.set_env("POTATO_DATABASE__PATH", "/tmp/qa.db");
        jail.set_env("POTATO_ASK__CLASSIFIER", "keywords");

        let config = PotatoConfig::load().expect("config loads");
        assert_eq!(config.llm.base_url, "http://10.0.0.5:11434");
        assert_eq!(config.llm.timeout_secs, 15);
        assert_eq!(config.database.path, "/tmp/qa.db");
        assert_eq!(config.ask.classifier, ClassifierKind::Keywords);
        Ok(())
    });
}

#[test]
fn single_underscore_does_not_nest() {
    Jail::expect_with(|jail| {
        jail.set_env("POTATO_LLM_MODEL", "ignored");

        let config = PotatoConfig::load().expect("config loads");
        assert_eq!(config.llm.model, "llama3");
        Ok(())
    });
}
