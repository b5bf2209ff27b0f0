#[cfg(test)]
mod tests {
    use punchclock::libs::config::{ApiConfig, Config, ReportConfig, API_URL_ENV, COMPANY_ID_ENV};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    fn api(url: &str, company: &str) -> ApiConfig {
        ApiConfig {
            api_url: url.to_string(),
            company_id: company.to_string(),
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_save_and_read(_ctx: &mut ConfigTestContext) {
        assert_eq!(Config::read().unwrap(), Config::default());

        let config = Config {
            api: Some(api("https://api.example.com/prod", "42")),
            report: Some(ReportConfig {
                device_id: Some("DEV-1".to_string()),
            }),
        };
        config.save().unwrap();

        let stored = Config::read().unwrap();
        assert_eq!(stored, config);
        assert_eq!(stored.device_id(), Some("DEV-1"));
    }

    #[test]
    fn test_env_overrides() {
        std::env::remove_var(API_URL_ENV);
        std::env::remove_var(COMPANY_ID_ENV);
        assert_eq!(Config::default().with_env_overrides().api, None);

        std::env::set_var(COMPANY_ID_ENV, "99");
        assert_eq!(Config::default().with_env_overrides().api, None);
        let stored = Config {
            api: Some(api("https://stored", "1")),
            report: None,
        };
        assert_eq!(stored.with_env_overrides().api, Some(api("https://stored", "99")));

        std::env::set_var(API_URL_ENV, "https://env");
        assert_eq!(Config::default().with_env_overrides().api, Some(api("https://env", "99")));

        std::env::remove_var(API_URL_ENV);
        std::env::remove_var(COMPANY_ID_ENV);
    }

    #[test]
    fn test_device_id_ignores_empty_value() {
        let config = Config {
            api: None,
            report: Some(ReportConfig {
                device_id: Some(String::new()),
            }),
        };
        assert_eq!(config.device_id(), None);
        assert_eq!(Config::default().device_id(), None);
    }
}
