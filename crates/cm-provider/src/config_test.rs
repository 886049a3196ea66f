use super::*;
use std::io::Write;

#[test]
fn test_minimal_config_applies_defaults() {
    let config = ConnectionConfig::from_yaml_str("server: cm01.contoso.com").unwrap();
    assert_eq!(config.server, "cm01.contoso.com");
    assert_eq!(config.namespace, "root\\sms");
    assert!(config.site_code.is_none());
    assert!(config.user_name.is_none());
    assert!(config.password.is_none());
}

#[test]
fn test_full_config() {
    let yaml = r"
server: cm01.contoso.com
site_code: PS1
namespace: root\sms\site_PS1
user_name: CONTOSO\svc-cm
password: hunter2
";
    let config = ConnectionConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.site_code.as_deref(), Some("PS1"));
    assert_eq!(config.namespace, "root\\sms\\site_PS1");
    assert_eq!(config.user_name.as_deref(), Some("CONTOSO\\svc-cm"));
}

#[test]
fn test_unknown_fields_are_rejected() {
    let err = ConnectionConfig::from_yaml_str("server: cm01\nretries: 3").unwrap_err();
    assert!(err.to_string().contains("[P008]"));
}

#[test]
fn test_missing_server_is_rejected() {
    assert!(ConnectionConfig::from_yaml_str("site_code: PS1").is_err());
}

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server: cm01.contoso.com").unwrap();
    writeln!(file, "site_code: PS1").unwrap();

    let config = ConnectionConfig::from_path(file.path()).unwrap();
    assert_eq!(config.site_code.as_deref(), Some("PS1"));
}

#[test]
fn test_from_path_missing_file() {
    let err = ConnectionConfig::from_path(Path::new("/nonexistent/cm.yml")).unwrap_err();
    assert!(matches!(err, ProviderError::ConfigError(_)));
}
