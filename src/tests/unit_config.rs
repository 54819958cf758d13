use crate::config::{default_database_url, PersonsConfig};
use std::collections::HashMap;
use std::path::PathBuf;

fn config_from(vars: &[(&str, &str)]) -> PersonsConfig {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    PersonsConfig::from_vars(|key| map.get(key).cloned())
}

#[test]
fn test_defaults_without_environment() {
    let config = config_from(&[]);

    assert_eq!(config.database_url, "sqlite://persons.db");
    assert_eq!(config.max_connections, 5);
    assert_eq!(config.bind_addr, "0.0.0.0:3000");
    assert_eq!(config.static_dir, PathBuf::from("./static"));
    assert_eq!(config.supabase_url, None);
    assert_eq!(config.supabase_key, None);
    assert_eq!(config.supabase_table, "Products");
}

// the platform flag moves the database somewhere writable
#[test]
fn test_vercel_flag_selects_tmp_database() {
    let config = config_from(&[("VERCEL", "1")]);
    assert_eq!(config.database_url, "sqlite:///tmp/persons.db");
    assert_eq!(default_database_url(true), "sqlite:///tmp/persons.db");
    assert_eq!(default_database_url(false), "sqlite://persons.db");
}

#[test]
fn test_explicit_database_url_wins_over_vercel() {
    let config = config_from(&[("VERCEL", "1"), ("DATABASE_URL", "sqlite::memory:")]);
    assert_eq!(config.database_url, "sqlite::memory:");
}

#[test]
fn test_unparsable_max_connections_falls_back() {
    let config = config_from(&[("MAX_CONNECTIONS", "lots")]);
    assert_eq!(config.max_connections, 5);

    let config = config_from(&[("MAX_CONNECTIONS", "12")]);
    assert_eq!(config.max_connections, 12);
}

#[test]
fn test_blank_credentials_are_unset() {
    let config = config_from(&[("SUPABASE_URL", ""), ("SUPABASE_KEY", "secret")]);
    assert_eq!(config.supabase_url, None);
    assert_eq!(config.supabase_key, Some("secret".to_string()));
}
