use secrecy::ExposeSecret;
use serial_test::serial;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use user_service::config::UserConfig;

const VARS: [&str; 5] = [
    "ENVIRONMENT",
    "USERS_TABLE_NAME",
    "MONGODB_URI",
    "MONGODB_DATABASE",
    "USER_SERVICE_HOST",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn missing_table_name_is_a_config_error() {
    clear_env();

    let err = UserConfig::from_env(CoreConfig::default()).unwrap_err();

    assert!(matches!(err, AppError::ConfigError(_)));
    assert!(err.to_string().contains("USERS_TABLE_NAME"));
}

#[test]
#[serial]
fn empty_table_name_is_a_config_error() {
    clear_env();
    std::env::set_var("USERS_TABLE_NAME", "");

    let err = UserConfig::from_env(CoreConfig::default()).unwrap_err();

    assert!(matches!(err, AppError::ConfigError(_)));
    clear_env();
}

#[test]
#[serial]
fn defaults_apply_in_dev() {
    clear_env();
    std::env::set_var("USERS_TABLE_NAME", "users");

    let config = UserConfig::from_env(CoreConfig::default()).unwrap();

    assert_eq!(config.users_table_name, "users");
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.mongodb.uri.expose_secret(), "mongodb://localhost:27017");
    assert_eq!(config.mongodb.database, "user_db");
    assert_eq!(config.common.port, 8080);
    clear_env();
}

#[test]
#[serial]
fn production_requires_explicit_mongodb_uri() {
    clear_env();
    std::env::set_var("ENVIRONMENT", "prod");
    std::env::set_var("USERS_TABLE_NAME", "users");
    std::env::set_var("USER_SERVICE_HOST", "0.0.0.0");

    let err = UserConfig::from_env(CoreConfig::default()).unwrap_err();
    assert!(err.to_string().contains("MONGODB_URI"));

    std::env::set_var("MONGODB_URI", "mongodb://db.internal:27017");
    let config = UserConfig::from_env(CoreConfig::default()).unwrap();
    assert_eq!(
        config.mongodb.uri.expose_secret(),
        "mongodb://db.internal:27017"
    );
    clear_env();
}
