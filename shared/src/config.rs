use std::env;

use crate::error::ConfigError;

const DEFAULT_TABLE_NAME: &str = "users";

/// Where user records live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    DynamoDb,
    /// Process-local table, for running the handler without AWS
    Memory,
}

/// Settings read from the Lambda environment at cold start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
    pub backend: Backend,
}

impl Config {
    /// TABLE_NAME (default `users`) and USER_STORE (`dynamodb` | `memory`, default `dynamodb`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup("TABLE_NAME")
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());

        let backend = match lookup("USER_STORE").as_deref() {
            None | Some("") | Some("dynamodb") => Backend::DynamoDb,
            Some("memory") => Backend::Memory,
            Some(other) => return Err(ConfigError::UnknownBackend(other.to_string())),
        };

        Ok(Config { table_name, backend })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.table_name, "users");
        assert_eq!(config.backend, Backend::DynamoDb);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[("TABLE_NAME", "people"), ("USER_STORE", "memory")]).unwrap();
        assert_eq!(config.table_name, "people");
        assert_eq!(config.backend, Backend::Memory);
    }

    #[test]
    fn test_unknown_backend() {
        assert_eq!(
            config_from(&[("USER_STORE", "postgres")]),
            Err(ConfigError::UnknownBackend("postgres".to_string()))
        );
    }
}
