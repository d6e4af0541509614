use std::path::Path;

use anyhow::{Context, Result};
use config::Config;

fn default_listen_addr() -> String {
    "127.0.0.1".to_string()
}

fn default_listen_port() -> u16 {
    8080
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct HttpServerConfig {
    /// Address/interface to listen for TCP connections.
    #[serde(default = "default_listen_addr")]
    pub listen_address: String,

    /// Port to listen for TCP connections.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_addr(),
            listen_port: default_listen_port(),
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Enables debug logging/tracing.
    #[serde(default)]
    pub debug: bool,

    /// HTTP Server configuration
    #[serde(default)]
    pub http_config: HttpServerConfig,
}

/// Parses the configuration of the JustStream server.
/// Uses the given path to read a structured file format (toml, yaml, json, etc).
/// Individual values can be overriden by `JUSTSTREAM_`-prefixed environment variables, with `__`
/// separating nested keys (e.g. `JUSTSTREAM_HTTP_CONFIG__LISTEN_PORT`).
pub fn get_config(path: &Path) -> Result<ServerConfig> {
    let config = Config::builder()
        .add_source(config::File::with_name(
            path.to_str()
                .context("Parsing configuration path as a str")?,
        ))
        .add_source(config::Environment::with_prefix("JUSTSTREAM").separator("__"))
        .build()
        .context("Building the server configuration from file and environment")?;

    config
        .try_deserialize()
        .context("Deserializing the configuration as ServerConfig")
}

#[cfg(test)]
mod test {
    use super::*;

    use googletest::prelude::*;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[googletest::test]
    fn test_full_config() {
        let file = config_file(
            r#"
            debug = true

            [http_config]
            listen_address = "0.0.0.0"
            listen_port = 9000
            "#,
        );

        let config = get_config(file.path()).unwrap();
        expect_that!(
            config,
            eq(&ServerConfig {
                debug: true,
                http_config: HttpServerConfig {
                    listen_address: "0.0.0.0".to_string(),
                    listen_port: 9000,
                },
            })
        );
    }

    #[googletest::test]
    fn test_missing_keys_take_defaults() {
        let file = config_file("[http_config]\nlisten_port = 3000\n");

        let config = get_config(file.path()).unwrap();
        expect_false!(config.debug);
        expect_that!(config.http_config.listen_address, eq("127.0.0.1"));
        expect_that!(config.http_config.listen_port, eq(3000));
    }

    #[googletest::test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = get_config(&dir.path().join("absent.toml"));
        expect_that!(result, err(anything()));
    }

    #[googletest::test]
    fn test_invalid_value_is_an_error() {
        let file = config_file("[http_config]\nlisten_port = \"eighty\"\n");
        expect_that!(get_config(file.path()), err(anything()));
    }
}
