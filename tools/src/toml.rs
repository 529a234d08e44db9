use std::{fs, path::Path};

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Reads and deserializes a TOML file.
///
/// # Errors
/// Fails when the file cannot be read or its contents do not match `T`;
/// the error names the offending path.
pub fn parse_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Could not open file {:?}", path.display()))?;

    parse_str(&contents).with_context(|| format!("Invalid config file {:?}", path.display()))
}

/// Deserializes TOML already held in memory.
pub fn parse_str<T: DeserializeOwned>(contents: &str) -> anyhow::Result<T> {
    toml::from_str(contents).context("Could not parse TOML")
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Endpoint {
        url: String,
        timeout: u64,
    }

    #[test]
    fn test_parse_str() -> anyhow::Result<()> {
        let endpoint: Endpoint = parse_str("url = \"http://localhost:8899\"\ntimeout = 30\n")?;
        assert_eq!(
            endpoint,
            Endpoint {
                url: "http://localhost:8899".to_owned(),
                timeout: 30,
            }
        );
        Ok(())
    }

    #[test]
    fn test_parse_file_roundtrip() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("tools-toml-{}.toml", std::process::id()));
        fs::write(&path, "url = \"http://localhost:8899\"\ntimeout = 5\n")?;

        let endpoint: Endpoint = parse_file(&path)?;
        fs::remove_file(&path)?;

        assert_eq!(endpoint.timeout, 5);
        Ok(())
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file::<Endpoint>("/definitely/not/here.toml");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Could not open file"));
    }

    #[test]
    fn test_parse_str_type_mismatch() {
        assert!(parse_str::<Endpoint>("url = 1\ntimeout = 5\n").is_err());
    }
}
