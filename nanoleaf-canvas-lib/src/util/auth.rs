use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Contents of the credential file, `{"auth_token": "..."}`.
///
/// The token is embedded in the path of every v1 request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub auth_token: String,
}

impl AuthToken {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read auth file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse auth file {}", path.display()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_auth_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"auth_token": "x7y8z9"}}"#).unwrap();
        let token = AuthToken::load(file.path()).unwrap();
        assert_eq!(token.auth_token, "x7y8z9");
    }

    #[test]
    fn test_missing_key_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"token": "x7y8z9"}}"#).unwrap();
        let err = AuthToken::load(file.path()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_missing_file() {
        assert!(AuthToken::load("/nonexistent/.auth").is_err());
    }

    #[test]
    fn test_to_json_is_loadable() {
        let token = AuthToken {
            auth_token: "abc".to_string(),
        };
        assert_eq!(token.to_json().unwrap(), r#"{"auth_token":"abc"}"#);
    }
}
