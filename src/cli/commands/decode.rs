use anyhow::{Context, Result};

use crate::cli::commands::Command;
use crate::diagram::decode;

pub struct DecodeCommand {
    token: String,
}

impl DecodeCommand {
    /// Accepts a bare token or a full diagram URL
    pub fn new(token: &str) -> Self {
        let token = token
            .trim()
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        Self { token }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn source(&self) -> Result<String> {
        decode(&self.token).context("Failed to decode diagram token")
    }
}

impl Command for DecodeCommand {
    async fn execute(&self) -> Result<()> {
        println!("{}", self.source()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::encode;
    use base64::{engine::general_purpose::URL_SAFE, Engine};

    #[test]
    fn test_accepts_full_url() {
        let token = encode("actdiag {\n}").unwrap();
        let command = DecodeCommand::new(&format!("https://kroki.io/actdiag/svg/{token}"));
        assert_eq!(command.token(), token);
        assert_eq!(command.source().unwrap(), "actdiag {\n}");
    }

    #[test]
    fn test_invalid_token_is_reported() {
        let err = DecodeCommand::new("%%%").source().unwrap_err();
        assert!(err.to_string().contains("Failed to decode diagram token"));
    }

    #[test]
    fn test_error_chain_names_each_cause_once() {
        let err = DecodeCommand::new("%%%").source().unwrap_err();
        let cause = URL_SAFE.decode("%%%").unwrap_err().to_string();

        let chain = format!("{err:#}");
        assert!(chain.contains("Token is not valid URL-safe base64"));
        assert_eq!(chain.matches(&cause).count(), 1);
    }
}
