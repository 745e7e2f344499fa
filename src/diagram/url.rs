use std::fmt;

pub const DEFAULT_RENDER_HOST: &str = "kroki.io";

/// Link to an SVG rendering of an actdiag token on a Kroki-compatible host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramUrl {
    host: String,
    token: String,
}

impl DiagramUrl {
    pub fn new(host: &str, token: impl Into<String>) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

impl fmt::Display for DiagramUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "https://{}/actdiag/svg/{}", self.host, self.token)
    }
}
