use std::net::SocketAddr;

use clap::Args;

/// Port the function host listens on locally.
const DEFAULT_PORT: u16 = 7071;

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT))
}

/// HTTP server settings, from flags or the environment.
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, global = true, env = "NAME_PARSER_ADDR", default_value_t = default_addr())]
    pub addr: SocketAddr,

    /// Function key callers must pass as the `code` query parameter.
    /// Requests are not checked when unset.
    #[arg(long, global = true, env = "NAME_PARSER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            api_key: None,
        }
    }
}

impl ServerConfig {
    fn required_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    pub fn requires_key(&self) -> bool {
        self.required_key().is_some()
    }

    /// Whether a request carrying `code` may call the function.
    pub fn authorizes(&self, code: Option<&str>) -> bool {
        match self.required_key() {
            None => true,
            Some(key) => code == Some(key),
        }
    }
}
