use std::{collections::HashMap, fs};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server_bind: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:3000".into(),
        }
    }
}

/// Layered lookup: built-in defaults, then `server.toml`, then env vars.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        if let Some(bind) = bind_addr_from_toml(&raw) {
            settings.server_bind = bind;
        }
    }

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    settings
}

fn bind_addr_from_toml(raw: &str) -> Option<String> {
    let file_cfg = toml::from_str::<HashMap<String, String>>(raw).ok()?;
    file_cfg.get("bind_addr").cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_bind_address() {
        assert_eq!(Settings::default().server_bind, "127.0.0.1:3000");
    }

    #[test]
    fn reads_bind_addr_from_toml() {
        assert_eq!(
            bind_addr_from_toml("bind_addr = \"0.0.0.0:8080\"\n"),
            Some("0.0.0.0:8080".to_string())
        );
    }

    #[test]
    fn ignores_toml_without_bind_addr() {
        assert_eq!(bind_addr_from_toml("other_key = \"x\"\n"), None);
        assert_eq!(bind_addr_from_toml("not toml at all"), None);
    }
}
