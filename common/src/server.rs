use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use site::{DEFAULT_BYPASS_PREFIXES, Lang};

// server configuration subtables
//
// split out of config.rs to keep the top-level struct readable
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HttpConfig {
    // ip and port for http server
    pub socket: String,

    // directory holding assets/, images/ and docs/
    pub static_root: PathBuf,

    // location of the wasm island bundle, served under /app
    pub app_root: PathBuf,

    // module script loaded by every page to mount the islands
    #[serde(default = "default_app_entry")]
    pub app_entry: String,
}

fn default_app_entry() -> String {
    String::from("/app/webapp.js")
}

// language negotiation
//
// the whole table is optional, as is every key in it
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LangConfig {
    // used when Accept-Language names no supported language
    #[serde(default)]
    pub default: Lang,

    // path prefixes that are served as-is, without a language segment
    #[serde(default = "default_bypass_prefixes")]
    pub bypass_prefixes: Vec<String>,
}

fn default_bypass_prefixes() -> Vec<String> {
    DEFAULT_BYPASS_PREFIXES.iter().map(|p| p.to_string()).collect()
}

impl Default for LangConfig {
    fn default() -> Self {
        LangConfig {
            default: Lang::default(),
            bypass_prefixes: default_bypass_prefixes(),
        }
    }
}

impl LangConfig {
    pub fn bypasses(&self, path: &str) -> bool {
        self.bypass_prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }
}
