use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::server::{HttpConfig, LangConfig};

// portfolio configuration
//
// everything the server needs at startup; the islands never see this
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SiteConfig {
    pub http: HttpConfig,

    #[serde(default)]
    pub lang: LangConfig,
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

pub fn parse_config(doc: &str) -> Result<SiteConfig> {
    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse config file")?;

    Ok(data.config)
}

#[instrument(level=Level::DEBUG)]
pub async fn read_config(filename: PathBuf) -> Result<Arc<SiteConfig>> {
    debug!("reading config file");

    let doc = tokio::fs::read_to_string(&filename)
        .await
        .with_context(|| format!("failed to read config file {}", filename.display()))?;

    let config = parse_config(&doc)?;

    debug!("successfully parsed config file");
    Ok(Arc::new(config))
}

#[cfg(test)]
mod tests {
    use site::Lang;

    use super::*;

    const MINIMAL: &str = r#"
[config.http]
socket = "127.0.0.1:8000"
static_root = "/srv/portfolio/static"
app_root = "/srv/portfolio/app"
"#;

    #[test]
    fn lang_table_is_optional() {
        let config = parse_config(MINIMAL).unwrap();

        assert_eq!(config.http.socket, "127.0.0.1:8000");
        assert_eq!(config.http.app_entry, "/app/webapp.js");
        assert_eq!(config.lang.default, Lang::Fr);
        assert!(config.lang.bypasses("/assets/styles.css"));
        assert!(config.lang.bypasses("/app/webapp_bg.wasm"));
        assert!(!config.lang.bypasses("/fr/projects"));
    }

    #[test]
    fn lang_table_overrides_defaults() {
        let doc = format!(
            "{MINIMAL}\n[config.lang]\ndefault = \"en\"\nbypass_prefixes = [\"/static/\"]\n"
        );
        let config = parse_config(&doc).unwrap();

        assert_eq!(config.lang.default, Lang::En);
        assert!(config.lang.bypasses("/static/x.png"));
        assert!(!config.lang.bypasses("/assets/x.png"));
    }

    #[test]
    fn unsupported_default_is_rejected() {
        let doc = format!("{MINIMAL}\n[config.lang]\ndefault = \"de\"\n");
        assert!(parse_config(&doc).is_err());
    }

    #[test]
    fn missing_table_is_rejected() {
        assert!(parse_config("[http]\nsocket = \"0.0.0.0:80\"").is_err());
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let err = read_config(PathBuf::from("/nonexistent/portfolio.toml"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("failed to read config file"));
    }
}
