use std::path::Path;

use anyhow::{Result, bail};
use tracing::warn;

use common::config::SiteConfig;
use site::{ASSETS_PATH, DOCS_PATH, IMAGES_PATH};

// a served root must be an absolute path to an existing directory
pub fn root_exists(dir: &Path) -> Result<()> {
    // needed to be completely unambiguous which directory we are serving
    if !dir.is_absolute() {
        bail!("{} is not an absolute path", dir.display());
    }

    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    Ok(())
}

// every subdirectory of the static root that is served on its own prefix
pub fn static_subdirs() -> impl Iterator<Item = &'static str> {
    [ASSETS_PATH, IMAGES_PATH, DOCS_PATH]
        .into_iter()
        .map(|prefix| prefix.trim_matches('/'))
}

// missing roots are not fatal: pages still render, static requests just 404
pub fn check_roots(config: &SiteConfig) {
    let http = &config.http;

    if let Err(err) = root_exists(&http.app_root) {
        warn!("app_root: {err}; islands will not be interactive");
    }

    if let Err(err) = root_exists(&http.static_root) {
        warn!("static_root: {err}");
        return;
    }

    for subdir in static_subdirs() {
        if let Err(err) = root_exists(&http.static_root.join(subdir)) {
            warn!("static_root: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env::temp_dir;

    use super::*;

    #[test]
    fn relative_roots_are_rejected() {
        assert!(root_exists(Path::new("static")).is_err());
    }

    #[test]
    fn missing_roots_are_rejected() {
        let missing = temp_dir().join("portfolio-checks-missing-root");
        assert!(root_exists(&missing).is_err());
    }

    #[test]
    fn existing_roots_pass() {
        assert!(root_exists(&temp_dir()).is_ok());
    }

    #[test]
    fn static_subdirs_match_the_url_prefixes() {
        assert_eq!(
            static_subdirs().collect::<Vec<_>>(),
            vec!["assets", "images", "docs"]
        );
    }
}
