// shared site logic
//
// everything in this crate is target-independent so that the server (ssr) and the
// wasm islands agree on content, paths and the section bookkeeping.  nothing here
// touches the dom; see webapp/src/dom.rs for the browser side.
pub mod content;
pub mod icons;
pub mod lang;
pub mod logline;
pub mod nav;
pub mod palette;
pub mod section;
pub mod spy;
pub mod url;

pub use lang::{Lang, LangData};

// path prefixes that never carry a language segment
//
// the server middleware reads its own list from the config file, but these are
// the defaults and what the islands assume when building links
pub const ASSETS_PATH: &str = "/assets/";
pub const IMAGES_PATH: &str = "/images/";
pub const DOCS_PATH: &str = "/docs/";
pub const APP_PATH: &str = "/app/";

pub const DEFAULT_BYPASS_PREFIXES: [&str; 4] = [ASSETS_PATH, IMAGES_PATH, DOCS_PATH, APP_PATH];

// owner shown in titles and in the fake shell prompt of the log background
pub const SITE_OWNER: &str = "Nicolas Métivier";
pub const SITE_HOST: &str = "nicolas-metivier.fr";
