// browser glue
//
// everything the islands need from the dom goes through this module.  on wasm32 it
// wraps web-sys; everywhere else (server-side rendering, unit tests) the same api
// exists as no-ops so components compile and render unchanged.
//
// observers, listeners and timers are owned handles: they are released by stop()
// or when dropped, whichever comes first.

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
pub use browser::*;

#[cfg(not(target_arch = "wasm32"))]
mod headless;
#[cfg(not(target_arch = "wasm32"))]
pub use headless::*;

// options of a viewport intersection observer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchOptions {
    pub root_margin: &'static str,
    pub threshold: f64,
}

// the active band of the section navigation
pub const SPY_WATCH: WatchOptions = WatchOptions {
    root_margin: "-30% 0% -65% 0%",
    threshold: 0.1,
};

// the band that decides which home section owns the address bar
pub const URL_WATCH: WatchOptions = WatchOptions {
    root_margin: "-10% 0px -50% 0px",
    threshold: 0.1,
};

// fade-in wrappers appear once a fifth of them is on screen
pub const FADE_WATCH: WatchOptions = WatchOptions {
    root_margin: "0px",
    threshold: 0.2,
};

pub const THEME_KEY: &str = "theme";
