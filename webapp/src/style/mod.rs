use constcat::concat;

mod components;
mod islands;
mod layout;
mod variables;

pub use components::BASE_COMPONENTS;
pub use islands::ISLAND_STYLES;
pub use layout::LAYOUT_STYLES;
pub use variables::CSS_VARIABLES;

// everything the pages need, inlined into the document head
pub const STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Ubuntu, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.6;
}

a {
  color: var(--accent);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

img {
  max-width: 100%;
}
"#,
    CSS_VARIABLES,
    LAYOUT_STYLES,
    BASE_COMPONENTS,
    ISLAND_STYLES
);

// runs before first paint: flags scripting and applies the stored color scheme,
// falling back to the system preference
pub const THEME_SCRIPT: &str = r#"(function () {
  var root = document.documentElement;
  root.classList.add('js');
  var theme = null;
  try { theme = localStorage.getItem('theme'); } catch (e) {}
  if (theme === 'dark' || (theme === null && window.matchMedia('(prefers-color-scheme: dark)').matches)) {
    root.classList.add('dark');
  }
})();"#;
