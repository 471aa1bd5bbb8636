// interactive parts of the pages
//
// every island renders on the server first and is then mounted again in the
// browser from the props embedded next to it

mod color_grid;
mod icon_grid;
mod log_background;
mod project;
mod redirect;
mod scroll_arrow;
mod sidebar;
mod spy_nav;
mod url_sync;

pub use color_grid::ColorGrid;
pub use icon_grid::IconGrid;
pub use log_background::LogBackground;
pub use project::ProjectBody;
pub use redirect::RedirectToSection;
pub use scroll_arrow::ScrollArrow;
pub use sidebar::SidebarNav;
pub use spy_nav::ScrollSpyNav;
pub use url_sync::UrlSync;
