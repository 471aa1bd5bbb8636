#![allow(non_snake_case)]

// pages and islands of the portfolio
//
// the server renders pages from here; the wasm bundle built from main.rs mounts
// the islands found in those pages

pub mod components;
pub mod dom;
pub mod island;
pub mod islands;
pub mod pages;
pub mod style;

pub use island::{Island, IslandRoot, IslandRootProps};
pub use pages::{DocumentProps, Page};
