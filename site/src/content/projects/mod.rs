use super::Project;

mod deno_logger;
mod monero_stack;

// order of the cards on the home page
pub const PROJECTS: &[Project] = &[deno_logger::PROJECT, monero_stack::PROJECT];
