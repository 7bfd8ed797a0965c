//! taskpick-cli: terminal front end for taskpick-core.

pub mod config;
pub mod render;
pub mod seed;
pub mod session;
pub mod state;
