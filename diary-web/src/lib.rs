//! Web front end for the diary: routes, pages and the command line.
pub mod cli;
pub mod error;
pub mod render;
pub mod routes;

pub use cli::Cli;
pub use error::AppError;
pub use routes::{AppState, build_router};
