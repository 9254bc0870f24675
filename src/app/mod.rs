pub mod api;
pub mod cli;
pub mod commands;
pub mod dispatcher;
pub mod logging;
pub mod report;
pub mod session;
mod context;

pub use context::AppContext;
