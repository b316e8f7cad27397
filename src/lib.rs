//! Pencil durability simulation
//!
//! A pencil writes, erases and edits text on a page. Its point, length and
//! eraser are finite: once a budget runs out, characters are masked instead
//! of recorded.
//!
//! The costing itself lives in [`processors`] as pure functions; [`Pencil`]
//! and [`Page`] are the state holders that feed them and store the results.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod cost;
pub mod error;
pub mod messages;
pub mod page;
pub mod pencil;
pub mod processors;
pub mod script;
pub mod session;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use config::PencilConfig;
pub use error::PencilError;
pub use messages::PencilMsg;
pub use page::Page;
pub use pencil::Pencil;
pub use session::Session;
