/*!
 * Core Module
 * Error handling, limits and configuration shared by every subsystem
 */

pub mod config;
pub mod errors;
pub mod limits;

// Re-export for convenience
pub use config::EngineConfig;
pub use errors::*;
