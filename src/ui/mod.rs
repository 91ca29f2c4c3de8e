// Module declarations
mod app;
pub mod dashboard;
pub mod presenter;
// Re-exports for external use
pub use app::{App, run};
