pub mod core;
pub mod loader;

pub use loader::DashboardLoader;
