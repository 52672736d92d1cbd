// UI and formatting module

pub mod formatters;
pub mod report;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_count, format_gb, format_size, format_uptime};
pub use report::render_report;
