//! TUI components.

pub mod chart;
pub mod footer;
pub mod header;

pub use chart::ScatterChart;
pub use footer::Footer;
pub use header::Header;
