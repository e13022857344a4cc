pub mod api;
pub mod core;
pub mod locale;
pub mod report;
