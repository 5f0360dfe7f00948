pub mod config;
pub mod course;
pub mod report;
pub mod scale;
