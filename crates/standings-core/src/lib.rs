// Library root for the standings pipeline: static league data, the tidy
// reshape, per-manager aggregation, and the presentation payload.

pub mod config;
pub mod data;
pub mod export;
pub mod report;
pub mod season;
pub mod summary;
pub mod tidy;
