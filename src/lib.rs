pub mod config;
pub mod dataset;
pub mod ingest;
pub mod output;
pub mod scoring;
