pub mod formatter;

pub use formatter::{format_score, format_scored_table, format_tsv, should_use_colors};
