use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::scoring::ScoredProduct;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a normalized score for display: four decimals, fixed width.
pub fn format_score(score: f64) -> String {
    if score.is_finite() {
        format!("{:.4}", score)
    } else {
        // Degenerate columns surface as NaN; show it rather than masking it.
        "NaN".to_string()
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a product name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format outlier products as a table with columns:
/// Index, Code, Name, Sales, CLV, Demand.
/// Index column: 3 chars, right-aligned. Score columns: 7 chars each.
/// The name column absorbs whatever terminal width remains.
pub fn format_scored_table(products: &[ScoredProduct], use_colors: bool) -> String {
    if products.is_empty() {
        return "No outlier products found.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let code_width = products
        .iter()
        .map(|p| p.product_code.chars().count())
        .max()
        .unwrap_or(0)
        .max("Code".len());
    let score_width = 7;
    let separator = "  ";

    let header = format!(
        "{:>index_width$} {:code_width$}{sep}{:<24}{sep}{:>score_width$}{sep}{:>score_width$}{sep}{:>score_width$}",
        "#", "Code", "Name", "Sales", "CLV", "Demand",
        sep = separator,
    );

    let mut lines = vec![if use_colors {
        header.dimmed().to_string()
    } else {
        header
    }];

    // Fixed layout around the name column: index, code, three scores.
    let fixed_width = index_width + 1 + code_width + separator.len() * 4 + score_width * 3;

    for (idx, product) in products.iter().enumerate() {
        let index_str = format!("{:>2}.", idx + 1);

        let name = if let Some(width) = term_width {
            if width > fixed_width + 10 {
                truncate_name(&product.product_name, width - fixed_width)
            } else {
                // Very narrow terminal, show truncated
                truncate_name(&product.product_name, 20)
            }
        } else {
            // No terminal (pipe), don't truncate
            product.product_name.clone()
        };
        let name_padded = format!("{:<24}", name);
        let code_padded = format!("{:<code_width$}", product.product_code);

        let sales = format!("{:>score_width$}", format_score(product.total_sales_score));
        let clv = format!("{:>score_width$}", format_score(product.clv_score));
        let demand = format!("{:>score_width$}", format_score(product.demand_score));

        lines.push(if use_colors {
            format!(
                "{} {}{sep}{}{sep}{}{sep}{}{sep}{}",
                index_str.dimmed(),
                code_padded.cyan(),
                name_padded,
                sales.bold(),
                clv.bold(),
                demand.bold(),
                sep = separator,
            )
        } else {
            format!(
                "{} {}{sep}{}{sep}{}{sep}{}{sep}{}",
                index_str, code_padded, name_padded, sales, clv, demand,
                sep = separator,
            )
        });
    }

    lines.join("\n")
}

/// Format outlier products as tab-separated values for scripting
/// Columns: code, name, sales score, clv score, demand score
/// (no headers, no colors, no truncation)
pub fn format_tsv(products: &[ScoredProduct]) -> String {
    if products.is_empty() {
        return String::new();
    }

    products
        .iter()
        .map(|p| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                p.product_code,
                p.product_name,
                format_score(p.total_sales_score),
                format_score(p.clv_score),
                format_score(p.demand_score),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
