use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "promo-rank")]
#[command(about = "Marketing score outlier finder for product catalogs", long_about = None)]
#[command(version)]
struct Cli {
    /// Product export to score (CSV with a header row)
    input: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/promo-rank/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Emit tab-separated values instead of a table (for scripting)
    #[arg(long)]
    tsv: bool,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    // Load weight config
    let config_path = cli.config.map(PathBuf::from);
    let config = match promo_rank::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        eprintln!(
            "Weights: total_sales={}%, clv={}%, demand={}%",
            config.weights.total_sales.sum(),
            config.weights.clv.sum(),
            config.weights.demand.sum()
        );
    }

    // Read the product table
    let table = match promo_rank::ingest::read_table(&cli.input) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if cli.verbose {
        eprintln!("Read {} product rows from {}", table.row_count(), cli.input.display());
    }

    // Score and filter
    let outliers = match promo_rank::scoring::calculate_scores(&table, &config.weights) {
        Ok(products) => products,
        Err(errors) => {
            eprintln!("Scoring errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.tsv {
        let output = promo_rank::output::format_tsv(&outliers);
        if !output.is_empty() {
            println!("{}", output);
        }
    } else {
        let use_colors = promo_rank::output::should_use_colors();
        let output = promo_rank::output::format_scored_table(&outliers, use_colors);
        println!("{}", output);
    }

    if cli.verbose {
        eprintln!();
        eprintln!(
            "{} outliers from {} rows in {:?}",
            outliers.len(),
            table.row_count(),
            start_time.elapsed()
        );
    }

    std::process::exit(EXIT_SUCCESS);
}
