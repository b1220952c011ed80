//! Badge Grid CLI
//!
//! Commands: generate, order, layout
//! generate writes the composited grid image; order and layout print JSON
//! for inspection. Returns non-zero on any failure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use badgegrid_core::{ordered_badge_names, records, GridConfig, GridLayout, GridPipeline};

#[derive(Parser)]
#[command(name = "badgegrid-cli")]
#[command(about = "Badge Grid CLI - Honeycomb Certification Badge Compositor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the certification record file
    #[arg(short, long, default_value = "src/config/certifications.yaml")]
    config: PathBuf,

    /// Directory containing the badge image files
    #[arg(short, long, default_value = "public/badges")]
    badges_dir: PathBuf,

    /// Square side length of each placed badge, in pixels
    #[arg(long, default_value_t = 150)]
    badge_size: u32,

    /// Pixel gap between adjacent badges
    #[arg(long, default_value_t = 20)]
    gap: u32,

    /// Badges per full row
    #[arg(long, default_value_t = 5)]
    columns: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Composite all eligible badges into the output image
    Generate {
        /// Output image path
        #[arg(short, long, default_value = "badge-grid.png")]
        output: PathBuf,
    },

    /// Print the ordered badge list as JSON
    Order,

    /// Print the computed grid layout for a badge count as JSON
    Layout {
        /// Number of badges to lay out
        #[arg(short = 'n', long)]
        count: usize,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = GridConfig {
        badge_size: cli.badge_size,
        gap: cli.gap,
        columns: cli.columns,
    };

    match cli.command {
        Commands::Generate { output } => {
            let certs = match records::load_from_file(&cli.config) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Failed to generate badge grid: {}", e);
                    return ExitCode::FAILURE;
                }
            };

            let pipeline = GridPipeline::new(config, cli.badges_dir, output);
            match pipeline.generate(&certs) {
                Ok(summary) => {
                    println!("Generated badge grid: {}", summary.output.display());
                    println!("  - {} badges in {} rows", summary.badges, summary.rows);
                    println!("  - Image size: {}x{}px", summary.width, summary.height);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Failed to generate badge grid: {}", e);
                    ExitCode::FAILURE
                }
            }
        }

        Commands::Order => {
            let certs = match records::load_from_file(&cli.config) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Failed to load records: {}", e);
                    return ExitCode::FAILURE;
                }
            };

            let ordered = ordered_badge_names(&certs);
            println!("{}", serde_json::to_string_pretty(&ordered).unwrap());
            ExitCode::SUCCESS
        }

        Commands::Layout { count } => match GridLayout::compute(count, &config) {
            Ok(layout) => {
                println!("{}", serde_json::to_string_pretty(&layout).unwrap());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Layout failed: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}
