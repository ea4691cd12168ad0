// CLI entry for chroma_census. All the interesting work lives in the
// library; this binary only parses flags, loads the image, and prints the
// ranked colors.

use anyhow::Result;
use chroma_census::{load_pixel_grid, CensusConfig, CensusPipeline, RankedEntry, ScaleFactor};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "chroma_census",
    version,
    about = "Finds the most frequent colors in an image using a parallel histogram engine"
)]
struct Cli {
    /// Path to the image to be analyzed.
    path: PathBuf,

    /// Amount of workers the pixel space is split across.
    #[arg(long = "threads", default_value_t = num_cpus::get().max(1))]
    threads: usize,

    /// How many colors to report.
    #[arg(long = "top", default_value_t = 10)]
    top: usize,

    /// Channel bucketing width to merge similar colors (0 disables).
    #[arg(long = "offset", default_value_t = 0)]
    offset: u8,

    /// Image scaling used to bound total work. Available options: 1/1, 1/2,
    /// 1/4, 1/8, 1/12, 1/16, 1/32.
    #[arg(long = "scaling", default_value = "1/4")]
    scaling: ScaleFactor,
}

fn print_entry(entry: &RankedEntry) {
    // Truecolor swatch next to the raw channel values.
    println!(
        "\x1b[48;2;{r};{g};{b}m  \x1b[0m RGB: {key} : {count} times",
        r = entry.color.red,
        g = entry.color.green,
        b = entry.color.blue,
        key = entry.color,
        count = entry.count,
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();

    let config = CensusConfig {
        worker_count: cli.threads,
        top_k: cli.top,
        quantization_offset: cli.offset,
        scale: cli.scaling,
    };

    let grid = load_pixel_grid(&cli.path, config.scale)?;
    let ranked = CensusPipeline::new(config).run(Arc::new(grid)).await?;

    for entry in &ranked {
        print_entry(entry);
    }

    println!("Took {:.2?}", start.elapsed());
    Ok(())
}
