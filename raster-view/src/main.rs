mod window;

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ndarray::Array2;

use raster::config::{DEFAULT_PIXEL_SIZE, DEFAULT_SHAPE, MAX_PIXEL_SIZE};
use raster::{generators, input, render, Colormap, RenderOptions};

#[derive(Debug, Clone, ValueEnum)]
enum TestPattern {
    Random,
    Horizontal,
    Vertical,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "False-color raster viewer for 2-D arrays", long_about = None)]
struct Args {
    #[arg(
        short,
        long,
        help = "Pixel block size for each array cell",
        default_value_t = DEFAULT_PIXEL_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=MAX_PIXEL_SIZE as i64)
    )]
    pixel_size: u32,

    #[arg(
        short,
        long,
        help = "Colormap to apply",
        default_value_t = Colormap::ALL[0]
    )]
    color_map: Colormap,

    #[arg(
        short,
        long,
        help = "Synthetic test pattern (reads the array from stdin when omitted)",
        value_enum
    )]
    test: Option<TestPattern>,

    #[arg(long, help = "Row count for synthetic patterns", default_value_t = DEFAULT_SHAPE.0)]
    rows: usize,

    #[arg(long, help = "Column count for synthetic patterns", default_value_t = DEFAULT_SHAPE.1)]
    cols: usize,

    #[arg(long, help = "Seed for the random pattern (entropy when omitted)")]
    seed: Option<u64>,

    #[arg(short, long, help = "Save rendered PNG to file instead of displaying")]
    save: Option<PathBuf>,
}

fn load_data(args: &Args) -> Result<Array2<u8>> {
    let size = (args.rows, args.cols);
    let data = match args.test {
        Some(TestPattern::Random) => match args.seed {
            Some(seed) => generators::random_seeded(size, seed)?,
            None => generators::random(size)?,
        },
        Some(TestPattern::Horizontal) => generators::horizontal(size)?,
        Some(TestPattern::Vertical) => generators::vertical(size)?,
        None => {
            let stdin = io::stdin();
            input::read_array(stdin.lock()).context("Failed to read array from stdin")?
        }
    };
    Ok(data)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let data = load_data(&args)?;
    let (rows, cols) = data.dim();
    let options = RenderOptions {
        pixel_size: args.pixel_size,
        colormap: args.color_map,
    };

    println!("Rendering {rows}x{cols} array");
    println!("  Colormap: {}", options.colormap);
    println!("  Pixel size: {}", options.pixel_size);

    if let Some(output_path) = args.save {
        let bytes = render::render(&data, options.pixel_size, options.colormap)?;
        fs::write(&output_path, &bytes)
            .with_context(|| format!("Failed to save image to {}", output_path.display()))?;
        println!("Image saved to {}", output_path.display());
        return Ok(());
    }

    println!("Controls:");
    println!("  Up/Down      pixel size +1/-1");
    println!("  1..{MAX_PIXEL_SIZE}         set pixel size directly");
    println!("  Left/Right   previous/next colormap");
    println!("  Esc or Q     quit");

    window::run(&data, options)
}
