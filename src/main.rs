use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use wkimage::{generate_image, ImageOptions, OutputFormat, STDIN_SENTINEL};

/// Render a URL, an HTML file, or HTML from stdin to an image via wkhtmltoimage.
#[derive(Parser, Debug)]
#[command(name = "wkimage", version, about)]
struct Cli {
    /// URL or file to render, or "-" to read HTML from stdin
    input: String,

    /// Image format: png, jpg, svg, or bmp
    #[arg(short, long, default_value = "png")]
    format: OutputFormat,

    /// Width of the rendering screen in pixels (0 = tool default)
    #[arg(long, default_value_t = 0)]
    width: u32,

    /// Height of the rendering screen in pixels (0 = render entire page)
    #[arg(long, default_value_t = 0)]
    height: u32,

    /// Image quality, 1-100 (0 = tool default)
    #[arg(short, long, default_value_t = 0)]
    quality: u32,

    /// Write the image to this path instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Explicit path to the wkhtmltoimage binary
    #[arg(long, value_name = "PATH")]
    binary: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut html = String::new();
    if cli.input == STDIN_SENTINEL {
        io::stdin()
            .read_to_string(&mut html)
            .context("failed to read HTML from stdin")?;
    }

    let options = ImageOptions {
        binary_path: cli.binary,
        input: cli.input,
        format: cli.format,
        height: cli.height,
        width: cli.width,
        quality: cli.quality,
        html,
        output: cli.output.clone().unwrap_or_default(),
    };

    let bytes = generate_image(&options).context("image generation failed")?;

    // With --output the tool has already written the file itself.
    if cli.output.is_none() {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(&bytes).context("failed to write image")?;
        out.flush()?;
    }

    Ok(())
}
