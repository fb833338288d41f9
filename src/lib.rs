//! wkimage
//!
//! A small wrapper around the `wkhtmltoimage` binary that renders a URL, a
//! local HTML file, or an in-memory HTML string into an image.
//!
//! The wrapper translates an [`ImageOptions`] record into command-line flags,
//! spawns the binary (piping HTML over stdin when the input is `"-"`),
//! captures its combined output, and strips any leading noise bytes from the
//! result before returning it.
//!
//! # Example
//!
//! ```no_run
//! use wkimage::{ImageOptions, OutputFormat, STDIN_SENTINEL};
//!
//! # fn main() -> wkimage::Result<()> {
//! let options = ImageOptions {
//!     input: STDIN_SENTINEL.to_string(),
//!     html: "<html><body><h1>Hello</h1></body></html>".to_string(),
//!     format: OutputFormat::Png,
//!     width: 800,
//!     ..Default::default()
//! };
//!
//! let png = wkimage::generate_image(&options)?;
//! assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub mod error;
pub use error::{Error, Result};

pub mod args;
pub mod discovery;
pub mod invoke;
pub mod json;
pub mod repair;

pub use args::{build_args, Invocation};
pub use discovery::resolved_binary_path;
pub use invoke::{generate_image, Generator};
pub use json::{image_from_json, options_from_json};
pub use repair::cleanup_output;

/// Input value signaling that HTML is piped via the subprocess's stdin.
pub const STDIN_SENTINEL: &str = "-";

/// Image formats understood by wkhtmltoimage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Portable Network Graphics (the wkhtmltoimage default)
    #[default]
    Png,
    /// JPEG
    Jpg,
    /// Scalable Vector Graphics
    Svg,
    /// Windows bitmap
    Bmp,
}

impl OutputFormat {
    /// The value passed to the `--format` flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Svg => "svg",
            OutputFormat::Bmp => "bmp",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpg),
            "svg" => Ok(OutputFormat::Svg),
            "bmp" => Ok(OutputFormat::Bmp),
            other => Err(Error::InvalidOptions(format!(
                "unsupported format '{}' (expected png, jpg, svg, or bmp)",
                other
            ))),
        }
    }
}

/// Options controlling a single image generation.
///
/// Zero-valued dimensions and quality defer to wkhtmltoimage's own defaults
/// (width 1024, quality 94, height computed from the page content).
#[derive(Debug, Clone, Default)]
pub struct ImageOptions {
    /// Explicit path to the wkhtmltoimage binary.
    ///
    /// When absent, the binary is discovered once per process: first in the
    /// directory of the running executable, then on `PATH`, then in the
    /// directory named by `WKHTMLTOIMAGE_PATH`.
    pub binary_path: Option<PathBuf>,
    /// What to render: a URL (`http://example.com`), a local file
    /// (`/tmp/example.html`), or [`STDIN_SENTINEL`] to pipe `html` via stdin.
    /// Required.
    pub input: String,
    /// Image format to generate. Defaults to PNG.
    pub format: OutputFormat,
    /// Height of the rendering screen in pixels. 0 renders the entire page
    /// top to bottom.
    pub height: u32,
    /// Width of the rendering screen in pixels, used as a guideline only.
    /// 0 uses the tool default.
    pub width: u32,
    /// Final image quality, 1-100. 0 uses the tool default.
    pub quality: u32,
    /// HTML to render. Only consulted when `input` is [`STDIN_SENTINEL`];
    /// for any other input it is discarded before invocation.
    pub html: String,
    /// Where the image goes. Empty returns the bytes to the caller; a path
    /// makes wkhtmltoimage write the file itself.
    pub output: String,
}
