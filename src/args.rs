//! Translation of [`ImageOptions`] into wkhtmltoimage command-line arguments.
//!
//! Argument order matters to the tool: flags first, then the input source,
//! then the output destination.

use crate::{Error, ImageOptions, Result, STDIN_SENTINEL};

/// A fully translated invocation: the argument list plus the HTML (if any)
/// that must be piped to the subprocess's stdin.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Ordered arguments; the last two are always (input, output-or-"-").
    pub args: Vec<String>,
    /// HTML to stream over stdin. `Some` only when the input is the stdin
    /// sentinel and the options carried non-empty HTML; any HTML supplied
    /// alongside a URL or file input is dropped here, never sent.
    pub html: Option<String>,
}

/// Builds the argument list for a wkhtmltoimage run.
///
/// Pure: the caller's options are never mutated. Fails when `input` is empty.
pub fn build_args(options: &ImageOptions) -> Result<Invocation> {
    if options.input.is_empty() {
        return Err(Error::InvalidOptions("must provide input".to_string()));
    }

    let mut args = Vec::new();

    // silence extra wkhtmltoimage output
    args.push("-q".to_string());
    args.push("--disable-plugins".to_string());

    args.push("--format".to_string());
    args.push(options.format.as_str().to_string());

    if options.height != 0 {
        args.push("--height".to_string());
        args.push(options.height.to_string());
    }

    if options.width != 0 {
        args.push("--width".to_string());
        args.push(options.width.to_string());
    }

    if options.quality != 0 {
        args.push("--quality".to_string());
        args.push(options.quality.to_string());
    }

    // input and output come last
    args.push(options.input.clone());

    if options.output.is_empty() {
        // "-" asks the tool to write the image to stdout
        args.push("-".to_string());
    } else {
        args.push(options.output.clone());
    }

    let html = if options.input == STDIN_SENTINEL && !options.html.is_empty() {
        Some(options.html.clone())
    } else {
        None
    };

    Ok(Invocation { args, html })
}
