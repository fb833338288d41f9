//! Spawning wkhtmltoimage and capturing its output.
//!
//! A single blocking call per invocation: no internal concurrency, no
//! timeout, no retry. Callers needing bounded latency must impose it
//! externally.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::args::{build_args, Invocation};
use crate::repair::cleanup_output;
use crate::{discovery, Error, ImageOptions, OutputFormat, Result};

/// An invoker bound to a resolved wkhtmltoimage binary.
///
/// Holding the resolved path explicitly keeps "resolve once, reuse" behavior
/// without hidden global state; [`Generator::discover`] still shares the
/// process-wide cache so repeated construction stays cheap.
#[derive(Debug, Clone)]
pub struct Generator {
    binary: PathBuf,
}

impl Generator {
    /// Binds to an explicit binary path. No discovery is performed and the
    /// process-wide cache is neither consulted nor populated.
    pub fn with_binary(path: impl Into<PathBuf>) -> Self {
        Self {
            binary: path.into(),
        }
    }

    /// Binds to the discovered binary, resolving it on first use.
    pub fn discover() -> Result<Self> {
        Ok(Self {
            binary: discovery::resolve()?.to_path_buf(),
        })
    }

    /// The binary this generator invokes.
    pub fn binary_path(&self) -> &Path {
        &self.binary
    }

    /// Renders `options` into image bytes.
    ///
    /// An explicit `options.binary_path` overrides the generator's own
    /// binding for this call.
    pub fn generate(&self, options: &ImageOptions) -> Result<Vec<u8>> {
        let invocation = build_args(options)?;
        let binary = options.binary_path.as_deref().unwrap_or(&self.binary);
        run(binary, invocation, options.format)
    }
}

/// Creates an image from the given options.
///
/// Uses the explicit `binary_path` when present, otherwise the process-wide
/// discovered binary. Returns the (repaired) image bytes; when the tool exits
/// non-zero the error carries whatever bytes were captured, best-effort.
pub fn generate_image(options: &ImageOptions) -> Result<Vec<u8>> {
    let invocation = build_args(options)?;
    match &options.binary_path {
        Some(path) => run(path, invocation, options.format),
        None => run(discovery::resolve()?, invocation, options.format),
    }
}

fn run(binary: &Path, invocation: Invocation, format: OutputFormat) -> Result<Vec<u8>> {
    let Invocation { args, html } = invocation;

    let mut cmd = Command::new(binary);
    cmd.args(&args)
        .stdin(if html.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd
        .spawn()
        .map_err(|e| Error::Spawn(format!("failed to spawn {}: {}", binary.display(), e)))?;

    // Feed HTML from a separate thread so a child blocked on writing output
    // cannot deadlock against us blocked on writing its input.
    let writer = html.map(|html| {
        let mut stdin = child.stdin.take().expect("stdin was piped");
        std::thread::spawn(move || stdin.write_all(html.as_bytes()))
    });

    let output = child
        .wait_with_output()
        .map_err(|e| Error::Spawn(format!("failed to read output: {}", e)))?;

    if let Some(handle) = writer {
        if let Ok(Err(e)) = handle.join() {
            // The tool may legitimately stop reading early; diagnostic only.
            log::warn!("failed to write HTML to wkhtmltoimage stdin: {}", e);
        }
    }

    // Combined output: stdout bytes followed by stderr bytes. The repair
    // step strips any diagnostic noise ahead of the image stream.
    let mut combined = output.stdout;
    combined.extend_from_slice(&output.stderr);
    let repaired = cleanup_output(combined, format);

    if output.status.success() {
        Ok(repaired)
    } else {
        log::warn!("wkhtmltoimage exited with {}", output.status);
        Err(Error::ProcessFailed {
            status: output.status.to_string(),
            output: repaired,
        })
    }
}
