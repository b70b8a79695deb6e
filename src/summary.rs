use std::error::Error;
use std::io;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::file_io::round_trip;
use crate::render::{RenderConfig, render_grid};

#[derive(Debug, Serialize)]
pub struct MandelbrotMetrics {
    pub width: usize,
    pub height: usize,
    pub max_iter: u32,
    pub calculations: u64,
    pub elapsed_secs: f64,
}

#[derive(Debug, Serialize)]
pub struct FileIoMetrics {
    pub payload_bytes: usize,
    pub tokens: usize,
    pub kept: usize,
    pub elapsed_secs: f64,
}

/// Metrics of both workloads, shaped for a results dashboard.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub mandelbrot: MandelbrotMetrics,
    pub file_io: FileIoMetrics,
}

impl Summary {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn round4(secs: f64) -> f64 {
    (secs * 10_000.0).round() / 10_000.0
}

/// Renders the grid into a sink so only the computation is timed.
pub fn run_mandelbrot(config: &RenderConfig) -> io::Result<MandelbrotMetrics> {
    let start = Instant::now();
    render_grid(config, &mut io::sink())?;

    Ok(MandelbrotMetrics {
        width: config.width,
        height: config.height,
        max_iter: config.max_iter,
        calculations: config.calculations(),
        elapsed_secs: round4(start.elapsed().as_secs_f64()),
    })
}

pub fn run_file_io(dir: &Path) -> Result<FileIoMetrics, Box<dyn Error>> {
    let result = round_trip(dir)?;

    Ok(FileIoMetrics {
        payload_bytes: result.payload_len,
        tokens: result.token_count,
        kept: result.kept.len(),
        elapsed_secs: round4(result.elapsed.as_secs_f64()),
    })
}
