// ASCII rendering of the Mandelbrot set plus the timing report box

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use crate::fractal::{Viewport, mandelbrot_escapes, ramp_char};

pub const WIDTH: usize = 80;
pub const HEIGHT: usize = 40;
pub const MAX_ITER: u32 = 100;

/// Columns between the two vertical borders of the report box.
const REPORT_INNER_WIDTH: usize = 79;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub max_iter: u32,
    pub viewport: Viewport,
}

impl RenderConfig {
    /// Total iteration budget across the grid.
    pub fn calculations(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.max_iter as u64
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: WIDTH,
            height: HEIGHT,
            max_iter: MAX_ITER,
            viewport: Viewport::default(),
        }
    }
}

/// Writes one glyph per cell, row by row, each row ended by `\n`.
/// Cells are emitted as soon as they are computed.
pub fn render_grid<W: Write>(config: &RenderConfig, out: &mut W) -> io::Result<()> {
    let mut utf8 = [0u8; 4];

    for y in 0..config.height {
        for x in 0..config.width {
            let c = config.viewport.point_at(x, y, config.width, config.height);
            let iterations = mandelbrot_escapes(c, config.max_iter);
            let glyph = ramp_char(iterations, config.max_iter);
            out.write_all(glyph.encode_utf8(&mut utf8).as_bytes())?;
        }
        out.write_all(b"\n")?;
    }

    Ok(())
}

pub fn render_to_string(config: &RenderConfig) -> String {
    let mut buffer = Vec::with_capacity((config.width + 1) * config.height);
    // Writing into a Vec cannot fail
    let _ = render_grid(config, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Formats `n` with a comma between every group of three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut output = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            output.push(',');
        }
        output.push(ch);
    }

    output
}

/// Summary block printed after the grid.
pub struct Report {
    pub config: RenderConfig,
    pub elapsed: Duration,
}

impl Report {
    pub fn new(config: RenderConfig, elapsed: Duration) -> Self {
        Report { config, elapsed }
    }

    fn fields(&self) -> [String; 4] {
        [
            format!("  Dimensions: {}x{}", self.config.width, self.config.height),
            format!("  Iterations: {:<3}", self.config.max_iter),
            format!("  Calculations: {}", group_thousands(self.config.calculations())),
            format!("  Execution time: {:.4} seconds", self.elapsed.as_secs_f64()),
        ]
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "═".repeat(REPORT_INNER_WIDTH);

        writeln!(f, "╔{}╗", rule)?;
        writeln!(f, "║{:^width$}║", "MANDELBROT SET CALCULATION", width = REPORT_INNER_WIDTH)?;
        writeln!(f, "╠{}╣", rule)?;
        for line in self.fields() {
            writeln!(f, "║{:<width$}║", line, width = REPORT_INNER_WIDTH)?;
        }
        writeln!(f, "╚{}╝", rule)
    }
}
