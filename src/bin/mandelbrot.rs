use std::io::{self, BufWriter, Write};
use std::time::Instant;

use fractal_bench::{RenderConfig, Report, render_grid};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let config = RenderConfig::default();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    render_grid(&config, &mut out)?;

    let report = Report::new(config, start.elapsed());
    write!(out, "\n{}", report)?;
    out.flush()?;

    Ok(())
}
