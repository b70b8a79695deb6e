use fractal_bench::{RenderConfig, Summary, run_file_io, run_mandelbrot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RenderConfig::default();

    eprintln!("running mandelbrot {}x{} ({} iterations)...", config.width, config.height, config.max_iter);
    let mandelbrot = run_mandelbrot(&config)?;
    eprintln!("  {:.4} seconds", mandelbrot.elapsed_secs);

    eprintln!("running file round trip...");
    let file_io = run_file_io(&std::env::temp_dir())?;
    eprintln!("  {} tokens kept, {:.4} seconds", file_io.kept, file_io.elapsed_secs);

    let summary = Summary { mandelbrot, file_io };
    println!("{}", summary.to_json()?);
    Ok(())
}
