pub mod math;
pub mod fractal;
pub mod render;
pub mod file_io;
pub mod summary;

pub use math::C;
pub use fractal::{RAMP, Viewport, mandelbrot_escapes, ramp_char, ramp_index};
pub use render::{Report, RenderConfig, group_thousands, render_grid, render_to_string};
pub use file_io::{RoundTrip, ScratchFile, round_trip};
pub use summary::{FileIoMetrics, MandelbrotMetrics, Summary, run_file_io, run_mandelbrot};
