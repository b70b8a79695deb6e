use crate::math::C;

/// Glyphs from empty to dense, indexed by normalised iteration count.
pub const RAMP: &[u8] = b" .:-=+*#%@";

/// Orbits are considered escaped once |z|² reaches this bound.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Rectangle of the complex plane mapped onto the raster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub re_min: f64,
    pub re_max: f64,
    pub im_min: f64,
    pub im_max: f64,
}

impl Viewport {
    pub fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> Self {
        Viewport { re_min, re_max, im_min, im_max }
    }

    /// Parameter `c` sampled for raster cell (x, y). Left/top edges map
    /// exactly onto `re_min`/`im_min`; the far edges are never reached.
    pub fn point_at(&self, x: usize, y: usize, width: usize, height: usize) -> C {
        let re = self.re_min + (x as f64 / width as f64) * (self.re_max - self.re_min);
        let im = self.im_min + (y as f64 / height as f64) * (self.im_max - self.im_min);
        C::new(re, im)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(-2.5, 1.0, -1.0, 1.0)
    }
}

/// Number of z ← z² + c steps taken from z = 0 before |z|² reaches 4,
/// or `max_iter` when the orbit stays bounded.
pub fn mandelbrot_escapes(c: C, max_iter: u32) -> u32 {
    let mut z = C::ZERO;
    for i in 0..max_iter {
        if z.abs_sq() >= ESCAPE_RADIUS_SQ { return i; }
        z = z.mul(z).add(c);
    }
    max_iter
}

pub fn ramp_index(iterations: u32, max_iter: u32) -> usize {
    let len = RAMP.len();
    let scaled = (iterations as f64 / max_iter as f64) * len as f64;
    (scaled as usize).min(len - 1)
}

pub fn ramp_char(iterations: u32, max_iter: u32) -> char {
    RAMP[ramp_index(iterations, max_iter)] as char
}
