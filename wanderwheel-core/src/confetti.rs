//! Particle layout for the celebration overlay.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    /// Horizontal start position in pixels.
    pub x: f64,
    /// Start height above the viewport in pixels.
    pub lift: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub delay_ms: u32,
    pub fall_ms: u32,
    pub drift: f64,
    pub color: usize,
}

/// Scatter `count` particles across a viewport of the given size.
///
/// The same seed always produces the same layout. `colors` is the palette
/// length; each particle's `color` indexes into it.
#[must_use]
pub fn scatter(seed: u64, count: u16, viewport: (u32, u32), colors: usize) -> Vec<Particle> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let width = f64::from(viewport.0.max(1));
    let height = f64::from(viewport.1.max(1));
    let colors = colors.max(1);

    (0..count)
        .map(|_| Particle {
            x: rng.gen_range(0.0..width),
            lift: rng.gen_range(0.0..height / 4.0),
            width: rng.gen_range(5.0..20.0),
            height: rng.gen_range(10.0..30.0),
            rotation: rng.gen_range(0.0..360.0),
            delay_ms: rng.gen_range(0..2500),
            fall_ms: rng.gen_range(3000..6000),
            drift: rng.gen_range(-80.0..80.0),
            color: rng.gen_range(0..colors),
        })
        .collect()
}
