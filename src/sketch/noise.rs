use ::noise::NoiseFn as _;

/// Deterministic, continuous pseudo-random function of three inputs.
///
/// Samples are expected in `[-1, 1]`; identical inputs must give identical outputs.
pub trait NoiseField: Send + Sync {
    fn sample(&self, a: f64, b: f64, c: f64) -> f64;
}

impl<F> NoiseField for F
where
    F: Fn(f64, f64, f64) -> f64 + Send + Sync,
{
    fn sample(&self, a: f64, b: f64, c: f64) -> f64 {
        self(a, b, c)
    }
}

/// 3D simplex noise, seeded once at construction.
#[derive(Clone)]
pub struct SimplexField {
    seed: u32,
    inner: ::noise::Simplex,
}

impl SimplexField {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            inner: ::noise::Simplex::new(seed),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl std::fmt::Debug for SimplexField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplexField")
            .field("seed", &self.seed)
            .finish()
    }
}

impl NoiseField for SimplexField {
    fn sample(&self, a: f64, b: f64, c: f64) -> f64 {
        self.inner.get([a, b, c]).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/noise.rs"]
mod tests;
