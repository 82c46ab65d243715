//! Source of uniform random values driving generation

use rand::{Rng, RngCore};

/// Uniform values in [0, 1).
///
/// Every `rand` generator implements this; tests can script exact draws.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Biased coin: true with probability `p`
    fn coin_flip(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// Uniform index in `0..n` (`n` must be non-zero)
    fn pick(&mut self, n: usize) -> usize {
        ((self.next_unit() * n as f64) as usize).min(n - 1)
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}


#[cfg(test)]
mod tests {
    use super::scripted::Scripted;
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rng_values_in_unit_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1_000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_coin_flip_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(!rng.coin_flip(0.0));
            assert!(rng.coin_flip(1.0));
        }
    }

    #[test]
    fn test_pick_bounds() {
        let mut source = Scripted::new(&[0.0, 0.49, 0.5, 0.999_999], 0.0);
        assert_eq!(source.pick(2), 0);
        assert_eq!(source.pick(2), 0);
        assert_eq!(source.pick(2), 1);
        assert_eq!(source.pick(2), 1);
        assert_eq!(source.consumed(), 4);
    }
}
