//! Injected randomness.
//!
//! Every generator and phrase picker takes a `&mut R where R: RandomSource`
//! instead of reaching for a thread-local RNG, so a seeded `StdRng` makes the
//! whole quiz reproducible. Any `rand::Rng` is a `RandomSource`.
//!
//! All helpers consume exactly one `next_f64()` draw, so the number of draws a
//! question costs depends only on the branch taken.

use rand::Rng;

/// Source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Uniform integer in `[1, max]`. `max == 0` is treated as 1.
pub fn random_int<R: RandomSource + ?Sized>(rng: &mut R, max: u32) -> u32 {
    let max = max.max(1);
    let n = (rng.next_f64() * max as f64).floor() as u32 + 1;
    n.min(max)
}

/// Uniform float in `[0, max)` rounded to one decimal place.
pub fn random_tenths<R: RandomSource + ?Sized>(rng: &mut R, max: u32) -> f64 {
    round_to(rng.next_f64() * max as f64, 1)
}

/// True when the draw lands strictly above `threshold`
/// (probability `1 - threshold`).
pub fn roll_above<R: RandomSource + ?Sized>(rng: &mut R, threshold: f64) -> bool {
    rng.next_f64() > threshold
}

/// Uniformly pick one element, or `None` for an empty slice.
pub fn pick<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = (rng.next_f64() * items.len() as f64).floor() as usize;
    items.get(idx.min(items.len() - 1))
}

/// Pick a phrase from a static table; empty tables yield `""`.
pub fn pick_phrase<R: RandomSource + ?Sized>(rng: &mut R, table: &[&'static str]) -> &'static str {
    pick(rng, table).copied().unwrap_or("")
}

/// 24-bit salt used to make question identifiers unique within a run.
pub fn salt<R: RandomSource + ?Sized>(rng: &mut R) -> u32 {
    (rng.next_f64() * 16_777_216.0) as u32
}

/// Round half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_int_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for max in [1u32, 2, 10, 1000] {
            for _ in 0..500 {
                let n = random_int(&mut rng, max);
                assert!((1..=max).contains(&n), "{n} outside 1..={max}");
            }
        }
    }

    #[test]
    fn zero_draw_hits_lower_bounds() {
        // StepRng(0, 0) always yields 0.0 from gen::<f64>().
        let mut rng = StepRng::new(0, 0);
        assert_eq!(random_int(&mut rng, 10), 1);
        assert_eq!(random_tenths(&mut rng, 10), 0.0);
        assert!(!roll_above(&mut rng, 0.7));
        assert_eq!(pick(&mut rng, &[3, 4, 5][..]), Some(&3));
        assert_eq!(salt(&mut rng), 0);
    }

    #[test]
    fn pick_from_empty_slice_is_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [u8; 0] = [];
        assert_eq!(pick(&mut rng, &empty[..]), None);
        assert_eq!(pick_phrase(&mut rng, &[]), "");
    }

    #[test]
    fn round_to_matches_fixed_point_rendering() {
        assert_eq!(round_to(0.1 + 0.2, 2), 0.3);
        assert_eq!(round_to(12.345_67, 1), 12.3);
        assert_eq!(round_to(-2.25, 1), -2.3);
    }
}
