//! Injectable randomness for the generators.
//!
//! Production code passes `rand::rng()`; tests pass a seeded `StdRng` or a
//! `ScriptedSource` when they need to assert exact operands.

use rand::Rng;

/// The one operation every generator needs: a uniform integer in `[min, max]`.
pub trait RandomSource {
    /// Callers guarantee `min <= max`.
    fn next_in_range(&mut self, min: u32, max: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        self.random_range(min..=max)
    }
}

/// Picks one element uniformly. `items` must be non-empty.
pub fn pick<T: Copy, S: RandomSource + ?Sized>(rng: &mut S, items: &[T]) -> T {
    let last = (items.len() - 1) as u32;
    items[rng.next_in_range(0, last) as usize]
}

/// Replays a fixed sequence of draws, clamped into the requested range.
#[cfg(test)]
pub struct ScriptedSource {
    values: std::collections::VecDeque<u32>,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        let value = self
            .values
            .pop_front()
            .expect("scripted source ran out of values");
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rng_draws_stay_in_inclusive_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws: Vec<u32> = (0..500).map(|_| rng.next_in_range(3, 5)).collect();
        assert!(draws.iter().all(|v| (3..=5).contains(v)));
        assert!(draws.contains(&3) && draws.contains(&5));
    }

    #[test]
    fn test_degenerate_range_returns_the_bound() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(rng.next_in_range(9, 9), 9);
    }

    #[test]
    fn test_pick_uses_drawn_index() {
        let mut source = ScriptedSource::new([2, 0]);
        assert_eq!(pick(&mut source, &['a', 'b', 'c']), 'c');
        assert_eq!(pick(&mut source, &['a', 'b', 'c']), 'a');
    }
}
