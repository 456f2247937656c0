//! Uniform random selection of one response from a topic's candidates.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Picks one response text uniformly at random. The random source is owned
/// so tests can construct a seeded picker and assert exact output.
pub struct ResponsePicker {
    rng: StdRng,
}

impl ResponsePicker {
    /// Entropy-seeded picker for production use.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic picker: the same seed yields the same draw sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws one element uniformly over `[0, len)`. A single-element slice
    /// always yields that element. Returns None only for an empty slice,
    /// which validated knowledge bases never produce.
    pub fn pick<'a>(&mut self, responses: &'a [String]) -> Option<&'a str> {
        responses.choose(&mut self.rng).map(String::as_str)
    }
}

impl Default for ResponsePicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responses(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_response_is_always_returned() {
        let only = responses(&["the one"]);
        let mut picker = ResponsePicker::seeded(3);
        for _ in 0..32 {
            assert_eq!(picker.pick(&only), Some("the one"));
        }
    }

    #[test]
    fn test_empty_slice_yields_none() {
        let mut picker = ResponsePicker::seeded(3);
        assert_eq!(picker.pick(&[]), None);
    }

    #[test]
    fn test_same_seed_reproduces_the_same_sequence() {
        let candidates = responses(&["a", "b", "c", "d"]);
        let mut left = ResponsePicker::seeded(42);
        let mut right = ResponsePicker::seeded(42);
        for _ in 0..64 {
            assert_eq!(left.pick(&candidates), right.pick(&candidates));
        }
    }

    #[test]
    fn test_draws_cover_all_indices_roughly_uniformly() {
        let candidates = responses(&["a", "b", "c", "d"]);
        let mut picker = ResponsePicker::seeded(7);
        let mut counts = [0usize; 4];
        let trials = 4_000;
        for _ in 0..trials {
            let picked = picker.pick(&candidates).expect("non-empty");
            let idx = candidates.iter().position(|c| c == picked).expect("known");
            counts[idx] += 1;
        }
        // Uniform expectation is 1000 per index; allow a wide band since the
        // draw is seeded but the generator is not ours to pin down.
        for (idx, &count) in counts.iter().enumerate() {
            assert!(
                (700..=1300).contains(&count),
                "index {} drawn {} times out of {}",
                idx,
                count,
                trials
            );
        }
    }
}
