use rand::{rngs::StdRng, seq::SliceRandom, Rng, RngCore, SeedableRng};

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Fisher-Yates, in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Uniform permutation of the input, leaving it untouched.
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        self.shuffle(&mut out);
        out
    }

    /// Uniform index into a non-empty slice.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn shuffled_is_a_permutation() {
        let mut rng = RngState::from_seed(7);
        let deck: Vec<u32> = (0..40).collect();
        let out = rng.shuffled(&deck);
        assert_eq!(deck, (0..40).collect::<Vec<u32>>());
        let mut sorted = out.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, deck);
    }

    #[test]
    fn shuffled_reaches_multiple_orderings() {
        let mut rng = RngState::from_seed(11);
        let deck: Vec<u32> = (0..10).collect();
        let mut seen = HashSet::new();
        for _ in 0..50 {
            seen.insert(rng.shuffled(&deck));
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn pick_index_stays_in_bounds() {
        let mut rng = RngState::from_seed(3);
        assert_eq!(rng.pick_index(0), None);
        for _ in 0..100 {
            let idx = rng.pick_index(5).unwrap();
            assert!(idx < 5);
        }
    }
}
