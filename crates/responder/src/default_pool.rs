use rand::Rng;

/// Used when no default responses could be loaded.
pub const FALLBACK_RESPONSE: &str = "Could you elaborate on that?";

/// Responses used when none of the input words is a known keyword.
/// Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultResponsePool(Vec<String>);

impl DefaultResponsePool {
    pub fn build(entries: impl IntoIterator<Item = String>) -> Self {
        let mut entries: Vec<String> = entries.into_iter().collect();
        if entries.is_empty() {
            entries.push(FALLBACK_RESPONSE.to_string());
        }
        DefaultResponsePool(entries)
    }

    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.gen_range(0..self.0.len());
        &self.0[index]
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for DefaultResponsePool {
    fn default() -> Self {
        DefaultResponsePool::build([])
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn pool() -> DefaultResponsePool {
        DefaultResponsePool::build(["Tell me more.\n".to_string(), "Go on.\n".to_string()])
    }

    #[test]
    fn empty_pool_gets_fallback() {
        let pool = DefaultResponsePool::build([]);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(0), Some(FALLBACK_RESPONSE));
        assert_eq!(pool.pick_random(&mut rand::thread_rng()), FALLBACK_RESPONSE);
    }

    #[test]
    fn keeps_insertion_order() {
        assert_eq!(
            pool().iter().collect::<Vec<_>>(),
            vec!["Tell me more.\n", "Go on.\n"]
        );
    }

    #[test]
    fn fixed_source_picks_fixed_index() {
        // Constant draws land in the lower and upper half of the range.
        assert_eq!(pool().pick_random(&mut StepRng::new(0, 0)), "Tell me more.\n");
        assert_eq!(pool().pick_random(&mut StepRng::new(1 << 63, 0)), "Go on.\n");
    }

    #[test]
    fn seeded_picks_are_reproducible() {
        let pool = pool();
        let mut first = StdRng::seed_from_u64(7);
        let mut second = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(pool.pick_random(&mut first), pool.pick_random(&mut second));
        }
    }

    #[test]
    fn every_entry_is_reachable() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(1);
        let picked: Vec<&str> = (0..200).map(|_| pool.pick_random(&mut rng)).collect();
        assert!(pool.iter().all(|entry| picked.contains(&entry)));
    }
}
