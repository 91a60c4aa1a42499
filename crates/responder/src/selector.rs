use std::collections::HashSet;

use rand::Rng;

use crate::{DefaultResponsePool, ResponseTable};

#[derive(Clone, Debug, Default)]
pub struct ResponseSelector {
    table: ResponseTable,
    defaults: DefaultResponsePool,
}

impl ResponseSelector {
    pub fn new(table: ResponseTable, defaults: DefaultResponsePool) -> Self {
        ResponseSelector { table, defaults }
    }

    /// Returns the response of the first known keyword among `words`, or a random default one.
    ///
    /// Words are visited in the set's own iteration order, so when several keywords are
    /// present any of them may win.
    pub fn generate_response<'a, R: Rng + ?Sized>(
        &'a self,
        words: &HashSet<String>,
        rng: &mut R,
    ) -> &'a str {
        words
            .iter()
            .find_map(|word| self.table.lookup(word))
            .unwrap_or_else(|| self.defaults.pick_random(rng))
    }

    pub fn table(&self) -> &ResponseTable {
        &self.table
    }

    pub fn defaults(&self) -> &DefaultResponsePool {
        &self.defaults
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn words(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn selector() -> ResponseSelector {
        ResponseSelector::new(
            ResponseTable::build([
                (vec!["crash", "crashes"], "Which version are you using?".to_string()),
                (vec!["expensive"], "The price is fair.".to_string()),
            ]),
            DefaultResponsePool::build([
                "That sounds odd.\n".to_string(),
                "I need more details.\n".to_string(),
                "Go on.\n".to_string(),
            ]),
        )
    }

    #[test]
    fn keyword_returns_its_response() {
        let selector = selector();
        let mut rng = StdRng::seed_from_u64(0);
        for (keyword, response) in selector.table().iter() {
            assert_eq!(selector.generate_response(&words(&[keyword]), &mut rng), response);
        }
        assert_eq!(
            selector.generate_response(&words(&["my", "app", "crashes"]), &mut rng),
            "Which version are you using?"
        );
    }

    #[test]
    fn one_of_the_keywords_wins() {
        let selector = selector();
        let response = selector.generate_response(
            &words(&["crash", "expensive"]),
            &mut StdRng::seed_from_u64(0),
        );
        assert!(["Which version are you using?", "The price is fair."].contains(&response));
    }

    #[test]
    fn unknown_words_fall_back_to_defaults() {
        let selector = selector();
        let input = words(&["hello", "world"]);
        let mut first = StdRng::seed_from_u64(3);
        let mut second = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let response = selector.generate_response(&input, &mut first);
            assert!(selector.defaults().iter().any(|d| d == response));
            assert_eq!(response, selector.generate_response(&input, &mut second));
        }
    }

    #[test]
    fn empty_input_falls_back_to_defaults() {
        let selector = ResponseSelector::default();
        assert_eq!(
            selector.generate_response(&HashSet::new(), &mut rand::thread_rng()),
            crate::FALLBACK_RESPONSE
        );
    }
}
