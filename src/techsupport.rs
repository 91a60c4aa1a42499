use std::collections::HashSet;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use responder::ResponseSelector;

use config::Config;
use loader::{load_default_pool, load_response_table};
use source::{FileSource, LineSource};

pub(crate) mod config;
pub(crate) mod conversation;
mod loader;
mod source;
pub(crate) mod store;

/// Response selection together with the random source for default responses.
pub struct Responder {
    selector: ResponseSelector,
    rng: StdRng,
}

impl Responder {
    pub fn new(selector: ResponseSelector, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                info!("Using fixed seed {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Responder { selector, rng }
    }

    pub fn from_sources(
        keywords: &impl LineSource,
        defaults: &impl LineSource,
        seed: Option<u64>,
    ) -> Self {
        let selector =
            ResponseSelector::new(load_response_table(keywords), load_default_pool(defaults));
        Self::new(selector, seed)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::from_sources(
            &FileSource::new(&config.responses_file),
            &FileSource::new(&config.default_responses_file),
            config.seed,
        )
    }

    pub fn respond(&mut self, words: &HashSet<String>) -> &str {
        self.selector.generate_response(words, &mut self.rng)
    }
}
