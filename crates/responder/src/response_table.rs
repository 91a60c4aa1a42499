use std::collections::HashMap;

use log::debug;

/// Keyword to canned response mapping. Read-only once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseTable {
    responses: HashMap<String, String>,
}

impl ResponseTable {
    /// Every keyword of a group is trimmed and mapped to the group's response.
    /// A keyword seen again in a later group is overwritten.
    pub fn build<G, K>(groups: impl IntoIterator<Item = (G, String)>) -> Self
    where
        G: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut responses = HashMap::new();
        for (keywords, response) in groups {
            for keyword in keywords {
                let keyword = keyword.as_ref().trim();
                if keyword.is_empty() {
                    continue;
                }
                if let Some(previous) = responses.insert(keyword.to_owned(), response.clone()) {
                    debug!("Keyword {keyword:?} overwritten (was {previous:?})");
                }
            }
        }
        ResponseTable { responses }
    }

    /// Exact match, no normalization of `word`.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.responses.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.responses
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
