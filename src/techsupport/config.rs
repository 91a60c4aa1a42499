use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Keyword groups, each followed by its response line.
    #[serde(default = "default_responses_file")]
    pub responses_file: PathBuf,

    /// Blocks of lines separated by empty lines.
    #[serde(default = "default_default_responses_file")]
    pub default_responses_file: PathBuf,

    /// Makes picking default responses repeatable. Useful for testing.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_responses_file() -> PathBuf {
    "responses.txt".into()
}

fn default_default_responses_file() -> PathBuf {
    "default.txt".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            responses_file: default_responses_file(),
            default_responses_file: default_default_responses_file(),
            seed: None,
        }
    }
}
