mod default_pool;
mod response_table;
mod selector;

pub use default_pool::{DefaultResponsePool, FALLBACK_RESPONSE};
pub use response_table::ResponseTable;
pub use selector::ResponseSelector;
