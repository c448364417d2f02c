mod loader;
mod store;

pub use loader::{builtin_catalog, load_catalog, parse_catalog, REQUIRED_COLUMNS};
pub use store::{FoodCatalog, FUZZY_MATCH_THRESHOLD, FUZZY_SUGGESTION_LIMIT};
