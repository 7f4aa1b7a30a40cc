mod structs;

pub use structs::{CacheEntry, PlayerCache};
