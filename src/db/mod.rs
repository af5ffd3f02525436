pub mod entries;
pub mod pool;

pub use entries::EntryStore;
pub use pool::create_pool;
