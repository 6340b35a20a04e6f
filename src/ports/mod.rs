pub mod reading_store;

pub use reading_store::ReadingStore;
