pub mod builder;
pub mod store;

pub use builder::{StoreBuilder, StoreError};
pub use store::WarehouseStore;
