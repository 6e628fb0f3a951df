pub mod error;
pub mod item;

pub use error::{Result, ServiceError, StoreError};
pub use item::{Collection, Item, NewItem};
