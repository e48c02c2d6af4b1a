pub mod clock;
pub mod entry;
pub mod store;

pub use entry::*;
pub use store::*;
