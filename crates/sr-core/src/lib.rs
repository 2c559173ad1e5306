pub mod error;
pub mod progress;
pub mod types;

pub use error::SeedError;
pub use progress::SeedProgress;
pub use types::*;
