pub mod api;
pub mod conventional;
pub mod error;
pub mod source;
pub mod view;

pub use error::{GitRecentError, Result};
