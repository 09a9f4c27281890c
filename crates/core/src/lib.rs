#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod paging;
pub mod time;

pub use error::Error;
pub use paging::{Paging, PagingError};
pub use time::Clock;
