use thiserror::Error;

use crate::paging::PagingError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Paging(#[from] PagingError),
}
