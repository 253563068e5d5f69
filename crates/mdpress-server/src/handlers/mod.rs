//! Request handlers.

pub(crate) mod posts;
pub(crate) mod upload;
