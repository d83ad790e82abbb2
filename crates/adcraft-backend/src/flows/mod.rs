//! Request sequencing shared by the service handlers, kept free of bridge
//! plumbing so it can be exercised against an in-memory API.

pub mod listing;
pub mod submission;
pub mod upload;
