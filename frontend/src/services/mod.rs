//! Browser services.
//!
//! # Services
//!
//! - [`upload`] - Multipart upload to the conversion server
//! - [`page`] - Replacing the current document with the server's answer

pub mod upload;
pub mod page;

pub use upload::*;
pub use page::*;
