//! UI Components for the Image Drop application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Drop zone, file picker and convert button
//! - [`FileList`] - Notices and pending file rows

mod hero;
mod upload;
mod file_list;
mod notices;
mod footer;

pub use hero::*;
pub use upload::*;
pub use file_list::*;
pub use notices::*;
pub use footer::*;
