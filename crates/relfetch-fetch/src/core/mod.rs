//! Pure size arithmetic for downloads.

mod validation;

pub use validation::{bytes_to_keep, check_complete, check_content_length};
