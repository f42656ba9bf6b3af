//! AI Initiative Registry form submissions.
//!
//! Validates a posted form, filters honeypot-filled bot traffic and relays
//! the rest to GitHub as a labelled issue.

mod body;
pub(crate) mod error;
mod handler;
mod model;
pub(crate) mod reply;

pub use handler::SubmissionHandler;
pub use reply::Reply;
