//! Core types for the contact notifier.
//!
//! Everything here lives for a single invocation: a [`ProxyRequest`] is
//! decoded into a [`ContactRequest`], rendered into a [`NotificationMessage`],
//! and answered with a [`ProxyResponse`].

pub mod message;
pub mod proxy;
pub mod request;

pub use message::{MISSING_FIELD_PLACEHOLDER, NotificationMessage, SUBJECT_PREFIX};
pub use proxy::{ProxyRequest, ProxyResponse};
pub use request::{ContactRequest, DecodeError};
