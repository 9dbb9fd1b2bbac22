pub mod error;

pub use error::{DeliveryErrorKind, ProviderError};
