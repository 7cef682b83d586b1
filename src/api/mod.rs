pub mod error;
pub mod http;
pub mod traits;
pub mod types;

#[cfg(test)]
pub mod mock;

pub use error::ApiError;
pub use http::HttpBookingApi;
pub use traits::BookingApi;
pub use types::ClientConfig;
