use crate::api::error::ApiError;
use crate::models::{CartItem, CartItemRequest, Offer, SearchCriteria};
use async_trait::async_trait;

/// Booking API collaborator: search plus the cart operations.
/// A trait seam so controllers can be driven against a recording mock
/// in tests instead of a live backend.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// POST the search criteria and get back the matching offers
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Offer>, ApiError>;

    /// Fetch the full cart contents
    async fn list_cart(&self) -> Result<Vec<CartItem>, ApiError>;

    /// Add one line item to the cart
    async fn add_to_cart(&self, item: &CartItemRequest) -> Result<CartItem, ApiError>;

    /// Delete a single cart item by id
    async fn remove_item(&self, item_id: i64) -> Result<(), ApiError>;

    /// Delete every cart item
    async fn clear_cart(&self) -> Result<(), ApiError>;
}
