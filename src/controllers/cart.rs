use crate::api::{ApiError, BookingApi};
use crate::controllers::ConfirmPrompt;
use crate::view::{cart_view, CartView};
use tracing::info;

/// What happened to a clear request
#[derive(Debug)]
pub enum ClearOutcome {
    /// User said no; nothing was sent
    Declined,
    /// Cart cleared server-side, reloaded view attached
    Cleared(CartView),
}

/// Steps a real checkout would take; shown instead of doing anything
pub const CHECKOUT_NOTICE: &str = "Checkout is not implemented yet. \
A full implementation would:\n  1. Create a guest\n  2. Create a booking\n  3. Process payment";

/// Drives the cart flow. Every mutation goes through the backend and
/// is observed by re-fetching; nothing is removed optimistically.
pub struct CartController<'a, A: BookingApi> {
    api: &'a A,
    confirm: &'a dyn ConfirmPrompt,
}

impl<'a, A: BookingApi> CartController<'a, A> {
    pub fn new(api: &'a A, confirm: &'a dyn ConfirmPrompt) -> Self {
        Self { api, confirm }
    }

    /// Fetch the cart and render it
    pub async fn load(&self) -> Result<CartView, ApiError> {
        let items = self.api.list_cart().await?;
        Ok(cart_view(&items))
    }

    /// Item count for the cart badge shared with the search flow
    pub async fn count(&self) -> Result<usize, ApiError> {
        Ok(self.api.list_cart().await?.len())
    }

    /// Remove one item, then reload. The displayed cart only changes
    /// after the delete round trip is confirmed.
    pub async fn remove(&self, item_id: i64) -> Result<CartView, ApiError> {
        self.api.remove_item(item_id).await?;
        info!("Removed cart item {}", item_id);
        self.load().await
    }

    /// Clear the whole cart after an explicit confirmation. Declining
    /// sends nothing and leaves the cart untouched.
    pub async fn clear(&self) -> Result<ClearOutcome, ApiError> {
        if !self
            .confirm
            .confirm("Are you sure you want to clear your cart?")
        {
            info!("Clear declined");
            return Ok(ClearOutcome::Declined);
        }
        self.api.clear_cart().await?;
        info!("Cart cleared");
        Ok(ClearOutcome::Cleared(self.load().await?))
    }

    /// Out of scope; only describes what a full implementation would do
    pub fn checkout(&self) -> &'static str {
        CHECKOUT_NOTICE
    }
}
