use crate::api::{ApiError, BookingApi};
use crate::controllers::{BusyGuard, LoadingIndicator};
use crate::models::{CartItem, CartItemRequest, Offer, SearchCriteria};
use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

/// Client-side rejection, surfaced before any request goes out
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Checkout date must be after checkin date")]
    CheckoutNotAfterCheckin,

    #[error("Check-in date cannot be in the past")]
    CheckinInPast,

    #[error("At least one guest is required")]
    NoGuests,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Check criteria against the rules the original form enforced:
/// checkin strictly before checkout, nothing before today, at least
/// one guest.
pub fn validate(criteria: &SearchCriteria, today: NaiveDate) -> Result<(), ValidationError> {
    if criteria.guests == 0 {
        return Err(ValidationError::NoGuests);
    }
    if criteria.checkin < today {
        return Err(ValidationError::CheckinInPast);
    }
    if criteria.checkout <= criteria.checkin {
        return Err(ValidationError::CheckoutNotAfterCheckin);
    }
    Ok(())
}

/// Drives the search flow: validate, fetch offers, forward a chosen
/// offer into the cart. Constructed once with its collaborators
/// injected; holds no state between operations.
pub struct SearchController<'a, A: BookingApi> {
    api: &'a A,
    loading: &'a dyn LoadingIndicator,
    today: NaiveDate,
}

impl<'a, A: BookingApi> SearchController<'a, A> {
    pub fn new(api: &'a A, loading: &'a dyn LoadingIndicator, today: NaiveDate) -> Self {
        Self {
            api,
            loading,
            today,
        }
    }

    /// Validate and run one search. Invalid criteria never reach the
    /// network; the loading indicator is released on every exit path.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Offer>, SearchError> {
        validate(criteria, self.today)?;

        let _busy = BusyGuard::acquire(self.loading);
        debug!(
            "Searching {} for {} guest(s), {} to {}",
            criteria.city, criteria.guests, criteria.checkin, criteria.checkout
        );
        let offers = self.api.search(criteria).await?;
        info!("Search returned {} offer(s)", offers.len());
        Ok(offers)
    }

    /// Forward an offer into the cart, bound to the criteria that
    /// produced it. Deliberately not idempotent: adding twice creates
    /// two cart entries, exactly like the original.
    pub async fn add_to_cart(
        &self,
        offer: &Offer,
        criteria: &SearchCriteria,
    ) -> Result<CartItem, ApiError> {
        let request = CartItemRequest::from_offer(offer, criteria);
        let item = self.api.add_to_cart(&request).await?;
        info!("Added cart item {} for hotel {}", item.id, offer.hotel.name);
        Ok(item)
    }
}
