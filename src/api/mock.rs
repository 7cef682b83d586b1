//! Recording in-memory stand-in for the Booking API, used by controller
//! tests. Keeps a scripted offer list and a mutable cart so reload
//! semantics behave like the real backend.

use crate::api::error::ApiError;
use crate::api::traits::BookingApi;
use crate::models::{CartItem, CartItemRequest, Offer, SearchCriteria};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

/// One observed API call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Search(SearchCriteria),
    ListCart,
    AddToCart(CartItemRequest),
    RemoveItem(i64),
    ClearCart,
}

#[derive(Default)]
pub struct MockApi {
    calls: Mutex<Vec<Call>>,
    offers: Mutex<Vec<Offer>>,
    cart: Mutex<Vec<CartItem>>,
    next_id: AtomicI64,
    fail_search: AtomicBool,
    fail_list: AtomicBool,
    fail_add: AtomicBool,
    fail_remove: AtomicBool,
    fail_clear: AtomicBool,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    pub fn with_offers(self, offers: Vec<Offer>) -> Self {
        *self.offers.lock().unwrap() = offers;
        self
    }

    pub fn with_cart(self, items: Vec<CartItem>) -> Self {
        let max_id = items.iter().map(|i| i.id).max().unwrap_or(0);
        self.next_id.store(max_id + 1, Ordering::SeqCst);
        *self.cart.lock().unwrap() = items;
        self
    }

    pub fn fail_search(&self) {
        self.fail_search.store(true, Ordering::SeqCst);
    }

    pub fn fail_list(&self) {
        self.fail_list.store(true, Ordering::SeqCst);
    }

    pub fn fail_add(&self) {
        self.fail_add.store(true, Ordering::SeqCst);
    }

    pub fn fail_remove(&self) {
        self.fail_remove.store(true, Ordering::SeqCst);
    }

    pub fn fail_clear(&self) {
        self.fail_clear.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    }
}

#[async_trait]
impl BookingApi for MockApi {
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Offer>, ApiError> {
        self.record(Call::Search(criteria.clone()));
        if self.fail_search.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        Ok(self.offers.lock().unwrap().clone())
    }

    async fn list_cart(&self) -> Result<Vec<CartItem>, ApiError> {
        self.record(Call::ListCart);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        Ok(self.cart.lock().unwrap().clone())
    }

    async fn add_to_cart(&self, item: &CartItemRequest) -> Result<CartItem, ApiError> {
        self.record(Call::AddToCart(item.clone()));
        if self.fail_add.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        let created = CartItem {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            hotel_id: item.hotel_id,
            room_type_id: item.room_type_id,
            rate_id: item.rate_id,
            checkin: item.checkin,
            checkout: item.checkout,
            guests: item.guests,
        };
        self.cart.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn remove_item(&self, item_id: i64) -> Result<(), ApiError> {
        self.record(Call::RemoveItem(item_id));
        if self.fail_remove.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        self.cart.lock().unwrap().retain(|i| i.id != item_id);
        Ok(())
    }

    async fn clear_cart(&self) -> Result<(), ApiError> {
        self.record(Call::ClearCart);
        if self.fail_clear.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        self.cart.lock().unwrap().clear();
        Ok(())
    }
}
