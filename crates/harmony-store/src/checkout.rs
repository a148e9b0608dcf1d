//! # Checkout Simulation
//!
//! Turns the cart into bookings. There is no real payment gateway: the
//! "payment" is a configurable artificial pause, after which one pending
//! booking is created per cart line and the cart is cleared.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Flow                                │
//! │                                                                     │
//! │  checkout(request, config)                                          │
//! │       │                                                             │
//! │       ├─ session user present?          ── no ──► SignInRequired    │
//! │       ├─ date AND time supplied?        ── no ──► Required{field}   │
//! │       ├─ cart non-empty?                ── no ──► EmptyCart         │
//! │       │          (no mutation has happened up to this point)        │
//! │       ▼                                                             │
//! │  sleep(processing_delay)        ← simulated payment processing      │
//! │       ▼                                                             │
//! │  fee shares = platform_fee.split_even(cart.len())                   │
//! │       ▼                                                             │
//! │  for each cart line (in order):                                     │
//! │      booking = pending, total = line price + fee share              │
//! │      prepend to booking list, persist                               │
//! │       ▼                                                             │
//! │  clear cart, return receipt                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use tracing::{debug, info};

use harmony_core::{validation, Booking, CoreError, Money, PaymentMethod, PLATFORM_FEE};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::store::AppStore;

// =============================================================================
// Configuration
// =============================================================================

/// Checkout tuning knobs.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Flat fee added on top of the cart subtotal and split across lines.
    pub platform_fee: Money,

    /// Simulated payment-processing pause before bookings are created.
    /// Tests run with `Duration::ZERO`.
    pub processing_delay: Duration,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        CheckoutConfig {
            platform_fee: PLATFORM_FEE,
            processing_delay: Duration::from_secs(2),
        }
    }
}

// =============================================================================
// Request / Receipt
// =============================================================================

/// What the checkout form submits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Requested service date. Required; `None` fails validation.
    pub date: Option<NaiveDate>,

    /// Requested service time. Required; `None` fails validation.
    pub time: Option<NaiveTime>,

    pub payment_method: PaymentMethod,
}

/// Summary returned after a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    /// Ids of the created bookings, in cart order.
    pub booking_ids: Vec<String>,
    pub subtotal: Money,
    pub platform_fee: Money,
    pub total: Money,
}

// =============================================================================
// Checkout
// =============================================================================

impl AppStore {
    /// Runs the checkout simulation over the current cart.
    ///
    /// Creates one pending booking per cart line, each carrying its frozen
    /// service snapshot plus an even share of the platform fee, then
    /// clears the cart. All validation happens before any mutation or the
    /// simulated delay, so a failed checkout leaves the store untouched.
    pub async fn checkout(
        &mut self,
        request: CheckoutRequest,
        config: &CheckoutConfig,
    ) -> StoreResult<CheckoutReceipt> {
        debug!(lines = self.cart.len(), "Checkout requested");

        let customer = self.user.clone().ok_or(CoreError::SignInRequired)?;
        let (date, time) = validation::validate_schedule(request.date, request.time)?;

        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        let totals = self.cart.totals(config.platform_fee);

        // Simulated payment processing; cancellable only by dropping the
        // future (the page-navigation analogue), not by user action
        tokio::time::sleep(config.processing_delay).await;

        let items = self.cart.items.clone();
        let fee_shares = config.platform_fee.split_even(items.len());

        let mut booking_ids = Vec::with_capacity(items.len());
        for (item, fee_share) in items.iter().zip(fee_shares) {
            let booking = Booking::for_cart_item(
                &customer,
                item,
                date,
                time,
                request.payment_method,
                fee_share,
            );
            booking_ids.push(booking.id.clone());
            self.add_booking(booking).await?;
        }

        self.clear_cart();

        info!(
            bookings = booking_ids.len(),
            subtotal = %totals.subtotal,
            total = %totals.total,
            "Checkout complete"
        );

        Ok(CheckoutReceipt {
            booking_ids,
            subtotal: totals.subtotal,
            platform_fee: totals.platform_fee,
            total: totals.total,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
