//! # harmony-core: Pure Business Logic for Harmony
//!
//! Harmony is a marketplace connecting customers with service providers
//! (poojaris and plumbers). This crate is the **heart** of it: every rule
//! about carts, bookings, providers, and money lives here as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Harmony Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 View / Routing (external)                   │   │
//! │  │   Browse UI ──► Cart UI ──► Checkout UI ──► Profile UI      │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                harmony-store (state store)                  │   │
//! │  │   AppStore mutations + SQLite snapshot persistence          │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │              ★ harmony-core (THIS CRATE) ★                  │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌──────┐ │   │
//! │  │  │  types  │ │  money  │ │  cart   │ │validation│ │share │ │   │
//! │  │  │ Booking │ │  Money  │ │  Cart   │ │  rules   │ │ text │ │   │
//! │  │  │Provider │ │ ₹ paise │ │CartItem │ │  checks  │ │format│ │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────┘ └──────┘ │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (User, ServiceProvider, Booking, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart operations and totals
//! - [`catalog`] - Static starter catalog of providers
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`share`] - Outbound share-message formatting
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic where possible
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use harmony_core::money::Money;
//!
//! // Create money from paise (never from floats!)
//! let price = Money::from_rupees(2500); // ₹2500.00
//!
//! // The flat platform fee splits evenly across cart lines
//! let shares = harmony_core::PLATFORM_FEE.split_even(2);
//! assert_eq!(shares[0].paise(), 2450); // ₹24.50 per line
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod share;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use harmony_core::Money` instead of
// `use harmony_core::money::Money`.

pub use cart::{Cart, CartTotals};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat platform fee charged on every non-empty checkout.
///
/// The fee is added on top of the cart subtotal and split evenly across the
/// cart's line items when bookings are created. Can be overridden per
/// checkout via `CheckoutConfig` in the store crate.
pub const PLATFORM_FEE: Money = Money::from_rupees(49);
