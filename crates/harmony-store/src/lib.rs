//! # harmony-store: Application State Store for Harmony
//!
//! The single source of truth for session user, shopping cart, booking
//! list, and provider catalog. Every mutation is immediately visible to
//! subsequent reads and (except for the volatile cart) written through to
//! durable storage as a JSON snapshot.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Harmony Data Flow                             │
//! │                                                                     │
//! │  View layer action (add to cart, confirm booking, save profile)     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 harmony-store (THIS CRATE)                  │   │
//! │  │                                                             │   │
//! │  │   ┌────────────┐   ┌──────────────┐   ┌──────────────┐     │   │
//! │  │   │  AppStore  │   │  Snapshot    │   │  Migrations  │     │   │
//! │  │   │ (store.rs) │──►│  Repository  │   │  (embedded)  │     │   │
//! │  │   │  checkout  │   │ (key→JSON)   │   │ 001_init.sql │     │   │
//! │  │   └────────────┘   └──────┬───────┘   └──────────────┘     │   │
//! │  └──────────────────────────┼──────────────────────────────────┘   │
//! │                             ▼                                       │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │  SQLite `snapshots` table                                   │   │
//! │  │  harmony_user | harmony_bookings | harmony_providers        │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`snapshot`] - Key-value snapshot repository and the fixed key names
//! - [`store`] - The `AppStore` and its mutation contract
//! - [`checkout`] - Checkout simulation (fee split, simulated delay)
//! - [`error`] - Storage and store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use harmony_store::{AppStore, Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("harmony.db")).await?;
//! let mut store = AppStore::open(db).await?;
//!
//! let user = store.sign_in("John Doe", "user@example.com", UserRole::Customer).await?;
//! store.add_to_cart(item);
//! let receipt = store.checkout(request, &CheckoutConfig::default()).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod snapshot;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use checkout::{CheckoutConfig, CheckoutReceipt, CheckoutRequest};
pub use error::{DbError, StoreError};
pub use pool::{Database, DbConfig};
pub use snapshot::SnapshotRepository;
pub use store::AppStore;
