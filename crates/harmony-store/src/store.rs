//! # Application State Store
//!
//! `AppStore` is the single source of truth for session user, cart,
//! bookings, and provider catalog. It is an explicit object with an
//! explicit hydrate-on-open lifecycle, passed by reference to consumers;
//! there are no ambient globals.
//!
//! ## Mutation Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       AppStore Operations                           │
//! │                                                                     │
//! │  Operation                 Persisted?   Miss policy                 │
//! │  ─────────────────────     ──────────   ─────────────────────       │
//! │  set_user / sign_in/out    yes (user)   n/a (wholesale replace)     │
//! │  add_to_cart               NO           n/a (pure append)           │
//! │  remove_from_cart          NO           tolerant no-op              │
//! │  clear_cart                NO           idempotent                  │
//! │  add_booking               yes          n/a (always succeeds)       │
//! │  update_booking_status     yes          tolerant no-op              │
//! │  transition_booking_status yes          tolerant no-op + validated  │
//! │  update_provider           yes          tolerant no-op              │
//! │                                                                     │
//! │  Every persisted mutation awaits its snapshot write before          │
//! │  returning, so reads after a mutation always observe it and the     │
//! │  durable copy is never behind by more than the in-flight call.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Hydration
//! On open, each persisted slice is rehydrated from storage with
//! fallbacks: user → none, bookings → empty, providers → the starter
//! catalog (which is then written so first run and later runs observe the
//! same storage). The cart is never persisted: reopening the store always
//! starts with an empty cart.

use tracing::{debug, info};

use harmony_core::catalog::seed_providers;
use harmony_core::{Booking, BookingStatus, Cart, CartItem, CoreError, ServiceProvider, User, UserRole};

use crate::error::StoreResult;
use crate::pool::Database;
use crate::snapshot::keys;

// =============================================================================
// AppStore
// =============================================================================

/// The application state store.
pub struct AppStore {
    pub(crate) db: Database,
    pub(crate) user: Option<User>,
    pub(crate) cart: Cart,
    pub(crate) bookings: Vec<Booking>,
    pub(crate) providers: Vec<ServiceProvider>,
}

impl AppStore {
    /// Opens the store over the given database, hydrating all persisted
    /// slices.
    pub async fn open(db: Database) -> StoreResult<Self> {
        let snapshots = db.snapshots();

        let user = match snapshots.get(keys::USER).await? {
            Some(json) => Some(serde_json::from_str(&json)?),
            None => None,
        };

        let bookings: Vec<Booking> = match snapshots.get(keys::BOOKINGS).await? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };

        let (providers, first_run) = match snapshots.get(keys::PROVIDERS).await? {
            Some(json) => (serde_json::from_str(&json)?, false),
            None => (seed_providers(), true),
        };

        let store = AppStore {
            db,
            user,
            cart: Cart::new(),
            bookings,
            providers,
        };

        if first_run {
            info!(
                providers = store.providers.len(),
                "No provider snapshot found, seeding starter catalog"
            );
            store.persist_providers().await?;
        }

        debug!(
            signed_in = store.user.is_some(),
            bookings = store.bookings.len(),
            providers = store.providers.len(),
            "Store hydrated"
        );

        Ok(store)
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// The current session user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a session user is present. The routing collaborator uses
    /// this to gate the profile view.
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// The volatile shopping cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// All bookings, newest first.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// The provider catalog.
    pub fn providers(&self) -> &[ServiceProvider] {
        &self.providers
    }

    /// Looks up a provider by id.
    pub fn provider(&self, id: &str) -> Option<&ServiceProvider> {
        self.providers.iter().find(|p| p.id == id)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Replaces the session identity wholesale.
    ///
    /// `Some(user)` writes the user snapshot; `None` REMOVES the persisted
    /// row entirely (not an empty value).
    pub async fn set_user(&mut self, user: Option<User>) -> StoreResult<()> {
        match &user {
            Some(u) => {
                let json = serde_json::to_string(u)?;
                self.db.snapshots().put(keys::USER, &json).await?;
            }
            None => {
                self.db.snapshots().delete(keys::USER).await?;
            }
        }
        self.user = user;
        Ok(())
    }

    /// Simulated sign-in: builds a session user with a fresh id and stores
    /// it, replacing any prior session. There is no password check.
    pub async fn sign_in(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> StoreResult<&User> {
        let user = User::new(name, email, role);
        info!(user_id = %user.id, ?role, "Signing in");
        self.set_user(Some(user)).await?;
        Ok(self.user.as_ref().expect("user was just set"))
    }

    /// Signs out: clears the session user from the store and from durable
    /// storage.
    pub async fn sign_out(&mut self) -> StoreResult<()> {
        info!("Signing out");
        self.set_user(None).await
    }

    // =========================================================================
    // Cart (volatile, never persisted)
    // =========================================================================

    /// Appends an item to the cart. Duplicates by service id are not
    /// prevented at this layer; [`Cart::contains_service`] exists for
    /// UI-level dedup before calling.
    pub fn add_to_cart(&mut self, item: CartItem) {
        debug!(service_id = %item.service.id, "Adding to cart");
        self.cart.add(item);
    }

    /// Removes all cart entries whose service id matches. No-op when none
    /// match.
    pub fn remove_from_cart(&mut self, service_id: &str) {
        debug!(service_id = %service_id, "Removing from cart");
        self.cart.remove_by_service(service_id);
    }

    /// Empties the cart. Idempotent.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // =========================================================================
    // Bookings
    // =========================================================================

    /// Prepends a booking (newest first) and persists the booking list.
    ///
    /// No validation is performed here; the caller supplies valid fields.
    pub async fn add_booking(&mut self, booking: Booking) -> StoreResult<()> {
        info!(booking_id = %booking.id, provider_id = %booking.provider_id, "Adding booking");
        self.bookings.insert(0, booking);
        self.persist_bookings().await
    }

    /// Permissive status update: replaces the status of the matching
    /// booking without consulting the status machine. Tolerant no-op when
    /// the id is unknown.
    pub async fn update_booking_status(
        &mut self,
        id: &str,
        status: BookingStatus,
    ) -> StoreResult<()> {
        let Some(booking) = self.bookings.iter_mut().find(|b| b.id == id) else {
            debug!(booking_id = %id, "Status update for unknown booking ignored");
            return Ok(());
        };

        info!(booking_id = %id, from = ?booking.status, to = ?status, "Updating booking status");
        booking.status = status;
        self.persist_bookings().await
    }

    /// Validating status update: rejects transitions the status machine
    /// forbids (e.g. out of completed or cancelled). Still a tolerant
    /// no-op when the id is unknown.
    pub async fn transition_booking_status(
        &mut self,
        id: &str,
        status: BookingStatus,
    ) -> StoreResult<()> {
        let Some(booking) = self.bookings.iter().find(|b| b.id == id) else {
            debug!(booking_id = %id, "Status transition for unknown booking ignored");
            return Ok(());
        };

        if !booking.status.can_transition_to(status) {
            return Err(CoreError::InvalidStatusTransition {
                from: booking.status,
                to: status,
            }
            .into());
        }

        self.update_booking_status(id, status).await
    }

    // =========================================================================
    // Providers
    // =========================================================================

    /// Replaces the full provider record matching `provider.id` and
    /// persists the catalog. Tolerant no-op when no record matches.
    ///
    /// Used both for profile edits and for service catalog add/edit/delete:
    /// the caller computes the new full service list (see
    /// [`ServiceProvider::upsert_service`] and
    /// [`ServiceProvider::remove_service`]) and submits the whole record.
    pub async fn update_provider(&mut self, provider: ServiceProvider) -> StoreResult<()> {
        let Some(slot) = self.providers.iter_mut().find(|p| p.id == provider.id) else {
            debug!(provider_id = %provider.id, "Update for unknown provider ignored");
            return Ok(());
        };

        info!(provider_id = %provider.id, "Updating provider record");
        *slot = provider;
        self.persist_providers().await
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    pub(crate) async fn persist_bookings(&self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.bookings)?;
        self.db.snapshots().put(keys::BOOKINGS, &json).await?;
        Ok(())
    }

    pub(crate) async fn persist_providers(&self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.providers)?;
        self.db.snapshots().put(keys::PROVIDERS, &json).await?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
