//! # Domain Types
//!
//! Core domain types used throughout Harmony.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │      User       │   │ ServiceProvider │   │     Booking     │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id             │   │  id             │   │  id             │   │
//! │  │  role           │   │  kind           │   │  status         │   │
//! │  │  email          │   │  services[]     │   │  total_amount   │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘   │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │     Service     │   │  BookingStatus  │   │  PaymentMethod  │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id, name       │   │  Pending        │   │  Card           │   │
//! │  │  price (Money)  │   │  Confirmed      │   │  Upi            │   │
//! │  │  items?         │   │  Completed      │   │  NetBanking     │   │
//! │  └─────────────────┘   │  Cancelled      │   └─────────────────┘   │
//! │                        └─────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! CartItem and Booking embed frozen copies of provider/service data.
//! Those copies intentionally do NOT track later edits to the live
//! provider record: a booking is a record of what was agreed at the time.
//!
//! ## Wire Shape
//! All structs serialize with camelCase field names (`providerId`,
//! `companyName`, `totalAmount`, provider `type`), which is the layout the
//! durable snapshots use.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// User
// =============================================================================

/// Role of the current session user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Browses the catalog and books services.
    Customer,
    /// Offers services and manages a catalog entry.
    Provider,
}

/// The signed-in session user.
///
/// Created at simulated sign-in (there is no password check), replaces any
/// prior session user wholesale, and is destroyed on sign-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier (UUID v4 for runtime users).
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl User {
    /// Creates a session user with a fresh id, as simulated sign-in does.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            role,
            avatar: None,
            phone: None,
        }
    }
}

// =============================================================================
// Service & Provider
// =============================================================================

/// A single bookable offering with a fixed price, owned by one provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Unique within the owning provider's service list.
    pub id: String,
    pub name: String,
    /// Fixed price in paise.
    pub price: Money,
    pub description: String,
    /// Items the customer must arrange (poojari services).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

/// The trade a provider is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Poojari,
    Plumber,
}

/// A service professional listed in the catalog.
///
/// Seeded from the static starter catalog at first run and mutated only via
/// full-record replacement keyed by `id`; never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProvider {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: ProviderKind,
    /// Years of experience.
    pub experience: u32,
    pub languages: Vec<String>,
    /// Aggregate rating, 0 to 5.
    pub rating: f64,
    pub location: String,
    pub bio: String,
    /// Home temple (poojaris only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temple: Option<String>,
    pub services: Vec<Service>,
    pub verified: bool,
    /// Avatar image URI.
    pub avatar: String,
}

impl ServiceProvider {
    /// Finds a service by id.
    pub fn find_service(&self, service_id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == service_id)
    }

    /// Replaces the service with the matching id, or appends the service.
    ///
    /// This is the caller-side helper behind catalog add/edit: the caller
    /// mutates a clone of the provider record and submits the whole record
    /// for replacement. Service ids stay unique and order is preserved.
    pub fn upsert_service(&mut self, service: Service) {
        match self.services.iter_mut().find(|s| s.id == service.id) {
            Some(existing) => *existing = service,
            None => self.services.push(service),
        }
    }

    /// Removes the service with the matching id.
    ///
    /// Returns whether anything was removed; an unknown id is a no-op.
    pub fn remove_service(&mut self, service_id: &str) -> bool {
        let before = self.services.len();
        self.services.retain(|s| s.id != service_id);
        self.services.len() != before
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the shopping cart.
///
/// `provider_name` and `service` are frozen copies taken at add-time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub provider_id: String,
    /// Provider name at time of adding (frozen).
    pub provider_name: String,
    /// Service record at time of adding (frozen).
    pub service: Service,
}

impl CartItem {
    /// Snapshots a provider's service into a cart line.
    pub fn from_service(provider: &ServiceProvider, service: &Service) -> Self {
        CartItem {
            provider_id: provider.id.clone(),
            provider_name: provider.name.clone(),
            service: service.clone(),
        }
    }
}

// =============================================================================
// Booking
// =============================================================================

/// The status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Created at checkout, awaiting provider confirmation.
    Pending,
    /// Accepted by the provider.
    Confirmed,
    /// Service was rendered.
    Completed,
    /// Called off by either party before completion.
    Cancelled,
}

impl BookingStatus {
    /// Whether a booking may move from `self` to `next`.
    ///
    /// Legal edges: pending → confirmed → completed, and
    /// pending/confirmed → cancelled. Completed and cancelled are terminal.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Confirmed, Completed) | (Pending, Cancelled) | (Confirmed, Cancelled)
        )
    }

    /// Whether no further transitions are possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

/// How the customer paid at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Upi,
    NetBanking,
}

/// A confirmed-intent record created at checkout, one per cart line.
///
/// Uses the snapshot pattern: customer/provider/service fields are frozen
/// at creation time and independent of later catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub provider_id: String,
    pub provider_name: String,
    pub service: Service,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: BookingStatus,
    /// Line price plus this line's share of the platform fee.
    pub total_amount: Money,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Builds a pending booking from a cart line at checkout.
    ///
    /// `fee_share` is this line's slice of the platform fee; the booking
    /// total is the frozen service price plus that share.
    pub fn for_cart_item(
        customer: &User,
        item: &CartItem,
        date: NaiveDate,
        time: NaiveTime,
        payment_method: PaymentMethod,
        fee_share: Money,
    ) -> Self {
        Booking {
            id: Uuid::new_v4().to_string(),
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            provider_id: item.provider_id.clone(),
            provider_name: item.provider_name.clone(),
            service: item.service.clone(),
            date,
            time,
            status: BookingStatus::Pending,
            total_amount: item.service.price + fee_share,
            payment_method,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_with_services(services: Vec<Service>) -> ServiceProvider {
        ServiceProvider {
            id: "p1".to_string(),
            name: "Pandit Sharma".to_string(),
            company_name: None,
            kind: ProviderKind::Poojari,
            experience: 15,
            languages: vec!["Sanskrit".to_string(), "Hindi".to_string()],
            rating: 4.8,
            location: "Mumbai, Maharashtra".to_string(),
            bio: "Experienced priest.".to_string(),
            temple: Some("Ganesh Temple, Borivali".to_string()),
            services,
            verified: true,
            avatar: "https://example.com/a.png".to_string(),
        }
    }

    fn service(id: &str, name: &str, rupees: i64) -> Service {
        Service {
            id: id.to_string(),
            name: name.to_string(),
            price: Money::from_rupees(rupees),
            description: format!("{} description", name),
            items: None,
        }
    }

    #[test]
    fn test_status_transitions_forward_only() {
        use BookingStatus::*;

        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Completed));
        assert!(Confirmed.can_transition_to(Cancelled));

        // No edges out of terminal states
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Confirmed));

        // No skipping or going backwards
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Confirmed.can_transition_to(Pending));
    }

    #[test]
    fn test_terminal_states() {
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(!BookingStatus::Confirmed.is_terminal());
    }

    #[test]
    fn test_upsert_service_replaces_by_id() {
        let mut provider = provider_with_services(vec![
            service("s1", "Griha Pravesh", 5000),
            service("s2", "Vehicle Pooja", 500),
        ]);

        provider.upsert_service(service("s1", "Griha Pravesh Deluxe", 7000));

        assert_eq!(provider.services.len(), 2);
        assert_eq!(provider.services[0].name, "Griha Pravesh Deluxe");
        assert_eq!(provider.services[0].price, Money::from_rupees(7000));
        // Order preserved, other entries untouched
        assert_eq!(provider.services[1].id, "s2");
    }

    #[test]
    fn test_upsert_service_appends_new_id() {
        let mut provider = provider_with_services(vec![service("s1", "Griha Pravesh", 5000)]);

        provider.upsert_service(service("s9", "Annaprasana", 2000));

        assert_eq!(provider.services.len(), 2);
        assert_eq!(provider.services[1].id, "s9");
    }

    #[test]
    fn test_remove_service() {
        let mut provider = provider_with_services(vec![
            service("s1", "Griha Pravesh", 5000),
            service("s2", "Vehicle Pooja", 500),
        ]);

        assert!(provider.remove_service("s1"));
        assert_eq!(provider.services.len(), 1);
        assert_eq!(provider.services[0].id, "s2");

        // Unknown id is a no-op
        assert!(!provider.remove_service("nope"));
        assert_eq!(provider.services.len(), 1);
    }

    #[test]
    fn test_cart_item_freezes_service_snapshot() {
        let mut provider = provider_with_services(vec![service("s1", "Griha Pravesh", 5000)]);
        let item = CartItem::from_service(&provider, &provider.services[0].clone());

        // Later catalog edits do not leak into the snapshot
        provider.upsert_service(service("s1", "Renamed", 9999));

        assert_eq!(item.provider_name, "Pandit Sharma");
        assert_eq!(item.service.name, "Griha Pravesh");
        assert_eq!(item.service.price, Money::from_rupees(5000));
    }

    #[test]
    fn test_booking_total_includes_fee_share() {
        let provider = provider_with_services(vec![service("s1", "Griha Pravesh", 2500)]);
        let customer = User::new("John Doe", "user@example.com", UserRole::Customer);
        let item = CartItem::from_service(&provider, &provider.services[0]);

        let booking = Booking::for_cart_item(
            &customer,
            &item,
            NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            PaymentMethod::Upi,
            Money::from_rupees(49),
        );

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.total_amount, Money::from_rupees(2549));
        assert_eq!(booking.customer_name, "John Doe");
        assert_eq!(booking.provider_id, "p1");
    }

    #[test]
    fn test_snapshot_wire_shape_is_camel_case() {
        let provider = provider_with_services(vec![service("s1", "Griha Pravesh", 5000)]);
        let json = serde_json::to_value(&provider).unwrap();

        assert_eq!(json["type"], "poojari");
        assert!(json.get("companyName").is_none()); // absent, not null
        assert_eq!(json["services"][0]["price"], 500_000);

        let customer = User::new("John Doe", "user@example.com", UserRole::Customer);
        let item = CartItem::from_service(&provider, &provider.services[0]);
        let booking = Booking::for_cart_item(
            &customer,
            &item,
            NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            PaymentMethod::NetBanking,
            Money::zero(),
        );
        let json = serde_json::to_value(&booking).unwrap();

        assert_eq!(json["status"], "pending");
        assert_eq!(json["paymentMethod"], "netbanking");
        assert!(json["providerId"].is_string());
        assert!(json["totalAmount"].is_i64());
    }
}
