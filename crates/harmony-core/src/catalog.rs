//! # Starter Catalog
//!
//! The static provider catalog used when durable storage holds no provider
//! snapshot yet (first run). After that, the persisted snapshot is the
//! source of truth and this data is never consulted again.

use crate::money::Money;
use crate::types::{ProviderKind, Service, ServiceProvider};

/// Builds the starter catalog: two poojaris and two plumbers.
pub fn seed_providers() -> Vec<ServiceProvider> {
    vec![
        ServiceProvider {
            id: "p1".to_string(),
            name: "Pandit Sharma".to_string(),
            company_name: None,
            kind: ProviderKind::Poojari,
            experience: 15,
            languages: strings(&["Sanskrit", "Hindi", "English"]),
            rating: 4.8,
            location: "Mumbai, Maharashtra".to_string(),
            bio: "Experienced priest specializing in Vedic rituals and housewarming \
                  ceremonies. Trained in classical Sanskrit mantras."
                .to_string(),
            temple: Some("Ganesh Temple, Borivali".to_string()),
            services: vec![
                Service {
                    id: "s1".to_string(),
                    name: "Griha Pravesh".to_string(),
                    price: Money::from_rupees(5000),
                    description: "Complete housewarming ceremony with Havan.".to_string(),
                    items: Some(strings(&[
                        "Coconut",
                        "Turmeric",
                        "Sandalwood",
                        "Flowers",
                        "Ghee",
                    ])),
                },
                Service {
                    id: "s2".to_string(),
                    name: "Satyanarayan Pooja".to_string(),
                    price: Money::from_rupees(2500),
                    description: "Prosperity and well-being pooja.".to_string(),
                    items: Some(strings(&["Pancha Amrut", "Fruits", "Betel Leaves"])),
                },
                Service {
                    id: "s3".to_string(),
                    name: "Vehicle Pooja".to_string(),
                    price: Money::from_rupees(500),
                    description: "New vehicle blessing ceremony.".to_string(),
                    items: Some(strings(&["Lemons", "Incense", "Camphor"])),
                },
            ],
            verified: true,
            avatar: "https://picsum.photos/seed/pandit1/200/200".to_string(),
        },
        ServiceProvider {
            id: "p2".to_string(),
            name: "Aditya Hegde".to_string(),
            company_name: None,
            kind: ProviderKind::Poojari,
            experience: 8,
            languages: strings(&["Kannada", "Hindi", "Sanskrit"]),
            rating: 4.5,
            location: "Bengaluru, Karnataka".to_string(),
            bio: "Dedicated priest for family rituals and weddings. Special focus on \
                  meaningful explanation of mantras."
                .to_string(),
            temple: Some("Iskcon Temple, Rajajinagar".to_string()),
            services: vec![
                Service {
                    id: "s4".to_string(),
                    name: "Vivaha (Wedding)".to_string(),
                    price: Money::from_rupees(25_000),
                    description: "Full wedding ceremony rituals.".to_string(),
                    items: Some(strings(&["Rice", "Sacred Thread", "Garlands"])),
                },
                Service {
                    id: "s5".to_string(),
                    name: "Annaprasana".to_string(),
                    price: Money::from_rupees(2000),
                    description: "First solid food feeding ceremony for babies.".to_string(),
                    items: None,
                },
            ],
            verified: true,
            avatar: "https://picsum.photos/seed/pandit2/200/200".to_string(),
        },
        ServiceProvider {
            id: "pl1".to_string(),
            name: "Ramesh Kumar".to_string(),
            company_name: Some("RK Plumb-It Services".to_string()),
            kind: ProviderKind::Plumber,
            experience: 10,
            languages: strings(&["Hindi", "Marathi"]),
            rating: 4.2,
            location: "Pune, Maharashtra".to_string(),
            bio: "Expert in leak repairs and bathroom installations. Available for 24/7 \
                  emergencies."
                .to_string(),
            temple: None,
            services: vec![
                Service {
                    id: "pl-s1".to_string(),
                    name: "Tap Leakage Repair".to_string(),
                    price: Money::from_rupees(250),
                    description: "Fixing dripping taps and valve replacements.".to_string(),
                    items: None,
                },
                Service {
                    id: "pl-s2".to_string(),
                    name: "Full Pipeline Install".to_string(),
                    price: Money::from_rupees(15_000),
                    description: "Modern CPVC piping for new homes.".to_string(),
                    items: None,
                },
            ],
            verified: true,
            avatar: "https://picsum.photos/seed/plumber1/200/200".to_string(),
        },
        ServiceProvider {
            id: "pl2".to_string(),
            name: "John Dsouza".to_string(),
            company_name: Some("The Drain Master".to_string()),
            kind: ProviderKind::Plumber,
            experience: 20,
            languages: strings(&["English", "Konkani", "Hindi"]),
            rating: 4.9,
            location: "Goa".to_string(),
            bio: "Specialist in solar water heater maintenance and complex drainage \
                  systems."
                .to_string(),
            temple: None,
            services: vec![
                Service {
                    id: "pl-s3".to_string(),
                    name: "Solar Heater Cleaning".to_string(),
                    price: Money::from_rupees(1200),
                    description: "Removing scale and optimizing performance.".to_string(),
                    items: None,
                },
                Service {
                    id: "pl-s4".to_string(),
                    name: "Clogged Drain Clearing".to_string(),
                    price: Money::from_rupees(400),
                    description: "Mechanical cleaning of kitchen/bathroom drains.".to_string(),
                    items: None,
                },
            ],
            verified: false,
            avatar: "https://picsum.photos/seed/plumber2/200/200".to_string(),
        },
    ]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_has_both_trades() {
        let providers = seed_providers();
        assert_eq!(providers.len(), 4);
        assert!(providers.iter().any(|p| p.kind == ProviderKind::Poojari));
        assert!(providers.iter().any(|p| p.kind == ProviderKind::Plumber));
    }

    #[test]
    fn test_seed_service_ids_unique_per_provider() {
        for provider in seed_providers() {
            let ids: HashSet<&str> = provider.services.iter().map(|s| s.id.as_str()).collect();
            assert_eq!(ids.len(), provider.services.len(), "{}", provider.id);
        }
    }

    #[test]
    fn test_seed_prices_non_negative() {
        for provider in seed_providers() {
            for service in &provider.services {
                assert!(!service.price.is_negative());
            }
            assert!((0.0..=5.0).contains(&provider.rating));
        }
    }
}
