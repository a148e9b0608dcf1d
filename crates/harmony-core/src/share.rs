//! # Share Formatting
//!
//! Formats a service's required-items list as human-readable text for an
//! external messaging target. Pure formatting; nothing here touches state.

/// Renders the required-items list of a service as a shareable message.
///
/// Returns `None` when there is nothing to share (no items).
///
/// ## Example
/// ```rust
/// use harmony_core::share::required_items_message;
///
/// let items = vec!["Coconut".to_string(), "Ghee".to_string()];
/// let msg = required_items_message("Griha Pravesh", &items).unwrap();
/// assert!(msg.starts_with("*Pooja Items List for Griha Pravesh*"));
/// assert!(msg.contains("- Coconut"));
/// ```
pub fn required_items_message(service_name: &str, items: &[String]) -> Option<String> {
    if items.is_empty() {
        return None;
    }

    let mut message = format!("*Pooja Items List for {}*\n\n", service_name);
    for item in items {
        message.push_str("- ");
        message.push_str(item);
        message.push('\n');
    }
    message.push_str("\nBooked via Harmony App.");
    Some(message)
}

/// Builds a WhatsApp share link for a message.
///
/// The messaging target accepts the text as a query parameter, so the
/// message is percent-encoded byte-wise (unreserved characters pass
/// through untouched).
pub fn whatsapp_share_url(message: &str) -> String {
    let mut encoded = String::with_capacity(message.len() * 3);
    for byte in message.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    format!("https://wa.me/?text={}", encoded)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_lists_every_item() {
        let items = vec![
            "Coconut".to_string(),
            "Turmeric".to_string(),
            "Ghee".to_string(),
        ];
        let msg = required_items_message("Griha Pravesh", &items).unwrap();

        assert_eq!(
            msg,
            "*Pooja Items List for Griha Pravesh*\n\n- Coconut\n- Turmeric\n- Ghee\n\nBooked via Harmony App."
        );
    }

    #[test]
    fn test_no_items_means_nothing_to_share() {
        assert!(required_items_message("Annaprasana", &[]).is_none());
    }

    #[test]
    fn test_share_url_encoding() {
        let url = whatsapp_share_url("*List*\nA & B");
        assert!(url.starts_with("https://wa.me/?text="));
        assert!(url.contains("%2AList%2A%0AA%20%26%20B"));
    }
}
