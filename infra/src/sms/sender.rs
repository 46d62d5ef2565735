//! Helpers shared by the SMS sender implementations.

/// Mask a recipient address for logging
///
/// Shows only the last four characters.
///
/// ```ignore
/// let masked = mask_recipient("+12065551234");
/// assert_eq!(masked, "+*******1234");
/// ```
pub fn mask_recipient(recipient: &str) -> String {
    if recipient.len() <= 4 {
        return "*".repeat(recipient.len());
    }

    let visible = 4;
    let masked_count = recipient.len() - visible;
    let last = &recipient[recipient.len() - visible..];

    if recipient.starts_with('+') {
        format!("+{}{}", "*".repeat(masked_count - 1), last)
    } else {
        format!("{}{}", "*".repeat(masked_count), last)
    }
}
