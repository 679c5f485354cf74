pub mod alert;
pub mod survey;

/// Rendered messages carry at most this many item lines, regardless of
/// input length.
pub const MAX_RENDERED_ITEMS: usize = 20;

/// Free-text fields are clamped to this many characters before
/// interpolation.
pub const MAX_FIELD_LEN: usize = 500;

/// Strips angle brackets and clamps length. Applied to every free-text
/// field before it is interpolated into an outbound message.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .take(MAX_FIELD_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_angle_brackets() {
        assert_eq!(sanitize("<script>Rice</script>"), "scriptRice/script");
        assert_eq!(sanitize("Milk 5% <fresh>"), "Milk 5% fresh");
    }

    #[test]
    fn sanitize_clamps_to_field_limit() {
        let long = "a".repeat(2_000);
        assert_eq!(sanitize(&long).chars().count(), MAX_FIELD_LEN);
    }

    #[test]
    fn sanitize_counts_characters_not_bytes() {
        let long = "é".repeat(600);
        assert_eq!(sanitize(&long).chars().count(), MAX_FIELD_LEN);
    }
}
