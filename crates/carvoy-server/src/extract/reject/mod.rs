//! Enhanced request-data extractors with detailed rejections.

mod json;
mod multipart;
mod path;
mod query;
mod validated_json;

pub use json::Json;
pub use multipart::Multipart;
pub use path::Path;
pub use query::Query;
pub use validated_json::ValidateJson;

/// Sanitizes error messages to prevent information leakage while keeping them useful.
pub(crate) fn sanitize_error_message(message: &str) -> String {
    // Limit to first 3 lines to prevent excessive verbosity.
    let lines = message.lines().take(3).collect::<Vec<_>>();
    // Limit message length.
    lines.join(" ").chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_limits_lines_and_length() {
        let long = "a\nb\nc\nd\ne";
        assert_eq!(sanitize_error_message(long), "a b c");

        let wide = "x".repeat(500);
        assert_eq!(sanitize_error_message(&wide).len(), 200);
    }
}
