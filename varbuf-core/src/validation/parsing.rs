//! Parsing of extraction patterns
//!
//! A pattern is a string of one-letter type tags, e.g. `"ssi"` for two
//! strings followed by a 32-bit integer. Tags are case-insensitive.

use crate::format::FieldKind;
use crate::{CodecError, Result};
use alloc::vec::Vec;

/// Parse a pattern, skipping characters that are not valid tags
///
/// An empty pattern yields an empty list.
pub fn parse_pattern(pattern: &str) -> Vec<FieldKind> {
    pattern.chars().filter_map(FieldKind::from_tag).collect()
}

/// Parse a pattern, rejecting any character that is not a valid tag
pub fn parse_pattern_strict(pattern: &str) -> Result<Vec<FieldKind>> {
    pattern
        .chars()
        .map(|tag| FieldKind::from_tag(tag).ok_or(CodecError::UnsupportedType))
        .collect()
}

/// Position and character of the first unknown tag, if any
pub fn first_unknown_tag(pattern: &str) -> Option<(usize, char)> {
    pattern
        .chars()
        .enumerate()
        .find(|&(_, tag)| FieldKind::from_tag(tag).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_parse_pattern() {
        assert_eq!(
            parse_pattern("ssi"),
            vec![FieldKind::Text, FieldKind::Text, FieldKind::Int]
        );
        assert_eq!(
            parse_pattern("LbDhFx"),
            vec![
                FieldKind::Long,
                FieldKind::Boolean,
                FieldKind::Bytes,
                FieldKind::Short,
                FieldKind::Float,
                FieldKind::Double,
            ]
        );
        assert!(parse_pattern("").is_empty());
    }

    #[test]
    fn test_parse_pattern_skips_unknown() {
        assert_eq!(parse_pattern("s?i"), vec![FieldKind::Text, FieldKind::Int]);
        assert!(parse_pattern("zzz").is_empty());
        assert_eq!(parse_pattern("s i"), vec![FieldKind::Text, FieldKind::Int]);
    }

    #[test]
    fn test_parse_pattern_strict() {
        assert_eq!(
            parse_pattern_strict("Si"),
            Ok(vec![FieldKind::Text, FieldKind::Int])
        );
        assert_eq!(parse_pattern_strict(""), Ok(Vec::new()));
        assert_eq!(parse_pattern_strict("s?i"), Err(CodecError::UnsupportedType));
    }

    #[test]
    fn test_first_unknown_tag() {
        assert_eq!(first_unknown_tag("ssi"), None);
        assert_eq!(first_unknown_tag("ssqi"), Some((2, 'q')));
    }
}
