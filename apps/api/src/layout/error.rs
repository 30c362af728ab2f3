use thiserror::Error;

/// Structural problems that abort a render before any markup is returned.
///
/// These are never content problems: the same inputs always fail the same
/// way, so callers report them and skip the render instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A configuration field holds a value outside its declared domain.
    #[error("invalid value {value:?} for `{field}`: expected {expected}")]
    Config {
        field: String,
        value: String,
        expected: String,
    },

    /// A section was scheduled for rendering but the catalog has no such entry.
    #[error("section {0:?} is not present in the section catalog")]
    UnknownSection(String),

    #[error("section {0:?} is defined more than once")]
    DuplicateSection(String),
}

impl LayoutError {
    pub fn config(field: impl Into<String>, value: impl Into<String>, expected: &str) -> Self {
        LayoutError::Config {
            field: field.into(),
            value: value.into(),
            expected: expected.to_string(),
        }
    }
}

/// Which side of a two-cell grid an element occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Parses a `left`/`right` config token, naming `field` on failure.
    pub fn parse(field: &str, value: &str) -> Result<Side, LayoutError> {
        match value {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(LayoutError::config(field, other, "one of `left`, `right`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_parse_accepts_left_and_right() {
        assert_eq!(Side::parse("header.photo_position", "left"), Ok(Side::Left));
        assert_eq!(Side::parse("header.photo_position", "right"), Ok(Side::Right));
    }

    #[test]
    fn test_side_parse_rejects_other_values() {
        let err = Side::parse("header.photo_position", "center").unwrap_err();
        assert_eq!(
            err,
            LayoutError::Config {
                field: "header.photo_position".to_string(),
                value: "center".to_string(),
                expected: "one of `left`, `right`".to_string(),
            }
        );
        assert!(err.to_string().contains("header.photo_position"));
    }

    #[test]
    fn test_side_parse_is_case_sensitive() {
        assert!(Side::parse("sidebar.position", "Left").is_err());
    }
}
