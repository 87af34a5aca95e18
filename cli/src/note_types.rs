/// Release-note types accepted when validating extracted notes.
///
/// This vocabulary is project configuration for the surrounding tooling;
/// the extractor itself accepts any label.
pub const TYPE_VALUES: &[&str] = &[
    "none",
    "bug",
    "note",
    "enhancement",
    "new-resource",
    "new-datasource",
    "deprecation",
    "breaking-change",
    "feature",
];

pub fn valid(kind: &str) -> bool {
    TYPE_VALUES.contains(&kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_are_valid() {
        for kind in TYPE_VALUES {
            assert!(valid(kind));
        }
    }

    #[test]
    fn unknown_types_are_rejected() {
        assert!(!valid("bugfix"));
        assert!(!valid("BUG"));
        assert!(!valid(""));
    }
}
