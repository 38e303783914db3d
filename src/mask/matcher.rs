use crate::core::identifier::IdentifierRegistry;

/// Tests `candidate` against `mask` position by position.
///
/// Placeholder positions need a character accepted by their identifier,
/// literal positions need the mask character itself. Strings of a different
/// length never match.
pub fn matches(registry: &IdentifierRegistry, candidate: &str, mask: &str) -> bool {
    let candidate: Vec<char> = candidate.chars().collect();
    let mask: Vec<char> = mask.chars().collect();
    matches_chars(registry, candidate.as_slice(), mask.as_slice())
}

pub fn matches_chars(registry: &IdentifierRegistry, candidate: &[char], mask: &[char]) -> bool {
    if candidate.len() != mask.len() {
        return false;
    }

    candidate
        .iter()
        .zip(mask)
        .all(|(&ch, &mask_char)| match registry.lookup(mask_char) {
            Some(class) => class.accepts(ch),
            None => ch == mask_char,
        })
}

/// Slots `raw` into `mask`, returning the masked string when the result
/// matches.
///
/// Output starts as the mask itself. A raw character is consumed when it is
/// accepted at a placeholder position (and written there) or when it repeats
/// the literal at a literal position. Otherwise it stays pending and is tried
/// against the next position, so one stray character blocks everything after
/// it.
pub fn apply_mask(registry: &IdentifierRegistry, raw: &str, mask: &str) -> Option<String> {
    let raw: Vec<char> = raw.chars().collect();
    let mask: Vec<char> = mask.chars().collect();
    apply_mask_chars(registry, raw.as_slice(), mask.as_slice())
}

pub fn apply_mask_chars(
    registry: &IdentifierRegistry,
    raw: &[char],
    mask: &[char],
) -> Option<String> {
    let mut out = mask.to_vec();
    let mut pending = 0usize;

    for (idx, &mask_char) in mask.iter().enumerate() {
        let Some(&ch) = raw.get(pending) else {
            break;
        };
        match registry.lookup(mask_char) {
            Some(class) if class.accepts(ch) => {
                out[idx] = ch;
                pending += 1;
            }
            Some(_) => {}
            None if ch == mask_char => pending += 1,
            None => {}
        }
    }

    matches_chars(registry, out.as_slice(), mask).then(|| out.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::{apply_mask, matches};
    use crate::core::identifier::{IdentifierDef, IdentifierRegistry};
    use pretty_assertions::assert_eq;

    #[test]
    fn length_mismatch_never_matches() {
        let registry = IdentifierRegistry::new();
        for candidate in ["", "1", "12-3", "12-345", "12-34 "] {
            assert!(!matches(&registry, candidate, "##-##"), "{candidate:?}");
        }
    }

    #[test]
    fn placeholders_test_class_and_literals_test_equality() {
        let registry = IdentifierRegistry::new();
        assert!(matches(&registry, "12-ab", "##-aa"));
        assert!(!matches(&registry, "12_ab", "##-aa"));
        assert!(!matches(&registry, "1x-ab", "##-aa"));
        assert!(!matches(&registry, "12-a1", "##-aa"));
        assert!(matches(&registry, "", ""));
    }

    #[test]
    fn unfilled_mask_does_not_match_itself() {
        let registry = IdentifierRegistry::new();
        assert!(!matches(&registry, "###", "###"));
        assert!(matches(&registry, "@@@", "@@@"));
    }

    #[test]
    fn literal_positions_only_accept_the_mask_character() {
        let registry = IdentifierRegistry::new();
        let mask = "(###) ###-####";
        let accepted = "(555) 123-4567";
        assert!(matches(&registry, accepted, mask));

        for (idx, mask_char) in mask.chars().enumerate() {
            if registry.is_identifier(mask_char) {
                continue;
            }
            let mut altered: Vec<char> = accepted.chars().collect();
            altered[idx] = '*';
            let altered: String = altered.into_iter().collect();
            assert!(!matches(&registry, altered.as_str(), mask), "{altered}");
        }
    }

    #[test]
    fn digits_are_slotted_around_literals() {
        let registry = IdentifierRegistry::new();
        assert_eq!(
            apply_mask(&registry, "5551234567", "(###) ###-####").as_deref(),
            Some("(555) 123-4567")
        );
        assert_eq!(
            apply_mask(&registry, "1234", "##-##").as_deref(),
            Some("12-34")
        );
    }

    #[test]
    fn matching_input_is_returned_unchanged() {
        let registry = IdentifierRegistry::new();
        for (value, mask) in [
            ("12-34", "##-##"),
            ("(555) 123-4567", "(###) ###-####"),
            ("ab-12", "aa-##"),
            ("x", "x"),
        ] {
            assert!(matches(&registry, value, mask));
            assert_eq!(apply_mask(&registry, value, mask).as_deref(), Some(value));
        }
    }

    #[test]
    fn incomplete_or_blocked_input_yields_none() {
        let registry = IdentifierRegistry::new();
        assert_eq!(apply_mask(&registry, "12", "###"), None);
        assert_eq!(apply_mask(&registry, "", "###"), None);
        // 'x' never fits a digit slot, so the '3' behind it is never reached.
        assert_eq!(apply_mask(&registry, "12x3", "###"), None);
    }

    #[test]
    fn surplus_input_is_ignored_once_the_mask_is_full() {
        let registry = IdentifierRegistry::new();
        assert_eq!(apply_mask(&registry, "12345", "###").as_deref(), Some("123"));
    }

    #[test]
    fn all_literal_mask_is_satisfied_by_empty_input() {
        let registry = IdentifierRegistry::new();
        assert_eq!(apply_mask(&registry, "", "@@@").as_deref(), Some("@@@"));
    }

    #[test]
    fn custom_identifiers_take_part_in_matching() {
        let mut registry = IdentifierRegistry::new();
        registry
            .add(IdentifierDef::new("@", "[abc]"))
            .expect("add identifier");
        assert!(matches(&registry, "cab", "@@@"));
        assert!(!matches(&registry, "cde", "@@@"));
        assert_eq!(apply_mask(&registry, "cde", "@@@"), None);
    }
}
