use crate::core::identifier::IdentifierRegistry;

/// Index of the first placeholder position at or after `from`, or `None` when
/// only literals remain.
pub fn next_identifier_index(
    registry: &IdentifierRegistry,
    mask: &str,
    from: usize,
) -> Option<usize> {
    mask.chars()
        .enumerate()
        .skip(from)
        .find(|(_, ch)| registry.is_identifier(*ch))
        .map(|(idx, _)| idx)
}

pub fn next_identifier_in(
    registry: &IdentifierRegistry,
    mask: &[char],
    from: usize,
) -> Option<usize> {
    mask.get(from..)?
        .iter()
        .position(|ch| registry.is_identifier(*ch))
        .map(|offset| from + offset)
}

#[cfg(test)]
mod tests {
    use super::{next_identifier_in, next_identifier_index};
    use crate::core::identifier::IdentifierRegistry;

    #[test]
    fn finds_first_placeholder_from_offset() {
        let registry = IdentifierRegistry::new();
        assert_eq!(next_identifier_index(&registry, "##-##", 0), Some(0));
        assert_eq!(next_identifier_index(&registry, "##-##", 1), Some(1));
        assert_eq!(next_identifier_index(&registry, "##-##", 2), Some(3));
        assert_eq!(next_identifier_index(&registry, "(###)", 0), Some(1));
    }

    #[test]
    fn none_when_only_literals_remain() {
        let registry = IdentifierRegistry::new();
        assert_eq!(next_identifier_index(&registry, "##-", 2), None);
        assert_eq!(next_identifier_index(&registry, "##", 2), None);
        assert_eq!(next_identifier_index(&registry, "##", 10), None);
        assert_eq!(next_identifier_index(&registry, "", 0), None);
    }

    #[test]
    fn string_and_slice_forms_agree() {
        let registry = IdentifierRegistry::new();
        let mask = "+€ ##-aa";
        let chars: Vec<char> = mask.chars().collect();
        for from in 0..=chars.len() + 1 {
            assert_eq!(
                next_identifier_index(&registry, mask, from),
                next_identifier_in(&registry, chars.as_slice(), from),
                "from {from}"
            );
        }
    }
}
