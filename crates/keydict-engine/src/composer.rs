// Convenience construction of per-position alternative lists.
//
// Production callers track keystrokes as they happen and supply their own
// InputPosition sequence; this helper covers tools and tests that start
// from a finished string.

use keydict_core::InputPosition;
use keydict_core::character;

use crate::proximity::ProximityModel;

/// Builds the alternative list for each character of `typed` using the
/// given proximity model.
///
/// Characters outside the BMP have no dictionary code and are dropped.
pub fn compose(typed: &str, model: &impl ProximityModel) -> Vec<InputPosition> {
    typed
        .chars()
        .filter_map(character::code_of)
        .map(|code| model.alternatives_for(code))
        .collect()
}

/// Builds single-alternative positions for `typed`, matching only the exact
/// characters. Useful for exact-match queries and tests.
pub fn compose_exact(typed: &str) -> Vec<InputPosition> {
    typed
        .chars()
        .filter_map(character::code_of)
        .map(InputPosition::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proximity::KeyProximityModel;

    #[test]
    fn one_position_per_character() {
        let model = KeyProximityModel::qwerty();
        let positions = compose("cat", &model);
        assert_eq!(positions.len(), 3);
        assert_eq!(positions[0].primary(), Some(b'c' as u16));
        assert!(positions[0].len() > 1);
    }

    #[test]
    fn exact_positions_have_single_code() {
        let positions = compose_exact("cat");
        assert_eq!(positions.len(), 3);
        assert!(positions.iter().all(|p| p.len() == 1));
    }

    #[test]
    fn non_bmp_characters_are_dropped() {
        let positions = compose_exact("a\u{1F600}b");
        assert_eq!(positions.len(), 2);
    }
}
