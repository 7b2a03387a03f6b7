// Keystroke-to-alternatives mapping.
//
// A proximity model turns one pressed key into the ordered set of character
// codes the user may have intended: the key itself first, then its physical
// neighbors. The table contents are layout data injected at construction;
// the engine only relies on the ordering and the size bound.

use hashbrown::HashMap;

use keydict_core::InputPosition;
use keydict_core::character;

/// Maps a pressed key to its plausible intended character codes.
///
/// Implementations must be deterministic pure functions of the key code;
/// the returned position is bounded by
/// [`MAX_ALTERNATIVES`](keydict_core::limits::MAX_ALTERNATIVES).
pub trait ProximityModel {
    /// The ordered alternatives for one pressed key, most likely first.
    ///
    /// Keys absent from the layout table map to just themselves.
    fn alternatives_for(&self, code: u16) -> InputPosition;
}

/// Table-driven proximity model over a physical key grid.
pub struct KeyProximityModel {
    neighbors: HashMap<u16, InputPosition>,
}

impl KeyProximityModel {
    /// A model for the standard QWERTY letter grid.
    pub fn qwerty() -> Self {
        Self::from_rows(&["qwertyuiop", "asdfghjkl", "zxcvbnm"])
    }

    /// Builds a model from keyboard rows: each key's alternates are its
    /// horizontal neighbors and the keys in the adjacent rows at the same
    /// and neighboring columns.
    pub fn from_rows(rows: &[&str]) -> Self {
        let grid: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        let mut neighbors = HashMap::new();

        for (r, row) in grid.iter().enumerate() {
            for (c, &key) in row.iter().enumerate() {
                let Some(key_code) = character::code_of(key) else {
                    continue;
                };
                let mut pos = InputPosition::new(key_code);
                // Same row, then the rows above and below.
                push_key(&mut pos, &grid, r, c.wrapping_sub(1));
                push_key(&mut pos, &grid, r, c + 1);
                for nr in [r.wrapping_sub(1), r + 1] {
                    for nc in [c.wrapping_sub(1), c, c + 1] {
                        push_key(&mut pos, &grid, nr, nc);
                    }
                }
                neighbors.insert(key_code, pos);
            }
        }

        Self { neighbors }
    }

    /// Builds a model from explicit (key, neighbor string) pairs, for
    /// layouts that are not simple grids.
    pub fn from_neighbors(pairs: &[(char, &str)]) -> Self {
        let mut neighbors = HashMap::new();
        for (key, near) in pairs {
            let Some(key_code) = character::code_of(*key) else {
                continue;
            };
            let mut pos = InputPosition::new(key_code);
            for n in near.chars() {
                if let Some(code) = character::code_of(n) {
                    pos.push(code);
                }
            }
            neighbors.insert(key_code, pos);
        }
        Self { neighbors }
    }
}

fn push_key(pos: &mut InputPosition, grid: &[Vec<char>], r: usize, c: usize) {
    if let Some(&key) = grid.get(r).and_then(|row| row.get(c)) {
        if let Some(code) = character::code_of(key) {
            pos.push(code);
        }
    }
}

impl ProximityModel for KeyProximityModel {
    fn alternatives_for(&self, code: u16) -> InputPosition {
        let key = character::lower_code(code);
        match self.neighbors.get(&key) {
            Some(pos) => *pos,
            None => InputPosition::new(code),
        }
    }
}

/// Model that maps every key to itself only; used when no layout
/// information is available.
pub struct ExactModel;

impl ProximityModel for ExactModel {
    fn alternatives_for(&self, code: u16) -> InputPosition {
        InputPosition::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keydict_core::limits::MAX_ALTERNATIVES;

    fn codes_of(pos: &InputPosition) -> Vec<char> {
        pos.codes()
            .iter()
            .filter_map(|&c| char::from_u32(u32::from(c)))
            .collect()
    }

    #[test]
    fn key_is_its_own_primary() {
        let model = KeyProximityModel::qwerty();
        let pos = model.alternatives_for(b'g' as u16);
        assert_eq!(pos.primary(), Some(b'g' as u16));
    }

    #[test]
    fn neighbors_include_adjacent_keys() {
        let model = KeyProximityModel::qwerty();
        let near = codes_of(&model.alternatives_for(b'g' as u16));
        for expected in ['f', 'h', 't', 'y', 'v', 'b'] {
            assert!(near.contains(&expected), "missing {expected} in {near:?}");
        }
        assert!(!near.contains(&'q'));
    }

    #[test]
    fn corner_key_has_fewer_neighbors() {
        let model = KeyProximityModel::qwerty();
        let q = model.alternatives_for(b'q' as u16);
        let g = model.alternatives_for(b'g' as u16);
        assert!(q.len() < g.len());
        assert!(codes_of(&q).contains(&'w'));
        assert!(codes_of(&q).contains(&'a'));
    }

    #[test]
    fn uppercase_key_folds_to_layout_entry() {
        let model = KeyProximityModel::qwerty();
        let upper = model.alternatives_for(b'G' as u16);
        let lower = model.alternatives_for(b'g' as u16);
        assert_eq!(upper, lower);
    }

    #[test]
    fn unknown_key_maps_to_itself() {
        let model = KeyProximityModel::qwerty();
        let pos = model.alternatives_for(b'7' as u16);
        assert_eq!(pos.codes(), &[b'7' as u16]);
    }

    #[test]
    fn alternatives_are_bounded() {
        let model = KeyProximityModel::qwerty();
        for key in b'a'..=b'z' {
            assert!(model.alternatives_for(key as u16).len() <= MAX_ALTERNATIVES);
        }
    }

    #[test]
    fn explicit_neighbor_pairs() {
        let model = KeyProximityModel::from_neighbors(&[('a', "qsz"), ('x', "")]);
        assert_eq!(model.alternatives_for(b'a' as u16).len(), 4);
        assert_eq!(model.alternatives_for(b'x' as u16).len(), 1);
    }

    #[test]
    fn exact_model_is_identity() {
        let pos = ExactModel.alternatives_for(b'k' as u16);
        assert_eq!(pos.codes(), &[b'k' as u16]);
    }
}
