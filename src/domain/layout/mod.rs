mod tables;

use std::{collections::HashMap, sync::LazyLock};

pub use tables::{LayoutDefinition, PHYSICAL_KEYS};

/// Bidirectional view over one [`LayoutDefinition`]:
/// position -> character is total, character -> position is partial.
///
/// If a layout produces the same character at two positions, the first
/// (canonical) position wins, so reverse lookup stays deterministic.
pub struct CharacterMap {
    family: &'static str,
    to_char: Vec<char>,
    to_position: HashMap<char, usize>,
}

impl CharacterMap {
    fn build(def: &LayoutDefinition) -> Self {
        let to_char: Vec<char> = def.chars.chars().collect();
        let mut to_position = HashMap::with_capacity(to_char.len());
        for (position, ch) in to_char.iter().copied().enumerate() {
            to_position.entry(ch).or_insert(position);
        }
        Self {
            family: def.family,
            to_char,
            to_position,
        }
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Character this layout produces at `position`, if the slot exists.
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.to_char.get(position).copied()
    }

    /// Physical key position that produces `ch` in this layout.
    pub fn position_of(&self, ch: char) -> Option<usize> {
        self.to_position.get(&ch).copied()
    }

    /// Whether `ch` belongs to this layout's printable character set.
    pub fn produces(&self, ch: char) -> bool {
        self.to_position.contains_key(&ch)
    }
}

static CHARACTER_MAPS: LazyLock<Vec<(&'static str, CharacterMap)>> = LazyLock::new(|| {
    tables::RESOLUTION_ORDER
        .iter()
        .map(|(token, def)| (*token, CharacterMap::build(def)))
        .collect()
});

/// Resolves a layout identifier (e.g. `com.apple.keylayout.Russian`) to its
/// character map by lowercase substring containment against the ordered
/// resolution list, first match wins.
///
/// `None` for an unrecognized identifier is a normal, expected outcome.
pub fn lookup(layout_id: &str) -> Option<&'static CharacterMap> {
    let lowered = layout_id.to_lowercase();
    CHARACTER_MAPS
        .iter()
        .find(|(token, _)| lowered.contains(token))
        .map(|(_, map)| map)
}
