use crate::domain::layout::{self, CharacterMap};

/// Remaps `text` from `source_id` to `target_id` through physical key
/// positions.
///
/// Returns `None` only when either identifier fails to resolve. Characters
/// outside the source layout's printable set (digits shared across layouts,
/// whitespace, emoji) pass through unchanged, so the result is always the
/// full length of the input.
pub fn convert(text: &str, source_id: &str, target_id: &str) -> Option<String> {
    let Some(source) = layout::lookup(source_id) else {
        tracing::trace!(layout = %source_id, "convert: unknown source layout");
        return None;
    };
    let Some(target) = layout::lookup(target_id) else {
        tracing::trace!(layout = %target_id, "convert: unknown target layout");
        return None;
    };

    Some(
        text.chars()
            .map(|ch| remap_char(ch, source, target))
            .collect(),
    )
}

fn remap_char(ch: char, source: &CharacterMap, target: &CharacterMap) -> char {
    source
        .position_of(ch)
        .and_then(|position| target.char_at(position))
        .unwrap_or(ch)
}

/// Guesses which layout `text` was typed in by counting, per candidate, the
/// characters that belong to that layout's character set.
///
/// The strictly highest score wins; ties keep the earliest candidate in
/// `candidates`. Returns `None` when no candidate resolves or every resolved
/// candidate scores zero (empty or unmappable text included).
pub fn detect_source_layout<'a, S: AsRef<str>>(text: &str, candidates: &'a [S]) -> Option<&'a str> {
    let mut best: Option<&'a str> = None;
    let mut best_score = 0usize;

    for candidate in candidates {
        let id = candidate.as_ref();
        let Some(map) = layout::lookup(id) else {
            tracing::trace!(layout = %id, "detect: unknown candidate layout");
            continue;
        };

        let score = text.chars().filter(|&ch| map.produces(ch)).count();
        tracing::trace!(layout = %id, score, "detect: candidate scored");
        if score > best_score {
            best_score = score;
            best = Some(id);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const US: &str = "com.apple.keylayout.US";
    const RU: &str = "com.apple.keylayout.Russian";

    #[test]
    fn converts_mistyped_latin_to_cyrillic() {
        assert_eq!(convert("ghbdtn", US, RU).as_deref(), Some("привет"));
        assert_eq!(convert("rfr ltkf", US, RU).as_deref(), Some("как дела"));
    }

    #[test]
    fn converts_correct_latin_into_cyrillic_gibberish() {
        // No dictionary: "hello" maps positionally like anything else.
        assert_eq!(convert("hello", US, RU).as_deref(), Some("руддщ"));
    }

    #[test]
    fn converts_cyrillic_back_to_latin() {
        assert_eq!(convert("привет", RU, US).as_deref(), Some("ghbdtn"));
        assert_eq!(convert("руддщ", RU, US).as_deref(), Some("hello"));
    }

    #[test]
    fn preserves_case_positionally() {
        assert_eq!(convert("GHBDTN", US, RU).as_deref(), Some("ПРИВЕТ"));
        assert_eq!(convert("Ghbdtn", US, RU).as_deref(), Some("Привет"));
        assert_eq!(convert("РУДДЩ", RU, US).as_deref(), Some("HELLO"));
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(convert("123", US, RU).as_deref(), Some("123"));
        assert_eq!(convert("  ghbdtn  ", US, RU).as_deref(), Some("  привет  "));
        assert_eq!(convert("ghbdtn 🙂", US, RU).as_deref(), Some("привет 🙂"));
    }

    #[test]
    fn punctuation_follows_physical_keys() {
        assert_eq!(convert("[", US, RU).as_deref(), Some("х"));
        assert_eq!(convert(";", US, RU).as_deref(), Some("ж"));
        assert_eq!(convert("'", US, RU).as_deref(), Some("э"));
        assert_eq!(convert("`", US, RU).as_deref(), Some("ё"));
    }

    #[test]
    fn empty_string_converts_to_empty_string() {
        assert_eq!(convert("", US, RU).as_deref(), Some(""));
    }

    #[test]
    fn unknown_layouts_yield_none() {
        assert!(convert("test", "com.apple.keylayout.Japanese", US).is_none());
        assert!(convert("test", US, "com.apple.keylayout.Japanese").is_none());
    }

    #[test]
    fn round_trips_within_the_mapped_character_set() {
        for original in ["ghbdtn rfr ltkf", "Ghbdtn", "q[];',./", "GHBDTN"] {
            let there = convert(original, US, RU).unwrap();
            assert_eq!(convert(&there, RU, US).as_deref(), Some(original));
        }
        for original in ["привет мир", "Тест", "юб."] {
            let there = convert(original, RU, US).unwrap();
            assert_eq!(convert(&there, US, RU).as_deref(), Some(original));
        }
    }

    #[test]
    fn qwertz_swaps_y_and_z() {
        let de = "com.apple.keylayout.German";
        assert_eq!(convert("y", US, de).as_deref(), Some("z"));
        assert_eq!(convert("z", US, de).as_deref(), Some("y"));
    }

    #[test]
    fn azerty_swaps_q_and_a() {
        let fr = "com.apple.keylayout.French";
        assert_eq!(convert("q", US, fr).as_deref(), Some("a"));
        assert_eq!(convert("a", US, fr).as_deref(), Some("q"));
    }

    #[test]
    fn ukrainian_shares_the_cyrillic_rows_with_its_own_vowels() {
        let uk = "com.apple.keylayout.Ukrainian";
        assert_eq!(convert("ghbdsn", US, uk).as_deref(), Some("привіт"));
    }

    #[test]
    fn detects_cyrillic_text_as_russian() {
        assert_eq!(detect_source_layout("привет", &[US, RU]), Some(RU));
        assert_eq!(detect_source_layout("руддщ", &[US, RU]), Some(RU));
    }

    #[test]
    fn detects_latin_text_as_us() {
        assert_eq!(detect_source_layout("hello", &[US, RU]), Some(US));
        assert_eq!(detect_source_layout("ghbdtn", &[US, RU]), Some(US));
    }

    #[test]
    fn detection_is_deterministic_on_ties() {
        // Digits score the same in every layout; first candidate wins.
        assert_eq!(detect_source_layout("12345", &[US, RU]), Some(US));
        assert_eq!(detect_source_layout("12345", &[RU, US]), Some(RU));
    }

    #[test]
    fn detection_returns_none_without_signal() {
        assert_eq!(detect_source_layout("привет", &[] as &[&str]), None);
        assert_eq!(detect_source_layout("", &[US, RU]), None);
        assert_eq!(
            detect_source_layout("hello", &["com.apple.keylayout.Japanese"]),
            None
        );
    }

    #[test]
    fn detection_skips_unresolvable_candidates() {
        assert_eq!(
            detect_source_layout("привет", &["com.apple.keylayout.Japanese", RU]),
            Some(RU)
        );
    }
}
