use super::convert::{convert, detect_source_layout};

/// Decides, without any dictionary, whether `text` is plausibly wrong-layout
/// input: the text is converted into every other enabled layout, and any
/// conversion that switches script (ASCII-only letters vs. non-ASCII
/// letters, in either direction) counts as a hit.
///
/// Accepted limitation: a genuinely correct word in one script is
/// indistinguishable from gibberish that merely converts into the other
/// script, so any short Latin word "looks wrong" whenever a non-Latin layout
/// is enabled. Callers rely on this behavior; do not add dictionary lookups.
pub fn looks_like_wrong_layout<S: AsRef<str>>(text: &str, enabled: &[S]) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    let Some(source_id) = detect_source_layout(trimmed, enabled) else {
        tracing::trace!("wrong-layout check: source layout undetected");
        return false;
    };

    for candidate in enabled {
        let target_id = candidate.as_ref();
        if target_id == source_id {
            continue;
        }
        let Some(converted) = convert(trimmed, source_id, target_id) else {
            continue;
        };
        if script_switches(trimmed, &converted) {
            tracing::trace!(source = %source_id, target = %target_id, "wrong-layout check: script switch");
            return true;
        }
    }

    false
}

fn ascii_letters_only(s: &str) -> bool {
    s.chars().all(|ch| ch.is_ascii() || !ch.is_alphabetic())
}

fn has_non_ascii_letter(s: &str) -> bool {
    s.chars().any(|ch| !ch.is_ascii() && ch.is_alphabetic())
}

fn script_switches(source: &str, converted: &str) -> bool {
    // "ghbdtn" (ASCII) -> "привет" (non-ASCII letters), or
    // "руддщ" (non-ASCII letters) -> "hello" (ASCII).
    (ascii_letters_only(source) && has_non_ascii_letter(converted))
        || (has_non_ascii_letter(source) && ascii_letters_only(converted))
}
