use super::{heuristic::looks_like_wrong_layout, tokenize::tokenize};

/// Minimum word-token count before the ratio fast path applies.
const WHOLE_LINE_MIN_WORDS: usize = 3;
/// Share of wrong-layout word tokens that treats the entire line as wrong.
/// Tuning constant with no derivation beyond "most of the line".
const WHOLE_LINE_WRONG_RATIO: f64 = 0.70;

/// Split of a line into the prefix to leave untouched and the trailing
/// wrong-layout run to convert. `keep` followed by `convert` is always the
/// exact original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary<'a> {
    pub keep: &'a str,
    pub convert: &'a str,
}

/// Finds how much of a typed line should be converted when no explicit
/// selection exists.
///
/// Pass 1 (whole-line fast path): if every word token looks wrong-layout, or
/// there are at least [`WHOLE_LINE_MIN_WORDS`] of them and at least
/// [`WHOLE_LINE_WRONG_RATIO`] of them do, the entire line converts.
///
/// Pass 2 (right-to-left scan): separator tokens neither confirm nor break
/// the run; the first word token that fails the heuristic stops the scan,
/// and the region from the leftmost confirmed word token to the end of the
/// line becomes `convert`.
///
/// `None` when the line has no word tokens, no token triggers the heuristic,
/// or the trailing region is whitespace once trimmed.
pub fn find_wrong_layout_boundary<'a, S: AsRef<str>>(
    text: &'a str,
    enabled: &[S],
) -> Option<Boundary<'a>> {
    let tokens = tokenize(text);
    // Heuristic verdict per word token, None for separators.
    let verdicts: Vec<Option<bool>> = tokens
        .iter()
        .map(|token| {
            token
                .is_word
                .then(|| looks_like_wrong_layout(token.text, enabled))
        })
        .collect();

    let word_total = verdicts.iter().filter(|v| v.is_some()).count();
    if word_total == 0 {
        return None;
    }
    let wrong_total = verdicts.iter().filter(|v| **v == Some(true)).count();
    tracing::trace!(word_total, wrong_total, "boundary: tokenized line");

    if wrong_total == word_total
        || (word_total >= WHOLE_LINE_MIN_WORDS
            && wrong_total as f64 / word_total as f64 >= WHOLE_LINE_WRONG_RATIO)
    {
        return Some(Boundary {
            keep: "",
            convert: text,
        });
    }

    let mut run_start: Option<usize> = None;
    for (token, verdict) in tokens.iter().zip(&verdicts).rev() {
        match verdict {
            None => continue,
            Some(true) => run_start = Some(token.start),
            Some(false) => break,
        }
    }

    let start = run_start?;
    let convert = &text[start..];
    if convert.trim().is_empty() {
        return None;
    }

    Some(Boundary {
        keep: &text[..start],
        convert,
    })
}
