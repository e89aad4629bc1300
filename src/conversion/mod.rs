//! Orchestration of the engine operations the rest of the application calls.
//!
//! Every public function takes the caller's current snapshot of enabled
//! layout ids; nothing is cached across calls, so the configuration
//! collaborator can change the set between invocations. "No result" is
//! normal: each `None` is traced with a stable reason string and the caller
//! silently falls through to its next strategy.

use crate::{
    config::SmartConversionMode,
    domain::{
        outcome::{ConversionOutcome, SkipReason},
        text::{
            boundary::find_wrong_layout_boundary,
            convert::{convert, detect_source_layout},
            heuristic::looks_like_wrong_layout,
            tokenize::tokenize,
        },
    },
};

/// Thin pass-through for callers that already know both layouts
/// (the explicit-selection "direct" mode).
pub fn convert_explicit(text: &str, from_id: &str, to_id: &str) -> Option<String> {
    convert(text, from_id, to_id)
}

/// Converts a selection: detects the source layout among the enabled ones
/// and converts to the first enabled layout that differs from it.
#[tracing::instrument(level = "trace", skip(enabled))]
pub fn convert_selected_text<S: AsRef<str>>(
    text: &str,
    enabled: &[S],
) -> Option<ConversionOutcome> {
    trace_skip(selected_text_outcome(text, enabled), "selection conversion")
}

fn selected_text_outcome<S: AsRef<str>>(
    text: &str,
    enabled: &[S],
) -> Result<ConversionOutcome, SkipReason> {
    if enabled.len() < 2 {
        return Err(SkipReason::FewerThanTwoLayouts);
    }

    let source = detect_source_layout(text, enabled).ok_or(SkipReason::SourceUndetected)?;
    // If every enabled layout matches the detected source, fall back to the
    // first one rather than refusing outright.
    let target = enabled
        .iter()
        .map(AsRef::as_ref)
        .find(|&id| id != source)
        .or_else(|| enabled.first().map(AsRef::as_ref))
        .ok_or(SkipReason::FewerThanTwoLayouts)?;

    let converted = convert(text, source, target).ok_or(SkipReason::UnknownLayout)?;
    tracing::trace!(source = %source, target = %target, "selection converted");
    Ok(ConversionOutcome {
        text: converted,
        target_layout_id: target.to_string(),
    })
}

/// Converts only the wrong-layout tail of a line, keeping the prefix intact.
#[tracing::instrument(level = "trace", skip(enabled))]
pub fn convert_line_greedy<S: AsRef<str>>(text: &str, enabled: &[S]) -> Option<ConversionOutcome> {
    trace_skip(line_greedy_outcome(text, enabled), "greedy line conversion")
}

fn line_greedy_outcome<S: AsRef<str>>(
    text: &str,
    enabled: &[S],
) -> Result<ConversionOutcome, SkipReason> {
    let boundary = find_wrong_layout_boundary(text, enabled).ok_or(SkipReason::NoBoundary)?;
    let segment = selected_text_outcome(boundary.convert, enabled)?;

    let mut full = String::with_capacity(boundary.keep.len() + segment.text.len());
    full.push_str(boundary.keep);
    full.push_str(&segment.text);
    Ok(ConversionOutcome {
        text: full,
        target_layout_id: segment.target_layout_id,
    })
}

/// Converts only the trailing word token of a line, when the heuristic flags
/// it as wrong-layout. Separators after the word stay in place.
#[tracing::instrument(level = "trace", skip(enabled))]
pub fn convert_last_word<S: AsRef<str>>(text: &str, enabled: &[S]) -> Option<ConversionOutcome> {
    trace_skip(last_word_outcome(text, enabled), "last word conversion")
}

fn last_word_outcome<S: AsRef<str>>(
    text: &str,
    enabled: &[S],
) -> Result<ConversionOutcome, SkipReason> {
    let tokens = tokenize(text);
    let word = tokens
        .iter()
        .rev()
        .find(|token| token.is_word)
        .ok_or(SkipReason::NoWordTokens)?;
    if !looks_like_wrong_layout(word.text, enabled) {
        return Err(SkipReason::LastWordLooksCorrect);
    }

    let segment = selected_text_outcome(word.text, enabled)?;
    let end = word.start + word.text.len();
    let mut full = String::with_capacity(text.len() + segment.text.len());
    full.push_str(&text[..word.start]);
    full.push_str(&segment.text);
    full.push_str(&text[end..]);
    Ok(ConversionOutcome {
        text: full,
        target_layout_id: segment.target_layout_id,
    })
}

/// Applies the configured smart-conversion strategy to the line before the
/// cursor. Callers try this after explicit-selection conversion and do
/// nothing when it yields `None`.
pub fn convert_smart<S: AsRef<str>>(
    text: &str,
    enabled: &[S],
    mode: SmartConversionMode,
) -> Option<ConversionOutcome> {
    match mode {
        SmartConversionMode::Disabled => {
            trace_skip(Err(SkipReason::SmartConversionDisabled), "smart conversion")
        }
        SmartConversionMode::LastWord => convert_last_word(text, enabled),
        SmartConversionMode::GreedyLine => convert_line_greedy(text, enabled),
    }
}

fn trace_skip(
    outcome: Result<ConversionOutcome, SkipReason>,
    what: &'static str,
) -> Option<ConversionOutcome> {
    match outcome {
        Ok(outcome) => Some(outcome),
        Err(reason) => {
            tracing::trace!(reason = %reason.as_str(), "{what} skipped");
            None
        }
    }
}
