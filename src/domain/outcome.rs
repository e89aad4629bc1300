/// Converted text plus the layout it now corresponds to.
///
/// The target layout id is consumed by the layout-switch collaborator to
/// decide whether to flip the OS's active layout after replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub text: String,
    pub target_layout_id: String,
}

/// Why a conversion attempt produced no result. These are expected, frequent
/// outcomes (most keystrokes are not mistyped), surfaced only through trace
/// logging so callers can fall through to the next strategy silently.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SkipReason {
    FewerThanTwoLayouts,
    SourceUndetected,
    UnknownLayout,
    NoBoundary,
    NoWordTokens,
    LastWordLooksCorrect,
    SmartConversionDisabled,
}

impl SkipReason {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SkipReason::FewerThanTwoLayouts => "fewer_than_two_layouts",
            SkipReason::SourceUndetected => "source_undetected",
            SkipReason::UnknownLayout => "unknown_layout",
            SkipReason::NoBoundary => "no_boundary",
            SkipReason::NoWordTokens => "no_word_tokens",
            SkipReason::LastWordLooksCorrect => "last_word_looks_correct",
            SkipReason::SmartConversionDisabled => "smart_conversion_disabled",
        }
    }
}
