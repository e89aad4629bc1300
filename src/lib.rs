//! Layout conversion engine for text typed with the wrong keyboard layout
//! active (e.g. Latin keys pressed under a Cyrillic layout).
//!
//! Every operation is a pure, synchronous function over the static layout
//! tables and a caller-supplied snapshot of enabled layout ids. There is no
//! internal mutable state, so the engine is safe to call concurrently.
//! Operations that cannot produce a meaningful answer return `None`; that is
//! an expected outcome, not an error.

pub mod config;
mod conversion;
mod domain;
pub mod util;

pub use conversion::{
    convert_explicit, convert_last_word, convert_line_greedy, convert_selected_text, convert_smart,
};
pub use domain::{
    layout::{CharacterMap, LayoutDefinition, PHYSICAL_KEYS, lookup as lookup_layout},
    outcome::ConversionOutcome,
    text::{
        boundary::{Boundary, find_wrong_layout_boundary},
        convert::{convert, detect_source_layout},
        heuristic::looks_like_wrong_layout,
        tokenize::{Token, tokenize},
    },
};
