#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Line-oriented dialogue parsing.
//!
//! Converts raw `Speaker N: text` scripts into the ordered turn sequence
//! consumed by the synthesis request builder. Only the two speaker labels
//! known to the multi-speaker voice are kept; everything else is dropped
//! without failing the whole script.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DialogueError>;

/// Dialogue parsing errors
#[derive(Debug, Error)]
pub enum DialogueError {
    /// No line carried a known speaker label with non-empty text
    #[error("No valid dialogue lines found in input")]
    NoTurns,
}

/// One utterance attributed to a speaker, in conversation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueTurn {
    /// Speaker code understood by the multi-speaker voice
    pub speaker: &'static str,
    /// Utterance text, never empty
    pub text: String,
}

/// Fixed label-to-code map for the two supported speakers.
///
/// The multi-speaker voice addresses its speakers by single-letter codes;
/// labels outside this map are dropped rather than rejected. If the voice
/// ever grows more speakers this becomes configuration.
const SPEAKER_CODES: &[(u32, &str)] = &[(1, "R"), (2, "S")];

fn speaker_code(label: u32) -> Option<&'static str> {
    SPEAKER_CODES
        .iter()
        .find(|(number, _)| *number == label)
        .map(|(_, code)| *code)
}

fn line_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^\s*speaker\s+(\d+)\s*:\s*(.*)$").expect("must be valid regex"))
}

/// Parse a raw multi-line script into ordered dialogue turns.
///
/// Lines that do not match `Speaker <digits>: <text>` are skipped with a
/// warning. Lines whose numeric label has no code mapping, or whose text is
/// empty, are dropped silently. Fails only when no usable turn remains.
pub fn parse_dialogue(text: &str) -> Result<Vec<DialogueTurn>> {
    let mut turns = Vec::new();

    for line in text.lines() {
        let Some(captures) = line_pattern().captures(line) else {
            tracing::warn!(line, "skipping line that is not dialogue");
            continue;
        };

        // Labels that overflow u32 are as unknown as "Speaker 3"
        let Some(speaker) = captures[1].parse().ok().and_then(speaker_code) else {
            continue;
        };

        let utterance = captures[2].trim();
        if utterance.is_empty() {
            continue;
        }

        turns.push(DialogueTurn {
            speaker,
            text: utterance.to_string(),
        });
    }

    if turns.is_empty() {
        return Err(DialogueError::NoTurns);
    }

    Ok(turns)
}
