//! Line-break merge algorithm
//!
//! Fuses adjacent units so that no unit boundary would put a prohibited
//! character at the start or end of a wrapped line. The same algorithm runs
//! over word units or char units; only the caller's bookkeeping differs.
//!
//! Three passes run in order, each repeated until a scan changes nothing:
//!
//! 1. **Line-start absorption**: a unit whose first grapheme may not start a
//!    line is appended to a non-blank predecessor.
//! 2. **Line-end carry**: a unit ending in a character that may not end a line
//!    swallows directly following units made only of such characters, then is
//!    prepended to the next non-blank unit.
//! 3. **Inseparable join**: consecutive units containing inseparable marks are
//!    joined.
//!
//! Every pass reads one list and writes a new one. A merged unit keeps the id
//! of the unit that absorbed the others: the predecessor in pass 1, the
//! following unit in pass 2 and the first unit of the run in pass 3.

use tracing::trace;

use crate::language::LanguageTag;
use crate::rules::LineBreakRules;
use crate::segment::is_blank;
use crate::segmenter::{Segmenter, UnicodeSegmenter};

/// A unit taking part in a merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeUnit {
    id: usize,
    text: String,
    language: LanguageTag,
}

impl MergeUnit {
    /// Create a unit in the default language
    pub fn new(id: usize, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            language: LanguageTag::default_tag(),
        }
    }

    /// Set the language used to find the unit's first grapheme
    pub fn with_language(mut self, language: LanguageTag) -> Self {
        self.language = language;
        self
    }

    /// Caller-assigned identity
    pub fn id(&self) -> usize {
        self.id
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Language of the unit
    pub fn language(&self) -> &LanguageTag {
        &self.language
    }

    /// Split into identity and text
    pub fn into_parts(self) -> (usize, String) {
        (self.id, self.text)
    }
}

/// Run all three passes with the UAX #29 grapheme segmenter
pub fn merge_units<R>(units: Vec<MergeUnit>, rules: &R) -> Vec<MergeUnit>
where
    R: LineBreakRules + ?Sized,
{
    merge_with(units, rules, &UnicodeSegmenter)
}

/// Run all three passes, finding first graphemes with `segmenter`
pub fn merge_with<R, S>(units: Vec<MergeUnit>, rules: &R, segmenter: &S) -> Vec<MergeUnit>
where
    R: LineBreakRules + ?Sized,
    S: Segmenter + ?Sized,
{
    let units = absorb_line_start(units, rules, segmenter);
    let units = carry_line_end(units, rules);
    join_inseparable(units, rules)
}

/// Pass 1: append units that may not start a line to their predecessor
pub fn absorb_line_start<R, S>(units: Vec<MergeUnit>, rules: &R, segmenter: &S) -> Vec<MergeUnit>
where
    R: LineBreakRules + ?Sized,
    S: Segmenter + ?Sized,
{
    until_stable(units, |units| {
        let mut merged: Vec<MergeUnit> = Vec::with_capacity(units.len());
        for unit in units {
            if let Some(previous) = merged.last_mut() {
                let prohibited = segmenter
                    .first_grapheme(&unit.text, &unit.language)
                    .is_some_and(|grapheme| rules.prohibits_line_start(grapheme));
                if prohibited && !is_blank(&previous.text) {
                    trace!(into = previous.id, from = unit.id, text = %unit.text, "line-start absorption");
                    previous.text.push_str(&unit.text);
                    continue;
                }
            }
            merged.push(unit);
        }
        merged
    })
}

/// Pass 2: carry units that may not end a line onto the next non-blank unit
pub fn carry_line_end<R>(units: Vec<MergeUnit>, rules: &R) -> Vec<MergeUnit>
where
    R: LineBreakRules + ?Sized,
{
    until_stable(units, |units| {
        let mut merged = Vec::with_capacity(units.len());
        let mut carried: Option<MergeUnit> = None;

        for mut unit in units {
            if let Some(mut pending) = carried.take() {
                if rules.is_line_end_run(&unit.text) {
                    trace!(into = pending.id, from = unit.id, text = %unit.text, "line-end run");
                    pending.text.push_str(&unit.text);
                    carried = Some(pending);
                    continue;
                }
                if is_blank(&unit.text) {
                    merged.push(pending);
                } else {
                    trace!(into = unit.id, from = pending.id, text = %pending.text, "line-end carry");
                    unit.text.insert_str(0, &pending.text);
                }
            }

            if rules.prohibits_line_end(&unit.text) {
                carried = Some(unit);
            } else {
                merged.push(unit);
            }
        }

        merged.extend(carried);
        merged
    })
}

/// Pass 3: join consecutive units containing inseparable marks
pub fn join_inseparable<R>(units: Vec<MergeUnit>, rules: &R) -> Vec<MergeUnit>
where
    R: LineBreakRules + ?Sized,
{
    until_stable(units, |units| {
        let mut merged: Vec<MergeUnit> = Vec::with_capacity(units.len());
        for unit in units {
            if let Some(previous) = merged.last_mut() {
                if rules.is_inseparable(&previous.text) && rules.is_inseparable(&unit.text) {
                    trace!(into = previous.id, from = unit.id, text = %unit.text, "inseparable join");
                    previous.text.push_str(&unit.text);
                    continue;
                }
            }
            merged.push(unit);
        }
        merged
    })
}

/// Repeat `scan` until it stops shrinking the list; merges only ever shrink it
fn until_stable<F>(mut units: Vec<MergeUnit>, mut scan: F) -> Vec<MergeUnit>
where
    F: FnMut(Vec<MergeUnit>) -> Vec<MergeUnit>,
{
    loop {
        let before = units.len();
        units = scan(units);
        if units.len() == before {
            return units;
        }
    }
}
