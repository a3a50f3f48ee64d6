//! Low-level text scanning for the effect grammar.
//!
//! All offsets are byte offsets into the scanned `&str` and always fall
//! on char boundaries. Nothing here allocates except `strip_spans`.

use std::ops::Range;

use crate::core::Stat;

/// Marks a role restriction: 【室長・講師】
pub const RESTRICTION_OPEN: char = '【';
pub const RESTRICTION_CLOSE: char = '】';
/// Marks a condition: 〈満足8以上〉
pub const CONDITION_OPEN: char = '〈';
pub const CONDITION_CLOSE: char = '〉';
/// Separates list items inside markers.
pub const LIST_SEPARATOR: char = '・';
/// Ends a sentence, and with it a conditional effect.
pub const TERMINATOR: char = '。';

/// A non-empty span between an open and a close marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bracketed {
    /// Offset of the open marker.
    pub start: usize,
    /// Text between the markers.
    pub inner: Range<usize>,
    /// Offset just past the close marker.
    pub end: usize,
}

/// A conditional marker pair plus the effect text that follows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConditionalSpan {
    pub start: usize,
    pub condition: Range<usize>,
    pub effect: Range<usize>,
}

impl ConditionalSpan {
    /// Offset just past the effect text.
    #[must_use]
    pub fn end(&self) -> usize {
        self.effect.end
    }
}

/// Find the first `open … close` span at or after `from` whose content is
/// non-empty. The first `close` after an `open` ends the candidate.
#[must_use]
pub fn find_bracketed(text: &str, from: usize, open: char, close: char) -> Option<Bracketed> {
    let mut search = from;
    while let Some(rel) = text.get(search..)?.find(open) {
        let start = search + rel;
        let inner_start = start + open.len_utf8();
        match text[inner_start..].find(close)? {
            0 => search = inner_start,
            len => {
                let inner_end = inner_start + len;
                return Some(Bracketed {
                    start,
                    inner: inner_start..inner_end,
                    end: inner_end + close.len_utf8(),
                });
            }
        }
    }
    None
}

/// Every `〈condition〉effect` span, left to right, non-overlapping.
///
/// The effect text runs up to the next terminator or condition marker
/// and must be at least `min_effect_len` bytes long for the span to count.
#[must_use]
pub fn conditional_spans(text: &str, min_effect_len: usize) -> Vec<ConditionalSpan> {
    let mut spans = Vec::new();
    let mut from = 0;

    while let Some(bracket) = find_bracketed(text, from, CONDITION_OPEN, CONDITION_CLOSE) {
        let effect_end = text[bracket.end..]
            .find(|c: char| c == TERMINATOR || c == CONDITION_OPEN)
            .map_or(text.len(), |rel| bracket.end + rel);

        if effect_end - bracket.end >= min_effect_len {
            spans.push(ConditionalSpan {
                start: bracket.start,
                condition: bracket.inner,
                effect: bracket.end..effect_end,
            });
            from = effect_end;
        } else {
            from = bracket.start + CONDITION_OPEN.len_utf8();
        }
    }

    spans
}

/// Copy `text` with the given (sorted, disjoint) ranges removed.
#[must_use]
pub fn strip_spans(text: &str, spans: impl IntoIterator<Item = Range<usize>>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        out.push_str(&text[cursor..span.start]);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Every non-empty restriction span, left to right.
#[must_use]
pub fn restriction_spans(text: &str) -> Vec<Bracketed> {
    let mut spans = Vec::new();
    let mut from = 0;
    while let Some(bracket) = find_bracketed(text, from, RESTRICTION_OPEN, RESTRICTION_CLOSE) {
        from = bracket.end;
        spans.push(bracket);
    }
    spans
}

/// A stat token starting exactly at `pos`, and the offset after it.
#[must_use]
pub fn stat_at(text: &str, pos: usize) -> Option<(Stat, usize)> {
    let rest = text.get(pos..)?;
    Stat::ALL
        .into_iter()
        .find(|stat| rest.starts_with(stat.label()))
        .map(|stat| (stat, pos + stat.label().len()))
}

/// A run of one or more ASCII digits starting at `pos`, and the offset
/// after it. Overlong runs saturate at `i64::MAX`.
#[must_use]
pub fn number_at(text: &str, pos: usize) -> Option<(i64, usize)> {
    let rest = text.get(pos..)?;
    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let value = rest.as_bytes()[..len].iter().fold(0i64, |acc, &b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some((value, pos + len))
}

/// `literal` starting exactly at `pos`, and the offset after it.
#[must_use]
pub fn literal_at(text: &str, pos: usize, literal: &str) -> Option<usize> {
    text.get(pos..)?
        .starts_with(literal)
        .then(|| pos + literal.len())
}

/// Byte offset of the char after the one at `pos`.
#[must_use]
pub fn next_char(text: &str, pos: usize) -> usize {
    text[pos..].chars().next().map_or(text.len(), |c| pos + c.len_utf8())
}
