// exec.rs - Match execution and capture extraction.
//
// One native execute call per invocation, against a match-data block sized
// from the pattern's capture count and scoped to the call. The returned
// status code is triaged into the no-match outcome, a structured error, or
// a walk over the filled ovector pairs to materialize captures.

use std::fmt;

use smallvec::SmallVec;

use pcre2_sys::PCRE2_ERROR_NOMATCH;

use crate::error::Error;
use crate::ffi::{self, MatchData};
use crate::options::MatchOptions;
use crate::pattern::Pattern;

/// Outcome of running a pattern against a subject.
///
/// Not matching is an expected outcome, not an error; errors are reserved
/// for the engine actually failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult<'s> {
    /// The engine reported no match.
    NoMatch,
    /// The engine matched; captures borrow the subject.
    Matched(Captures<'s>),
}

impl<'s> MatchResult<'s> {
    /// Whether this outcome is a match.
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    /// The captures, if this outcome is a match.
    pub fn captures(&self) -> Option<&Captures<'s>> {
        match self {
            MatchResult::Matched(captures) => Some(captures),
            MatchResult::NoMatch => None,
        }
    }

    /// Consume the outcome, yielding the captures of a match.
    pub fn into_captures(self) -> Option<Captures<'s>> {
        match self {
            MatchResult::Matched(captures) => Some(captures),
            MatchResult::NoMatch => None,
        }
    }
}

/// The captured substrings of one match, in engine order.
///
/// Index 0 is the whole match; indices `1..len()` are the parenthesized
/// groups in left-to-right nesting order. A group that matched the empty
/// string, or that did not participate in the match at all, reports an
/// empty slice.
#[derive(Clone, PartialEq, Eq)]
pub struct Captures<'s> {
    subject: &'s [u8],
    // (start, end) byte offsets into the subject; UNSET marks a group that
    // did not participate.
    slots: SmallVec<[(usize, usize); 8]>,
}

impl<'s> Captures<'s> {
    /// Number of filled capture slots, including the whole match.
    ///
    /// This is the count the engine reported for this particular match; it
    /// can be smaller than `pattern.capture_count() + 1` when trailing
    /// groups did not participate.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the slot sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The captured substring in slot `i`, or `None` when `i` is out of
    /// range. Slot 0 is the whole match.
    pub fn get(&self, i: usize) -> Option<&'s [u8]> {
        let &(start, end) = self.slots.get(i)?;
        if start == ffi::UNSET || start == end {
            return Some(&[]);
        }
        Some(&self.subject[start..end])
    }

    /// Byte range of slot `i` in the subject, or `None` when `i` is out of
    /// range or the group did not participate.
    pub fn span(&self, i: usize) -> Option<(usize, usize)> {
        let &(start, end) = self.slots.get(i)?;
        if start == ffi::UNSET {
            return None;
        }
        Some((start, end))
    }

    /// Iterate over all captured substrings, whole match first.
    pub fn iter(&self) -> impl Iterator<Item = &'s [u8]> + '_ {
        (0..self.len()).map(|i| self.get(i).unwrap_or_default())
    }

    /// All captured substrings as a vector, whole match first.
    pub fn to_vec(&self) -> Vec<&'s [u8]> {
        self.iter().collect()
    }
}

impl fmt::Debug for Captures<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(String::from_utf8_lossy))
            .finish()
    }
}

/// Run `pattern` against `subject` with the given match-time options.
///
/// A pure function of its inputs: no state is retained between calls,
/// nothing is mutated, and all engine scratch space (the offset vector) is
/// allocated for this call and dropped before returning. One immutable
/// [`Pattern`] can therefore be matched concurrently from any number of
/// threads. No match context is passed to the engine, so JIT-compiled
/// matching and other per-pattern mutable native state are out of scope.
///
/// The subject is arbitrary bytes, passed to the engine by pointer and
/// explicit length without copying; embedded NUL bytes are matched like any
/// other byte.
///
/// ```
/// use ferrule::prelude::*;
///
/// let pat = Pattern::new(r"(\w+)=(\w+)").unwrap();
/// let result = exec(&pat, b"key=value", MatchOptions::new()).unwrap();
/// let caps = result.into_captures().unwrap();
/// assert_eq!(caps.to_vec(), vec![&b"key=value"[..], b"key", b"value"]);
///
/// assert_eq!(
///     exec(&pat, b"nothing here", MatchOptions::new()).unwrap(),
///     MatchResult::NoMatch,
/// );
/// ```
pub fn exec<'s>(
    pattern: &Pattern,
    subject: &'s [u8],
    options: MatchOptions,
) -> Result<MatchResult<'s>, Error> {
    let capture_count = pattern.capture_count()?;
    let mut data = MatchData::for_capture_count(capture_count)
        .ok_or_else(|| Error::internal("match data allocation failed"))?;

    let rc = data.exec(pattern.code(), subject, options.bits());
    if rc == PCRE2_ERROR_NOMATCH {
        return Ok(MatchResult::NoMatch);
    }
    if rc < 0 {
        return Err(Error::exec(rc));
    }
    if rc == 0 {
        // The engine ran out of ovector room, which the sizing rule
        // (capture_count + 1 pairs) makes impossible.
        return Err(Error::internal(
            "ovector smaller than the sizing rule permits",
        ));
    }

    let pairs = rc as usize;
    let ovector = data.ovector(pairs);
    let mut slots: SmallVec<[(usize, usize); 8]> = SmallVec::with_capacity(pairs);
    for k in 0..pairs {
        slots.push((ovector[2 * k], ovector[2 * k + 1]));
    }
    Ok(MatchResult::Matched(Captures { subject, slots }))
}
