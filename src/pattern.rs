// pattern.rs - The compiled, immutable regular expression.
//
// A Pattern is an owned native handle plus the original source text. The
// source text alone defines identity (equality, ordering, hashing, display);
// the handle never leaks into observable state. The capture-group count is
// queried from the engine once and memoized, since the pattern can no longer
// change.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use crate::compile;
use crate::error::Error;
use crate::exec::{self, MatchResult};
use crate::ffi::Code;
use crate::options::{CompileOptions, MatchOptions};

/// A compiled regular expression.
///
/// Created only by [`compile`](crate::compile::compile) (or the constructors
/// here, which delegate to it); immutable afterwards. The native resource
/// behind it is released exactly once, when the last owner drops the
/// pattern, never explicitly. `Pattern` is move-only; share one across
/// threads with `Arc`, which is safe because matching never mutates the
/// compiled code.
///
/// Equality, ordering, and hashing consider the source text only. Compile
/// options do not participate: two patterns compiled from the same text
/// with different options compare equal.
///
/// # Examples
///
/// ```
/// use ferrule::prelude::*;
///
/// let pat = Pattern::new(r"\d+").unwrap();
/// assert!(pat.is_match(b"agent 007").unwrap());
/// assert!(!pat.is_match(b"agent zero").unwrap());
/// assert_eq!(pat.to_string(), r"\d+");
/// ```
pub struct Pattern {
    code: Code,
    source: Box<[u8]>,
    capture_count: OnceLock<u32>,
}

impl Pattern {
    /// Compile a pattern with no options.
    pub fn new(pattern: &str) -> Result<Pattern, Error> {
        compile::compile(pattern.as_bytes(), CompileOptions::new())
    }

    /// Compile a pattern from raw bytes with no options.
    pub fn new_bytes(pattern: &[u8]) -> Result<Pattern, Error> {
        compile::compile(pattern, CompileOptions::new())
    }

    /// Compile a pattern with the given compile-time options.
    ///
    /// ```
    /// use ferrule::prelude::*;
    ///
    /// let pat = Pattern::with_options("hello", CompileOption::Caseless).unwrap();
    /// assert!(pat.is_match(b"HELLO").unwrap());
    /// ```
    pub fn with_options(pattern: &str, options: impl Into<CompileOptions>) -> Result<Pattern, Error> {
        compile::compile(pattern.as_bytes(), options.into())
    }

    /// Compile a pattern from raw bytes with the given compile-time options.
    pub fn with_options_bytes(
        pattern: &[u8],
        options: impl Into<CompileOptions>,
    ) -> Result<Pattern, Error> {
        compile::compile(pattern, options.into())
    }

    // Only the compiler creates patterns.
    pub(crate) fn from_parts(code: Code, source: &[u8]) -> Pattern {
        Pattern {
            code,
            source: source.into(),
            capture_count: OnceLock::new(),
        }
    }

    /// The original pattern text.
    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// Number of parenthesized capture groups in the pattern (excluding the
    /// whole-match group 0).
    ///
    /// Queried from the engine on first use and memoized. A failing query is
    /// an [`Error::Internal`]: it means the binding and the engine disagree
    /// about the ABI, not that the caller did anything wrong.
    pub fn capture_count(&self) -> Result<u32, Error> {
        if let Some(&count) = self.capture_count.get() {
            return Ok(count);
        }
        let count = self.code.capture_count().map_err(|rc| {
            Error::internal(format!("capture count query failed with status {}", rc))
        })?;
        Ok(*self.capture_count.get_or_init(|| count))
    }

    /// Run the pattern against `subject`. See [`exec`](crate::exec::exec).
    pub fn exec<'s>(
        &self,
        subject: &'s [u8],
        options: impl Into<MatchOptions>,
    ) -> Result<MatchResult<'s>, Error> {
        exec::exec(self, subject, options.into())
    }

    /// Whether the pattern matches anywhere in `subject`.
    ///
    /// Unexpected engine failures surface as errors rather than `false`.
    pub fn is_match(&self, subject: &[u8]) -> Result<bool, Error> {
        Ok(self.exec(subject, MatchOptions::new())?.is_match())
    }

    pub(crate) fn code(&self) -> &Code {
        &self.code
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.source))
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern")
            .field(&String::from_utf8_lossy(&self.source))
            .finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Pattern) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Pattern) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pattern {
    fn cmp(&self, other: &Pattern) -> Ordering {
        self.source.cmp(&other.source)
    }
}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(pattern: &Pattern) -> u64 {
        let mut hasher = DefaultHasher::new();
        pattern.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn identity_follows_source_text() {
        let a = Pattern::new(r"a(b)c").unwrap();
        let b = Pattern::new(r"a(b)c").unwrap();
        let c = Pattern::new(r"xyz").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.cmp(&c), r"a(b)c".as_bytes().cmp(r"xyz".as_bytes()));
    }

    #[test]
    fn display_is_the_source_text() {
        let pat = Pattern::new(r"^\w+$").unwrap();
        assert_eq!(pat.to_string(), r"^\w+$");
        assert_eq!(format!("{:?}", pat), r#"Pattern("^\\w+$")"#);
    }

    #[test]
    fn capture_count_is_memoized() {
        let pat = Pattern::new(r"(a)(b(c))(?:d)").unwrap();
        assert_eq!(pat.capture_count().unwrap(), 3);
        // Second call hits the memo and agrees.
        assert_eq!(pat.capture_count().unwrap(), 3);
    }

    #[test]
    fn zero_capture_groups() {
        let pat = Pattern::new(r"abc").unwrap();
        assert_eq!(pat.capture_count().unwrap(), 0);
    }

    #[test]
    fn patterns_work_as_map_keys() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(Pattern::new(r"\d+").unwrap(), "digits");
        let probe = Pattern::new(r"\d+").unwrap();
        assert_eq!(map.get(&probe), Some(&"digits"));
    }
}
