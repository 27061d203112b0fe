// compile.rs - Pattern compilation.
//
// Exactly one native compile call per invocation. A null handle from the
// engine becomes a structured Error::Compile carrying the engine's own
// diagnostic text and the byte offset into the pattern; a non-null handle is
// wrapped into an owned Pattern that frees it on drop.

use crate::error::Error;
use crate::ffi::Code;
use crate::options::CompileOptions;
use crate::pattern::Pattern;

/// Compile `pattern` with `options` into a [`Pattern`].
///
/// Referentially transparent: identical `(pattern, options)` inputs always
/// yield patterns with identical matching behavior, and nothing about the
/// underlying native handle (its identity, its address) is observable, so
/// two separately compiled copies are indistinguishable.
///
/// ```
/// use ferrule::compile::compile;
/// use ferrule::options::CompileOptions;
///
/// let pat = compile(b"ab+c", CompileOptions::new()).unwrap();
/// assert!(pat.is_match(b"xabbbc").unwrap());
///
/// let err = compile(b"*", CompileOptions::new()).unwrap_err();
/// assert!(err.to_string().starts_with("pattern error"));
/// ```
pub fn compile(pattern: &[u8], options: CompileOptions) -> Result<Pattern, Error> {
    match Code::compile(pattern, options.bits()) {
        Ok(code) => Ok(Pattern::from_parts(code, pattern)),
        Err((code, offset)) => Err(Error::compile(code, offset)),
    }
}
