// ffi.rs - Unsafe plumbing over the raw pcre2-sys surface.
//
// Minimal surface: just enough to compile patterns, query capture counts,
// run matches, and manage the per-call match-data block. This is the only
// module containing unsafe code; everything above it works with owned
// handles that free their native resource exactly once on drop.

use std::ffi::c_void;
use std::os::raw::c_int;
use std::ptr::{self, NonNull};
use std::slice;

use pcre2_sys::{
    pcre2_code_8, pcre2_code_free_8, pcre2_compile_8, pcre2_get_error_message_8,
    pcre2_get_ovector_pointer_8, pcre2_match_8, pcre2_match_data_8, pcre2_match_data_create_8,
    pcre2_match_data_free_8, pcre2_pattern_info_8, PCRE2_INFO_CAPTURECOUNT,
};

/// Sentinel the engine writes into ovector slots for capture groups that did
/// not participate in the match. `PCRE2_UNSET` in C is a macro with a cast,
/// which the generated bindings do not carry.
pub(crate) const UNSET: usize = usize::MAX;

/// Diagnostic text for a native status code, straight from the engine.
///
/// Falls back to the bare code when the engine does not recognize it (or the
/// text would not fit the buffer, which no current pcre2 message does).
pub(crate) fn error_message(code: c_int) -> String {
    let mut buf = [0u8; 256];
    let len = unsafe { pcre2_get_error_message_8(code, buf.as_mut_ptr(), buf.len()) };
    if len < 0 {
        return format!("unknown error code {}", code);
    }
    String::from_utf8_lossy(&buf[..len as usize]).into_owned()
}

// --- Compiled code handle ---

/// Owned, non-null handle to a compiled `pcre2_code`.
///
/// Move-only; the native resource is released exactly once, when the handle
/// is dropped. No field and no deref is exposed, so handle identity is never
/// observable outside this module.
#[derive(Debug)]
pub(crate) struct Code {
    raw: NonNull<pcre2_code_8>,
}

impl Code {
    /// One call to the native compile primitive.
    ///
    /// The pattern is passed as pointer + explicit length; no terminator is
    /// appended and embedded NUL bytes are legal. On a null handle the
    /// scratch error code and the byte offset into the pattern are returned
    /// and the handle is not touched further.
    pub(crate) fn compile(pattern: &[u8], options: u32) -> Result<Code, (c_int, usize)> {
        let mut error_code: c_int = 0;
        let mut error_offset: usize = 0;
        let raw = unsafe {
            pcre2_compile_8(
                pattern.as_ptr(),
                pattern.len(),
                options,
                &mut error_code,
                &mut error_offset,
                ptr::null_mut(),
            )
        };
        match NonNull::new(raw) {
            Some(raw) => Ok(Code { raw }),
            None => Err((error_code, error_offset)),
        }
    }

    /// Number of parenthesized capture groups, straight from the engine.
    ///
    /// A negative status here means the binding and the engine disagree
    /// about the ABI, not that the caller did anything wrong.
    pub(crate) fn capture_count(&self) -> Result<u32, c_int> {
        let mut count: u32 = 0;
        let rc = unsafe {
            pcre2_pattern_info_8(
                self.raw.as_ptr(),
                PCRE2_INFO_CAPTURECOUNT,
                &mut count as *mut u32 as *mut c_void,
            )
        };
        if rc != 0 {
            return Err(rc);
        }
        Ok(count)
    }
}

impl Drop for Code {
    fn drop(&mut self) {
        unsafe { pcre2_code_free_8(self.raw.as_ptr()) }
    }
}

// A compiled pattern is never mutated by matching; pcre2_match takes all
// mutable scratch state through the match-data argument.
unsafe impl Send for Code {}
unsafe impl Sync for Code {}

// --- Per-call match data ---

/// Call-scoped ovector block for a single match.
///
/// Sized from the capture count before every call, exclusively owned for the
/// duration of that call, and never retained across calls.
pub(crate) struct MatchData {
    raw: NonNull<pcre2_match_data_8>,
}

impl MatchData {
    /// Allocate room for `capture_count + 1` offset pairs: one pair for the
    /// whole match plus one per capture group. Returns `None` only if the
    /// native allocation itself fails.
    pub(crate) fn for_capture_count(capture_count: u32) -> Option<MatchData> {
        let raw = unsafe { pcre2_match_data_create_8(capture_count + 1, ptr::null_mut()) };
        NonNull::new(raw).map(|raw| MatchData { raw })
    }

    /// One call to the native execute primitive, from start offset 0.
    ///
    /// The subject goes through as pointer + explicit length, uncopied;
    /// embedded NUL bytes are legal. No match context is passed: JIT state
    /// and other per-pattern mutable native extras stay unbound.
    pub(crate) fn exec(&mut self, code: &Code, subject: &[u8], options: u32) -> c_int {
        unsafe {
            pcre2_match_8(
                code.raw.as_ptr(),
                subject.as_ptr(),
                subject.len(),
                0,
                options,
                self.raw.as_ptr(),
                ptr::null_mut(),
            )
        }
    }

    /// The first `pairs` ovector pairs as a flat offset slice.
    ///
    /// Only meaningful after `exec` returned `pairs > 0`; the engine
    /// guarantees at least that many pairs are populated.
    pub(crate) fn ovector(&self, pairs: usize) -> &[usize] {
        unsafe {
            let ptr = pcre2_get_ovector_pointer_8(self.raw.as_ptr());
            slice::from_raw_parts(ptr, pairs * 2)
        }
    }
}

impl Drop for MatchData {
    fn drop(&mut self) {
        unsafe { pcre2_match_data_free_8(self.raw.as_ptr()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_and_drop() {
        let code = Code::compile(b"abc", 0).unwrap();
        drop(code);
    }

    // unwrap_err in tests needs the Ok side to be debuggable too.
    #[test]
    fn code_is_debuggable() {
        let code = Code::compile(b"abc", 0).unwrap();
        assert!(format!("{:?}", code).starts_with("Code"));
        let err = Code::compile(b"a)", 0).unwrap_err();
        assert!(format!("{:?}", err).starts_with("("));
    }

    #[test]
    fn compile_failure_reports_code_and_offset() {
        let (code, offset) = Code::compile(b"a)", 0).unwrap_err();
        assert!(code > 0, "pcre2 compile error codes are positive: {code}");
        assert!(offset <= 2);
    }

    #[test]
    fn capture_count_matches_pattern() {
        let code = Code::compile(b"(a)(b(c))", 0).unwrap();
        assert_eq!(code.capture_count().unwrap(), 3);
        let code = Code::compile(b"abc", 0).unwrap();
        assert_eq!(code.capture_count().unwrap(), 0);
    }

    #[test]
    fn exec_fills_the_ovector() {
        let code = Code::compile(b"(b)c", 0).unwrap();
        let mut data = MatchData::for_capture_count(1).unwrap();
        let rc = data.exec(&code, b"abc", 0);
        assert_eq!(rc, 2);
        assert_eq!(data.ovector(2), &[1, 3, 1, 2]);
    }
}
