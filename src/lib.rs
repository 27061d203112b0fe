//! # Ferrule
//!
//! Safe, typed Rust bindings to the [PCRE2](https://www.pcre.org/) regular
//! expression engine (8-bit code units). The raw engine (symbols, opaque
//! types, flag values, and the build of the vendored C sources) comes from
//! [`pcre2-sys`](https://crates.io/crates/pcre2-sys); this crate is the
//! safety layer on top.
//!
//! Callers never touch raw handles, untyped flag integers, or manually
//! freed buffers: a compiled [`Pattern`](pattern::Pattern) owns its native
//! resource and releases it exactly once on drop, option flags are closed
//! typed sets split by phase, and every native status code maps to a
//! structured result. Not matching is a normal outcome, not an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use ferrule::prelude::*;
//!
//! let pat = Pattern::new(r"(\d{4})-(\d{2})-(\d{2})").unwrap();
//! match pat.exec(b"Date: 2026-02-12", MatchOptions::new()).unwrap() {
//!     MatchResult::Matched(caps) => {
//!         assert_eq!(caps.get(0), Some(&b"2026-02-12"[..]));
//!         assert_eq!(caps.get(1), Some(&b"2026"[..]));
//!         assert_eq!(caps.get(3), Some(&b"12"[..]));
//!     }
//!     MatchResult::NoMatch => unreachable!(),
//! }
//! ```
//!
//! Compile-time and match-time options are distinct types; passing one
//! where the other belongs is a compile error, and combining named options
//! is a plain OR-fold:
//!
//! ```rust
//! use ferrule::prelude::*;
//!
//! let pat = Pattern::with_options(
//!     r"fox | dog",
//!     CompileOption::Caseless | CompileOption::Extended,
//! )
//! .unwrap();
//! assert!(pat.is_match(b"The Quick Brown Fox").unwrap());
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`options`] | Typed compile-time / match-time option sets |
//! | [`compile`] | Pattern compilation |
//! | [`pattern`] | Compiled patterns and the capture-count query |
//! | [`exec`] | Match execution and capture extraction |
//! | [`error`] | Structured error types |
//! | `ffi` | Crate-private unsafe plumbing over `pcre2-sys` |
//!
//! ## Concurrency
//!
//! Compiled patterns are immutable; the engine takes all mutable scratch
//! state (the offset vector) as a per-call argument, so one pattern behind
//! an `Arc` can be matched from any number of threads without locking. No
//! match context is ever passed to the engine: JIT compilation would add
//! shared mutable native state per pattern and is deliberately left
//! unbound.

pub mod compile;
pub mod error;
pub mod exec;
mod ffi;
pub mod options;
pub mod pattern;
pub mod prelude;
