// prelude.rs - Convenient re-exports for the public API.
//
//! # Prelude
//!
//! ```
//! use ferrule::prelude::*;
//!
//! let pat = Pattern::new(r"\d+").unwrap();
//! let caps = exec(&pat, b"answer: 42", MatchOptions::new())
//!     .unwrap()
//!     .into_captures()
//!     .unwrap();
//! assert_eq!(caps.get(0), Some(&b"42"[..]));
//! ```

pub use crate::compile::compile;
pub use crate::error::Error;
pub use crate::exec::{exec, Captures, MatchResult};
pub use crate::options::{CompileOption, CompileOptions, MatchOption, MatchOptions};
pub use crate::pattern::Pattern;
