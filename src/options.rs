// options.rs - Typed option sets for the native engine's flag arguments.
//
// PCRE2 takes a bag of bits at compile time and a different bag of bits at
// match time. Both are plain u32 in C, which makes it easy to pass one where
// the other belongs. Here each flavor gets its own closed enum of named flags
// and its own opaque mask type, so mixing them up is a type error and a mask
// can never carry a bit this binding does not name.

use std::fmt;
use std::ops::BitOr;

use bitflags::bitflags;
use pcre2_sys::{
    PCRE2_ANCHORED, PCRE2_CASELESS, PCRE2_DOTALL, PCRE2_EXTENDED, PCRE2_MULTILINE, PCRE2_NOTBOL,
    PCRE2_NOTEMPTY, PCRE2_NOTEMPTY_ATSTART, PCRE2_NOTEOL, PCRE2_UNGREEDY,
};

bitflags! {
    // Closed universe of compile-time bits. Private: bitflags also generates
    // complement/difference operators that must not reach the public API.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    struct CompileFlags: u32 {
        const CASELESS = PCRE2_CASELESS;
        const MULTILINE = PCRE2_MULTILINE;
        const DOTALL = PCRE2_DOTALL;
        const EXTENDED = PCRE2_EXTENDED;
        const UNGREEDY = PCRE2_UNGREEDY;
        const ANCHORED = PCRE2_ANCHORED;
    }
}

bitflags! {
    // Closed universe of match-time bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    struct MatchFlags: u32 {
        const NOTBOL = PCRE2_NOTBOL;
        const NOTEOL = PCRE2_NOTEOL;
        const NOTEMPTY = PCRE2_NOTEMPTY;
        const NOTEMPTY_ATSTART = PCRE2_NOTEMPTY_ATSTART;
        const ANCHORED = PCRE2_ANCHORED;
    }
}

/// A single named compile-time option.
///
/// Only valid as an argument to [`compile`](crate::compile::compile) (via
/// [`CompileOptions`]); match-time options are a separate type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompileOption {
    /// Case-insensitive matching (`PCRE2_CASELESS`).
    Caseless,
    /// `^` and `$` match at internal newlines (`PCRE2_MULTILINE`).
    Multiline,
    /// `.` also matches newline (`PCRE2_DOTALL`).
    DotAll,
    /// Extended syntax: unescaped whitespace and `#` comments are ignored
    /// (`PCRE2_EXTENDED`).
    Extended,
    /// Quantifiers are lazy by default (`PCRE2_UNGREEDY`).
    Ungreedy,
    /// The match must start at the start offset (`PCRE2_ANCHORED`).
    Anchored,
}

impl CompileOption {
    fn flag(self) -> CompileFlags {
        match self {
            CompileOption::Caseless => CompileFlags::CASELESS,
            CompileOption::Multiline => CompileFlags::MULTILINE,
            CompileOption::DotAll => CompileFlags::DOTALL,
            CompileOption::Extended => CompileFlags::EXTENDED,
            CompileOption::Ungreedy => CompileFlags::UNGREEDY,
            CompileOption::Anchored => CompileFlags::ANCHORED,
        }
    }
}

/// A single named match-time option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchOption {
    /// The start of the subject is not the beginning of a line
    /// (`PCRE2_NOTBOL`).
    NotBol,
    /// The end of the subject is not the end of a line (`PCRE2_NOTEOL`).
    NotEol,
    /// An empty string is not a valid match (`PCRE2_NOTEMPTY`).
    NotEmpty,
    /// An empty string at the start offset is not a valid match
    /// (`PCRE2_NOTEMPTY_ATSTART`).
    NotEmptyAtStart,
    /// The match must start at the start offset (`PCRE2_ANCHORED`).
    Anchored,
}

impl MatchOption {
    fn flag(self) -> MatchFlags {
        match self {
            MatchOption::NotBol => MatchFlags::NOTBOL,
            MatchOption::NotEol => MatchFlags::NOTEOL,
            MatchOption::NotEmpty => MatchFlags::NOTEMPTY,
            MatchOption::NotEmptyAtStart => MatchFlags::NOTEMPTY_ATSTART,
            MatchOption::Anchored => MatchFlags::ANCHORED,
        }
    }
}

/// A combined set of [`CompileOption`]s.
///
/// Built by OR-ing named options together; the only exposed operations are
/// union and membership. Combining is idempotent and order-independent:
///
/// ```
/// use ferrule::options::{CompileOption, CompileOptions};
///
/// let a = CompileOptions::combine([CompileOption::Caseless, CompileOption::Caseless]);
/// let b = CompileOption::Caseless | CompileOption::Multiline;
/// let c = CompileOption::Multiline | CompileOption::Caseless;
/// assert_eq!(a, CompileOptions::combine([CompileOption::Caseless]));
/// assert_eq!(b, c);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompileOptions(CompileFlags);

/// A combined set of [`MatchOption`]s.
///
/// Same contract as [`CompileOptions`], for the match-time flavor.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchOptions(MatchFlags);

macro_rules! option_set_impl {
    ($set:ident, $opt:ident, $flags:ident) => {
        impl $set {
            /// The empty set (no flags).
            pub fn new() -> Self {
                $set($flags::empty())
            }

            /// Left-fold of bitwise OR over `options`, starting from empty.
            pub fn combine<I>(options: I) -> Self
            where
                I: IntoIterator<Item = $opt>,
            {
                options.into_iter().fold(Self::new(), |acc, opt| acc | opt)
            }

            /// Whether `option` is present in this set.
            pub fn contains(self, option: $opt) -> bool {
                self.0.contains(option.flag())
            }

            /// Whether no flags are set.
            pub fn is_empty(self) -> bool {
                self.0.is_empty()
            }

            // The raw value handed to the native call. Crate-private: the
            // integer representation is not part of the public contract.
            pub(crate) fn bits(self) -> u32 {
                self.0.bits()
            }
        }

        impl Default for $set {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<$opt> for $set {
            fn from(option: $opt) -> Self {
                $set(option.flag())
            }
        }

        impl FromIterator<$opt> for $set {
            fn from_iter<I: IntoIterator<Item = $opt>>(iter: I) -> Self {
                Self::combine(iter)
            }
        }

        impl BitOr for $set {
            type Output = $set;
            fn bitor(self, rhs: $set) -> $set {
                $set(self.0 | rhs.0)
            }
        }

        impl BitOr<$opt> for $set {
            type Output = $set;
            fn bitor(self, rhs: $opt) -> $set {
                $set(self.0 | rhs.flag())
            }
        }

        impl BitOr<$set> for $opt {
            type Output = $set;
            fn bitor(self, rhs: $set) -> $set {
                $set(self.flag() | rhs.0)
            }
        }

        impl BitOr for $opt {
            type Output = $set;
            fn bitor(self, rhs: $opt) -> $set {
                $set(self.flag() | rhs.flag())
            }
        }

        // Debug lists the contained flag names rather than raw bits.
        impl fmt::Debug for $set {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(", stringify!($set))?;
                if self.0.is_empty() {
                    write!(f, "<empty>")?;
                } else {
                    let mut first = true;
                    for (name, _) in self.0.iter_names() {
                        if !first {
                            write!(f, " | ")?;
                        }
                        write!(f, "{}", name)?;
                        first = false;
                    }
                }
                write!(f, ")")
            }
        }
    };
}

option_set_impl!(CompileOptions, CompileOption, CompileFlags);
option_set_impl!(MatchOptions, MatchOption, MatchFlags);
