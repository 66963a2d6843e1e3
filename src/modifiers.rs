//! Modifier keywords
//!
//! Access flags are rendered as the keywords of the element kind they belong to, because some
//! bits carry different meanings for different kinds of elements (e.g., `0x0080` is `transient`
//! on a field but `varargs` on a method).

use std::{fmt, str::FromStr};

use itertools::Itertools;

use crate::{AccessFlags, Flag, errors::ParseModifierError};

/// The kind of element a set of access flags belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum ElementKind {
    /// A class or an interface.
    #[display("class")]
    Class,
    /// A field.
    #[display("field")]
    Field,
    /// A method.
    #[display("method")]
    Method,
}

impl ElementKind {
    /// Gets the flags of the catalog that apply to this kind of element, in catalog order.
    #[must_use]
    #[allow(clippy::enum_glob_use)]
    pub const fn applicable_flags(self) -> &'static [Flag] {
        use Flag::*;
        match self {
            Self::Class => &[
                Public, Final, Interface, Abstract, Synthetic, Annotation, Enum,
            ],
            Self::Field => &[
                Public, Private, Protected, Static, Final, Volatile, Transient, Synthetic, Enum,
            ],
            Self::Method => &[
                Public,
                Private,
                Protected,
                Static,
                Final,
                Synchronized,
                Native,
                Abstract,
                Strict,
                Synthetic,
                Varargs,
            ],
        }
    }

    /// Gets the union of the masks of [`ElementKind::applicable_flags`].
    #[must_use]
    pub fn applicable_mask(self) -> AccessFlags {
        self.applicable_flags()
            .iter()
            .fold(AccessFlags::empty(), |mask, &flag| mask.union(flag.into()))
    }
}

/// The modifier keywords of a set of access flags.
/// Created by [`AccessFlags::modifiers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifiers {
    flags: AccessFlags,
    kind: ElementKind,
}

impl AccessFlags {
    /// Gets the modifier keywords of the flags as they apply to an element of `kind`.
    ///
    /// Flags that do not apply to `kind` and bits outside the catalog are not rendered.
    #[must_use]
    pub const fn modifiers(self, kind: ElementKind) -> Modifiers {
        Modifiers { flags: self, kind }
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keywords = self
            .kind
            .applicable_flags()
            .iter()
            .filter(|&&flag| self.flags.is(flag))
            .map(|flag| flag.keyword())
            .join(" ");
        f.write_str(&keywords)
    }
}

impl FromStr for AccessFlags {
    type Err = ParseModifierError;

    /// Parses whitespace separated modifier keywords, e.g., `public static final`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .try_fold(Self::empty(), |flags, keyword| {
                let flag: Flag = keyword.parse()?;
                Ok(flags.union(flag.into()))
            })
    }
}
