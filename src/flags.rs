//! Access flags of JVM classes, fields and methods

use std::{fmt, str::FromStr};

use bitflags::bitflags;

use crate::{errors::ParseModifierError, macros::flag_catalog};

bitflags! {
    /// The access flags (also known as modifiers) of a class, a field or a method.
    ///
    /// Any `u16` is accepted as is. Bits without a name in the catalog are kept verbatim
    /// so that a value read from a class file is written back unchanged. No combination
    /// of flags is rejected either; e.g., a value may be both `public` and `private`.
    #[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
    pub struct AccessFlags: u16 {
        /// Declared `public`; may be accessed from outside its package.
        const PUBLIC = 0x0001;
        /// Declared `private`; accessible only within the defining class and other classes
        /// belonging to the same nest.
        const PRIVATE = 0x0002;
        /// Declared `protected`; may be accessed within subclasses.
        const PROTECTED = 0x0004;
        /// Declared `static`.
        const STATIC = 0x0008;
        /// Declared `final`.
        const FINAL = 0x0010;
        /// Declared `synchronized`; invocation is wrapped by a monitor use.
        const SYNCHRONIZED = 0x0020;
        /// Declared `volatile`; cannot be cached.
        const VOLATILE = 0x0040;
        /// Declared `transient`; not written or read by a persistent object manager.
        const TRANSIENT = 0x0080;
        /// Declared `native`; implemented in a language other than Java.
        const NATIVE = 0x0100;
        /// Is an interface, not a class.
        const INTERFACE = 0x0200;
        /// Declared `abstract`.
        const ABSTRACT = 0x0400;
        /// In a class file whose major version is at least 46 and at most 60;
        /// declared `strictfp`.
        const STRICT = 0x0800;
        /// Declared synthetic; not present in the source code.
        const SYNTHETIC = 0x1000;
        /// Declared as an annotation interface.
        const ANNOTATION = 0x2000;
        /// Declared as an enum class or an element of an enum class.
        const ENUM = 0x4000;
        /// Declared with variable number of arguments.
        /// NOTE: Shares its bit with [`AccessFlags::TRANSIENT`], which only applies to fields.
        const VARARGS = 0x0080;
    }
}

flag_catalog! {
    /// See [`AccessFlags::PUBLIC`].
    Public(PUBLIC, "public") => is_public, set_public;
    /// See [`AccessFlags::PRIVATE`].
    Private(PRIVATE, "private") => is_private, set_private;
    /// See [`AccessFlags::PROTECTED`].
    Protected(PROTECTED, "protected") => is_protected, set_protected;
    /// See [`AccessFlags::STATIC`].
    Static(STATIC, "static") => is_static, set_static;
    /// See [`AccessFlags::FINAL`].
    Final(FINAL, "final") => is_final, set_final;
    /// See [`AccessFlags::SYNCHRONIZED`].
    Synchronized(SYNCHRONIZED, "synchronized") => is_synchronized, set_synchronized;
    /// See [`AccessFlags::VOLATILE`].
    Volatile(VOLATILE, "volatile") => is_volatile, set_volatile;
    /// See [`AccessFlags::TRANSIENT`].
    Transient(TRANSIENT, "transient") => is_transient, set_transient;
    /// See [`AccessFlags::NATIVE`].
    Native(NATIVE, "native") => is_native, set_native;
    /// See [`AccessFlags::INTERFACE`].
    Interface(INTERFACE, "interface") => is_interface, set_interface;
    /// See [`AccessFlags::ABSTRACT`].
    Abstract(ABSTRACT, "abstract") => is_abstract, set_abstract;
    /// See [`AccessFlags::STRICT`].
    Strict(STRICT, "strictfp") => is_strict, set_strict;
    /// See [`AccessFlags::SYNTHETIC`].
    Synthetic(SYNTHETIC, "synthetic") => is_synthetic, set_synthetic;
    /// See [`AccessFlags::ANNOTATION`].
    Annotation(ANNOTATION, "annotation") => is_annotation, set_annotation;
    /// See [`AccessFlags::ENUM`].
    Enum(ENUM, "enum") => is_enum, set_enum;
    /// See [`AccessFlags::VARARGS`].
    Varargs(VARARGS, "varargs") => is_varargs, set_varargs;
}

impl AccessFlags {
    /// Creates access flags from the raw bits, keeping the bits that are not in the catalog.
    #[must_use]
    pub const fn new(bits: u16) -> Self {
        Self::from_bits_retain(bits)
    }

    /// Replaces all the bits with `bits`.
    pub fn set_bits(&mut self, bits: u16) {
        *self = Self::from_bits_retain(bits);
    }

    /// Checks if `flag` is set.
    #[must_use]
    pub const fn is(&self, flag: Flag) -> bool {
        self.bits() & flag.mask() != 0
    }

    /// Sets `flag` if `value` is `true`, otherwise clears it.
    /// Calling this repeatedly with the same arguments has no further effect.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.set(flag.into(), value);
    }

    /// Iterates over the flags in the catalog that are set, in catalog order.
    /// Both [`Flag::Transient`] and [`Flag::Varargs`] are yielded when their shared bit is set.
    pub fn flags(self) -> impl Iterator<Item = Flag> {
        Flag::ALL.into_iter().filter(move |&flag| self.is(flag))
    }
}

impl Default for AccessFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<u16> for AccessFlags {
    fn from(bits: u16) -> Self {
        Self::new(bits)
    }
}

impl From<AccessFlags> for u16 {
    fn from(flags: AccessFlags) -> Self {
        flags.bits()
    }
}

impl From<Flag> for AccessFlags {
    fn from(flag: Flag) -> Self {
        Self::from_bits_retain(flag.mask())
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Flag {
    type Err = ParseModifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "strict" {
            return Ok(Self::Strict);
        }
        Self::ALL
            .into_iter()
            .find(|flag| flag.keyword() == s)
            .ok_or_else(|| ParseModifierError::UnknownModifier(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::tests::arb_access_flags;

    #[test]
    fn catalog_masks() {
        let masks: Vec<_> = Flag::ALL.into_iter().map(Flag::mask).collect();
        assert_eq!(
            masks,
            vec![
                0x0001, 0x0002, 0x0004, 0x0008, 0x0010, 0x0020, 0x0040, 0x0080, 0x0100, 0x0200,
                0x0400, 0x0800, 0x1000, 0x2000, 0x4000, 0x0080,
            ]
        );
        assert!(Flag::ALL.into_iter().all(|flag| flag.mask().is_power_of_two()));
    }

    #[test]
    fn empty_by_default() {
        assert_eq!(AccessFlags::default().bits(), 0);
        assert_eq!(AccessFlags::default(), AccessFlags::empty());
        assert_eq!(AccessFlags::empty().flags().count(), 0);
    }

    #[test]
    fn set_and_clear_public_static() {
        let mut flags = AccessFlags::empty();
        flags.set_public(true);
        assert_eq!(flags.bits(), 0x0001);
        flags.set_static(true);
        assert_eq!(flags.bits(), 0x0009);
        flags.set_public(false);
        assert_eq!(flags.bits(), 0x0008);
    }

    #[test]
    fn clear_abstract_from_all_bits() {
        let mut flags = AccessFlags::new(0xFFFF);
        assert!(flags.is_abstract());
        flags.set_abstract(false);
        assert_eq!(flags.bits(), 0xFFFF & !0x0400);
        assert!(!flags.is_abstract());
        for flag in Flag::ALL.into_iter().filter(|&it| it != Flag::Abstract) {
            assert!(flags.is(flag), "{flag} should still be set");
        }
    }

    #[test]
    fn transient_and_varargs_share_a_bit() {
        let mut flags = AccessFlags::empty();
        flags.set_varargs(true);
        assert!(flags.is_transient());
        assert_eq!(flags.bits(), 0x0080);
        flags.set_transient(false);
        assert!(!flags.is_varargs());
    }

    #[test]
    fn set_bits_replaces_everything() {
        let mut flags = AccessFlags::PUBLIC | AccessFlags::FINAL;
        flags.set_bits(0x8000);
        assert_eq!(flags.bits(), 0x8000);
        assert!(!flags.is_public());
        assert!(!flags.is_final());
        assert_eq!(flags.flags().count(), 0);
    }

    #[test]
    fn flags_in_catalog_order() {
        let flags = AccessFlags::new(0x0419);
        assert_eq!(
            flags.flags().collect::<Vec<_>>(),
            vec![Flag::Public, Flag::Static, Flag::Final, Flag::Abstract]
        );
    }

    #[test]
    fn parse_keyword() {
        assert_eq!("synchronized".parse::<Flag>(), Ok(Flag::Synchronized));
        assert_eq!("strictfp".parse::<Flag>(), Ok(Flag::Strict));
        assert_eq!("strict".parse::<Flag>(), Ok(Flag::Strict));
        assert_eq!(
            "Public".parse::<Flag>(),
            Err(ParseModifierError::UnknownModifier("Public".to_owned()))
        );
    }

    proptest! {

        #[test]
        fn raw_bits_round_trip(bits in any::<u16>()) {
            assert_eq!(AccessFlags::new(bits).bits(), bits);
            assert_eq!(u16::from(AccessFlags::from(bits)), bits);
        }

        #[test]
        fn set_is_observable(mut flags in arb_access_flags(), flag in any::<Flag>(), value in any::<bool>()) {
            flags.set_flag(flag, value);
            assert_eq!(flags.is(flag), value);
        }

        #[test]
        fn set_is_idempotent(flags in arb_access_flags(), flag in any::<Flag>(), value in any::<bool>()) {
            let mut once = flags;
            once.set_flag(flag, value);
            let mut twice = flags;
            twice.set_flag(flag, value);
            twice.set_flag(flag, value);
            assert_eq!(once.bits(), twice.bits());
        }

        #[test]
        fn set_leaves_other_bits_alone(flags in arb_access_flags(), flag in any::<Flag>(), value in any::<bool>()) {
            let mut after = flags;
            after.set_flag(flag, value);
            assert_eq!(flags.bits() & !flag.mask(), after.bits() & !flag.mask());
        }

        #[test]
        fn flags_yields_set_catalog_flags(flags in arb_access_flags()) {
            let yielded: Vec<_> = flags.flags().collect();
            for flag in Flag::ALL {
                assert_eq!(yielded.contains(&flag), flags.is(flag));
            }
        }

        #[test]
        fn keyword_round_trip(flag in any::<Flag>()) {
            assert_eq!(flag.to_string().parse::<Flag>(), Ok(flag));
        }
    }
}
