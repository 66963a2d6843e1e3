/// Declares the flag catalog.
///
/// Each entry names a [`Flag`](crate::Flag) variant, the [`AccessFlags`](crate::AccessFlags)
/// constant carrying its bit, its source keyword, and the names of its predicate and setter.
/// The macro generates the [`Flag`](crate::Flag) enum, its lookup tables and the named
/// accessors on [`AccessFlags`](crate::AccessFlags).
macro_rules! flag_catalog {
    (
        $(
            $(#[$attr:meta])*
            $variant:ident($konst:ident, $keyword:literal) => $is:ident, $set:ident;
        )+
    ) => {
        /// A named flag in the access flags catalog.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(test, derive(proptest_derive::Arbitrary))]
        pub enum Flag {
            $(
                $(#[$attr])*
                $variant,
            )+
        }

        impl Flag {
            /// All the flags in the catalog, in catalog order.
            pub const ALL: [Self; $crate::macros::flag_catalog!(@count $($variant)+)] =
                [$(Self::$variant),+];

            /// Gets the bit mask of the flag.
            #[must_use]
            pub const fn mask(self) -> u16 {
                match self {
                    $(Self::$variant => AccessFlags::$konst.bits(),)+
                }
            }

            /// Gets the keyword of the flag as it appears in Java source code.
            #[must_use]
            pub const fn keyword(self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword,)+
                }
            }
        }

        impl AccessFlags {
            $(
                #[doc = concat!("Checks if the `", $keyword, "` flag is set.")]
                #[must_use]
                pub const fn $is(&self) -> bool {
                    self.is(Flag::$variant)
                }

                #[doc = concat!("Sets (`true`) or clears (`false`) the `", $keyword, "` flag.")]
                pub fn $set(&mut self, value: bool) {
                    self.set_flag(Flag::$variant, value);
                }
            )+
        }
    };
    (@count) => { 0 };
    (@count $head:ident $($tail:ident)*) => {
        1 + $crate::macros::flag_catalog!(@count $($tail)*)
    };
}

pub(crate) use flag_catalog;
