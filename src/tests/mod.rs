use proptest::prelude::*;

use crate::AccessFlags;

pub(crate) fn arb_access_flags() -> impl Strategy<Value = AccessFlags> {
    any::<u16>().prop_map(AccessFlags::new)
}
