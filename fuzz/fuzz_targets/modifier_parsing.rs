#![no_main]

use classflags::{AccessFlags, modifiers::ElementKind};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(flags) = text.parse::<AccessFlags>() else {
        return;
    };
    for kind in [ElementKind::Class, ElementKind::Field, ElementKind::Method] {
        let rendered = flags.modifiers(kind).to_string();
        let reparsed: AccessFlags = rendered.parse().expect("rendered modifiers must parse");
        assert_eq!(reparsed, flags & kind.applicable_mask());
    }
});
