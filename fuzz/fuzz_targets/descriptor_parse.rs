#![no_main]

use libfuzzer_sys::fuzz_target;
use membersel::descriptor::{
    parse_field_descriptor, parse_method_descriptor, parse_type_descriptor,
};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(desc) = parse_method_descriptor(text) {
            let _ = desc.to_string();
            let _ = desc.arg_slots();
        }
        let _ = parse_field_descriptor(text);
        let _ = parse_type_descriptor(text);
    }
});
