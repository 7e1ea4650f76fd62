#![no_main]

use libfuzzer_sys::fuzz_target;
use membersel::MemberSelector;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let selector = MemberSelector::parse(text);
        let _ = selector.to_selector_string();
        let _ = selector.to_string();
        let _ = selector.validate();
        let _ = selector.matches(Some("a/b/C"), Some("foo"), Some("(I)V"));
    }
});
