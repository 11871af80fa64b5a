#![no_main]

use libfuzzer_sys::fuzz_target;
use mpqcarve::domain::services::Carver;

fuzz_target!(|data: &[u8]| {
    let carver = Carver::mpq();
    let mut expected_index = 0;

    for archive in carver.carve(data) {
        assert_eq!(archive.index(), expected_index);
        assert!(archive.length() > 0);
        assert!(archive.end() <= data.len());
        expected_index += 1;
    }
});
