#![no_main]

use libfuzzer_sys::fuzz_target;
use map_maker::map_file::{parse_map, write_map};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Was einmal parst, muss nach dem Schreiben erneut parsen
    if let Ok(shapes) = parse_map(text) {
        let written = write_map(&shapes);
        let reparsed = parse_map(&written).expect("geschriebene Karte muss parsen");
        assert_eq!(reparsed.len(), shapes.len());
    }
});
