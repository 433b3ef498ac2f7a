#![no_main]

use libfuzzer_sys::fuzz_target;
use strmatch::matcher::{Algorithm, naive};

fuzz_target!(|data: (Vec<u16>, Vec<u16>)| {
    // Wide code units exercise the bad-character fallback map
    let (text, pattern) = data;
    let expected = naive::search(&text, &pattern);
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.search(&text, &pattern), expected, "{algorithm} disagrees");
    }
});
