#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strmatch::matcher::{Algorithm, naive};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a [u8],
    pattern: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    // Every matcher must agree with the brute-force scan
    let expected = naive::search(input.text, input.pattern);
    for algorithm in Algorithm::ALL {
        assert_eq!(
            algorithm.search(input.text, input.pattern),
            expected,
            "{algorithm} disagrees"
        );
    }
});
