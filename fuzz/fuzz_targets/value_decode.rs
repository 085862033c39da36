#![no_main]

use codec::{decode_selected_row, decode_source, encode_source, CodecLimits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = CodecLimits::for_testing();
    if let Ok(matrix) = decode_source(data, &limits) {
        // Anything we accept must re-encode.
        let _ = encode_source(&matrix);
        let _ = matrix.is_consistent();
    }
    let _ = decode_selected_row(data, &limits);
});
