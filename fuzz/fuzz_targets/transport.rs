#![no_main]
use libfuzzer_sys::fuzz_target;
use weird_text::{decode_bytes, encode_bytes, EncodedSequence};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(seq) = EncodedSequence::from_json(s) {
            assert_eq!(EncodedSequence::from_json(&seq.to_json().unwrap()).unwrap(), seq);
            let _ = seq.decode();
        }
        let _ = EncodedSequence::from_base64(s);
    }

    let mut bytes = data.to_vec();
    while bytes.last() == Some(&0) {
        bytes.pop();
    }
    assert_eq!(decode_bytes(&encode_bytes(&bytes)), bytes);
});
