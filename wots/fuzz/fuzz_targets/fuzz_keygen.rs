#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use wots::{keygen, OneTimeSigner, Params, WotsSha256W16};

#[derive(Debug, Arbitrary)]
struct KeygenInput {
    n: usize,
    log_w: u8,
    master_key: Vec<u8>,
}

fuzz_target!(|input: KeygenInput| {
    // Arbitrary parameter pairs must be rejected cleanly, never panic
    let w = 1u32.checked_shl(u32::from(input.log_w)).unwrap_or(0);
    let Ok(params) = Params::new(input.n, w) else {
        return;
    };

    // Keep chains short enough for the fuzzer to make progress
    if params.log_w() > 8 {
        return;
    }

    match keygen(&params, &input.master_key) {
        Ok((sk, pk)) => {
            assert_eq!(input.master_key.len(), params.n());
            assert_eq!(sk.as_bytes().len(), params.key_bytes());
            assert_eq!(pk.as_bytes().len(), params.key_bytes());

            // Key generation is deterministic
            let (_, pk2) = keygen(&params, &input.master_key).unwrap();
            assert_eq!(pk, pk2);
        }
        Err(_) => assert_ne!(input.master_key.len(), params.n()),
    }

    let typed = WotsSha256W16::keygen_from_master_key(&input.master_key);
    assert_eq!(typed.is_ok(), input.master_key.len() == WotsSha256W16::MASTER_KEY_SIZE);
});
