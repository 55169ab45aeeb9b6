#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use wots::{keygen, verify, Params};

#[derive(Debug, Arbitrary)]
struct VerifyInput {
    master_key: [u8; 32],
    message: Vec<u8>,
    pk_bytes: Vec<u8>,
    sig_bytes: Vec<u8>,
    corruption_index: usize,
    corruption_value: u8,
}

fuzz_target!(|input: VerifyInput| {
    let params = Params::new(32, 16).unwrap();

    // Arbitrary public keys and signatures must be rejected without panicking
    let _ = verify(&params, &input.message, &input.pk_bytes, &input.sig_bytes);

    // A valid signature verifies
    let (sk, pk) = keygen(&params, &input.master_key).unwrap();
    let sig = sk.sign(&input.message);
    assert!(pk.verify(&input.message, &sig), "verification should succeed with correct data");

    // Any corrupted signature byte is rejected
    let mut corrupted = sig.to_bytes();
    let idx = input.corruption_index % corrupted.len();
    corrupted[idx] ^= input.corruption_value | 1; // Ensure at least 1 bit changed
    assert!(
        !verify(&params, &input.message, pk.as_bytes(), &corrupted),
        "verification should fail with corrupted signature"
    );

    // Different key
    let mut other_master = input.master_key;
    other_master[0] ^= 0xFF;
    let (_, pk2) = keygen(&params, &other_master).unwrap();
    assert!(
        !pk2.verify(&input.message, &sig),
        "verification should fail with wrong key"
    );
});
