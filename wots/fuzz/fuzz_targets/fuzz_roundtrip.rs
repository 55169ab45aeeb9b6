#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use wots::{OneTimeSigner, WotsSha512W16};

#[derive(Debug, Arbitrary)]
struct RoundtripInput {
    master_key: Vec<u8>,
    message: Vec<u8>,
}

fuzz_target!(|input: RoundtripInput| {
    let mut master_key = [0u8; WotsSha512W16::MASTER_KEY_SIZE];
    let len = input.master_key.len().min(master_key.len());
    master_key[..len].copy_from_slice(&input.master_key[..len]);

    let (sk, pk) = WotsSha512W16::keygen_from_master_key(&master_key).unwrap();

    // Sign the message
    let sig = WotsSha512W16::sign(sk, &input.message).unwrap();

    // Verification with correct key and message should always succeed
    let result = WotsSha512W16::verify(&pk, &input.message, &sig);
    assert!(result.is_ok(), "roundtrip verification should always succeed");

    // Signature should have correct size
    assert_eq!(sig.to_bytes().len(), WotsSha512W16::SIGNATURE_SIZE);

    // Verification with different message should fail
    if !input.message.is_empty() {
        let mut wrong_message = input.message.clone();
        wrong_message[0] ^= 0xFF;
        let result = WotsSha512W16::verify(&pk, &wrong_message, &sig);
        assert!(result.is_err(), "verification with wrong message should fail");
    }
});
