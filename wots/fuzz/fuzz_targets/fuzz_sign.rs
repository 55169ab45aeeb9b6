#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use wots::{sign_bytes, OneTimeSigner, Params, WotsSha256W4};

#[derive(Debug, Arbitrary)]
struct SignInput {
    sk_bytes: Vec<u8>,
    message: Vec<u8>,
}

fuzz_target!(|input: SignInput| {
    let params = Params::new(32, 4).unwrap();

    // Signing with arbitrary secret key bytes must not panic
    match sign_bytes(&params, &input.message, &input.sk_bytes) {
        Ok(sig) => {
            assert_eq!(input.sk_bytes.len(), params.key_bytes());
            assert_eq!(sig.len(), params.signature_bytes());
        }
        Err(_) => assert_ne!(input.sk_bytes.len(), params.key_bytes()),
    }

    // Typed keys reject wrong lengths and sign anything else
    if let Ok(sk) = wots::wots_sha256_w4::SigningKey::from_bytes(&input.sk_bytes) {
        let sig = WotsSha256W4::sign(sk, &input.message).unwrap();
        assert_eq!(sig.to_bytes().len(), WotsSha256W4::SIGNATURE_SIZE);
    }
});
