//! End-to-end scenarios for the runtime-parameter API.

use rand::Rng;
use wots::{keygen, sign_bytes, verify, Error, Params};

fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::rng().fill(&mut bytes[..]);
    bytes
}

#[test]
fn test_params_sha256_w4() {
    let params = Params::new(32, 4).unwrap();
    assert_eq!(params.len1(), 128);
    assert_eq!(params.len2(), 7);
}

#[test]
fn test_params_rejected() {
    assert_eq!(
        Params::new(16, 4).unwrap_err(),
        Error::InvalidParameter { name: "n", value: 16 }
    );
    assert_eq!(
        Params::new(32, 7).unwrap_err(),
        Error::InvalidParameter { name: "w", value: 7 }
    );
    // Either bad value alone is enough.
    assert!(Params::new(16, 7).is_err());
    assert!(Params::new(64, 0).is_err());
    assert!(Params::new(64, 1).is_err());
}

#[test]
fn test_params_all_supported_pairs() {
    for n in [32, 64] {
        for log_w in 1..=16 {
            let params = Params::new(n, 1 << log_w).unwrap();
            assert!(params.len1() > 0);
            assert!(params.len2() > 0);
            assert_eq!(params.len(), params.len1() + params.len2());
        }
    }
}

#[test]
fn test_keygen_counting_master_key() {
    let params = Params::new(32, 4).unwrap();
    let master_key: Vec<u8> = (0..32).collect();

    let (sk, pk) = keygen(&params, &master_key).unwrap();

    assert_eq!(sk.as_bytes().len(), 32 * 135);
    assert_eq!(pk.as_bytes().len(), 32 * 135);

    let message = [0u8; 32];
    let sig = sign_bytes(&params, &message, sk.as_bytes()).unwrap();
    assert!(verify(&params, &message, pk.as_bytes(), &sig));
}

fn sign_verify_scenario(n: usize, w: u32) {
    let params = Params::new(n, w).unwrap();
    let master_key1 = random_bytes(n);
    let master_key2 = random_bytes(n);
    let message = random_bytes(n);

    let (sk1, pk1) = keygen(&params, &master_key1).unwrap();
    let (_sk2, pk2) = keygen(&params, &master_key2).unwrap();

    let signature1 = sign_bytes(&params, &message, sk1.as_bytes()).unwrap();
    assert!(
        verify(&params, &message, pk1.as_bytes(), &signature1),
        "signature not valid"
    );

    let signature2 = sign_bytes(&params, &message, sk1.as_bytes()).unwrap();
    assert_eq!(signature1, signature2, "signing is not deterministic");

    assert!(
        !verify(&params, &message, pk2.as_bytes(), &signature1),
        "signature verified with wrong key"
    );
}

#[test]
fn test_sign_verify() {
    sign_verify_scenario(32, 4);
}

#[test]
fn test_sign_verify_large() {
    sign_verify_scenario(64, 16);
}

#[test]
fn test_sign_verify_extreme_w() {
    sign_verify_scenario(32, 2);
    sign_verify_scenario(32, 256);
}

#[test]
fn test_consuming_sign() {
    let params = Params::new(64, 4).unwrap();
    let (sk, pk) = keygen(&params, &random_bytes(64)).unwrap();

    let sig = sk.sign(b"only once");
    assert!(pk.verify(b"only once", &sig));
    assert!(!pk.verify(b"only twice", &sig));
}

#[test]
fn test_params_from_name() {
    let params: Params = "sha512-w16".parse().unwrap();
    assert_eq!(params, Params::new(64, 16).unwrap());
    assert_eq!(params.to_string(), "sha512-w16");

    assert!("sha384-w16".parse::<Params>().is_err());
    assert!("sha256-w3".parse::<Params>().is_err());
}
