use ecdsa_anatomy::parse::{biguint_from_hex, point_from_hex};
use ecdsa_anatomy::{digest, secp256k1, BigUint, Parity, RecoveredSecrets};

const PRIVATE_KEY: &str = "0x1234";
const NONCE: &str = "0x1111";
const SECOND_NONCE: &str = "0x2222";

const DIGEST_1: &str = "0x1234123412341234123412341234123412341234123412341234123412341234";
const DIGEST_2: &str = "0x1111111111111111111111111111111111111111111111111111111111111111";

const PUBLIC_KEY_X: &str = "0x37a4aef1f8423ca076e4b7d99a8cabff40ddb8231f2a9f01081f15d7fa65c1ba";
const PUBLIC_KEY_Y: &str = "0xb96ced90a1b8f9b43a18fc900ff55af2be0e94b90a434fca5b9e226b835024cd";

const R: &str = "0x7592aab5d43618dda13fba71e3993cd7517a712d3da49664c06ee1bd3d1f70af";
const S_1: &str = "0x8e578a508331374bcbb1618ea3a8c9c63d49e9d42e0ed605b8c74910cfa50c11";
const S_2: &str = "0x351a200607d9aae72e3fb30fe41cf92dcd0b22117f57123df005974290d9429b";

fn hex(value: &str) -> BigUint {
    biguint_from_hex(value).unwrap()
}

#[test]
fn public_key_derivation() {
    let context = secp256k1::context();
    let public_key = context.public_key(&hex(PRIVATE_KEY)).unwrap();
    let expected = point_from_hex(context.curve(), PUBLIC_KEY_X, PUBLIC_KEY_Y).unwrap();
    assert_eq!(public_key, expected);
    assert!(context.curve().is_on_curve(&public_key).unwrap());
}

#[test]
fn signing_produces_the_reference_components() {
    let context = secp256k1::context();
    let first = context
        .sign(&hex(DIGEST_1), &hex(PRIVATE_KEY), &hex(NONCE))
        .unwrap();
    assert_eq!(first.r, hex(R));
    assert_eq!(first.s, hex(S_1));

    let second = context
        .sign(&hex(DIGEST_2), &hex(PRIVATE_KEY), &hex(NONCE))
        .unwrap();
    // the r component depends only on the nonce, so reuse is visible
    assert_eq!(second.r, first.r);
    assert_eq!(second.s, hex(S_2));
}

#[test]
fn reference_signatures_verify() {
    let context = secp256k1::context();
    let public_key = point_from_hex(context.curve(), PUBLIC_KEY_X, PUBLIC_KEY_Y).unwrap();
    let first = context
        .sign(&hex(DIGEST_1), &hex(PRIVATE_KEY), &hex(NONCE))
        .unwrap();
    let second = context
        .sign(&hex(DIGEST_2), &hex(PRIVATE_KEY), &hex(NONCE))
        .unwrap();
    assert!(context.verify(&hex(DIGEST_1), &public_key, &first).unwrap());
    assert!(context.verify(&hex(DIGEST_2), &public_key, &second).unwrap());
    assert!(!context.verify(&hex(DIGEST_2), &public_key, &first).unwrap());
}

#[test]
fn single_signature_key_recovery() {
    let context = secp256k1::context();
    let expected = point_from_hex(context.curve(), PUBLIC_KEY_X, PUBLIC_KEY_Y).unwrap();
    let signature = context
        .sign(&hex(DIGEST_1), &hex(PRIVATE_KEY), &hex(NONCE))
        .unwrap();

    // both parities yield keys that validate the signature, but only one
    // of them is the key that signed it
    let mut matches = 0;
    for parity in [Parity::Even, Parity::Odd] {
        let candidate = context
            .recover_public_key(&hex(DIGEST_1), &signature, parity)
            .unwrap();
        assert!(context
            .verify(&hex(DIGEST_1), &candidate, &signature)
            .unwrap());
        if candidate == expected {
            matches += 1;
        }
    }
    assert_eq!(matches, 1);
}

#[test]
fn two_signature_key_recovery() {
    let context = secp256k1::context();
    let expected = point_from_hex(context.curve(), PUBLIC_KEY_X, PUBLIC_KEY_Y).unwrap();
    let first = context
        .sign(&hex(DIGEST_1), &hex(PRIVATE_KEY), &hex(NONCE))
        .unwrap();
    let second = context
        .sign(&hex(DIGEST_1), &hex(PRIVATE_KEY), &hex(SECOND_NONCE))
        .unwrap();

    // of the four parity combinations exactly one validates both
    // signatures, and that one is the signing key
    let mut matches = 0;
    for first_parity in [Parity::Even, Parity::Odd] {
        for second_parity in [Parity::Even, Parity::Odd] {
            let candidate = context
                .recover_public_key_from_pair(&first, &second, first_parity, second_parity)
                .unwrap();
            let validates = context
                .verify(&hex(DIGEST_1), &candidate, &first)
                .unwrap()
                && context
                    .verify(&hex(DIGEST_1), &candidate, &second)
                    .unwrap();
            if validates {
                assert_eq!(candidate, expected);
                matches += 1;
            }
        }
    }
    assert_eq!(matches, 1);
}

#[test]
fn nonce_reuse_reveals_both_secrets() {
    let context = secp256k1::context();
    let recovered = context
        .recover_from_nonce_reuse(&hex(R), &hex(S_1), &hex(S_2), &hex(DIGEST_1), &hex(DIGEST_2))
        .unwrap();
    assert_eq!(
        recovered,
        RecoveredSecrets {
            nonce: hex(NONCE),
            private_key: hex(PRIVATE_KEY),
        }
    );
}

#[test]
fn known_nonce_reveals_the_private_key() {
    let context = secp256k1::context();
    let private_key = context
        .recover_from_known_nonce(&hex(R), &hex(S_1), &hex(DIGEST_1), &hex(NONCE))
        .unwrap();
    assert_eq!(private_key, hex(PRIVATE_KEY));
}

// the blockchain.info incident key from
// https://gist.github.com/nlitsme/f3c9953a420012bd413a684068a770ff
#[test]
fn cracking_a_real_bitcoin_key() {
    let context = secp256k1::context();
    let r = hex("0xd47ce4c025c35ec440bc81d99834a624875161a26bf56ef7fdc0f5d52f843ad1");
    let s1 = hex("0x44e1ff2dfd8102cf7a47c21d5c9fd5701610d04953c6836596b4fe9dd2f53e3e");
    let s2 = hex("0x9a5f1c75e461d7ceb1cf3cab9013eb2dc85b6d0da8c3c6e27e3a5a5b3faa5bab");
    let m1 = hex("0xc0e2d0a89a348de88fda08211c70d1d7e52ccef2eb9459911bf977d587784c6e");
    let m2 = hex("0x17b0f41c8c337ac1e18c98759e83a8cccbc368dd9d89e5f03cb633c265fd0ddc");

    let recovered = context
        .recover_from_nonce_reuse(&r, &s1, &s2, &m1, &m2)
        .unwrap();
    assert_eq!(
        recovered.nonce,
        hex("0x7a1a7e52797fc8caaa435d2a4dace39158504bf204fbe19f14dbb427faee50ae")
    );
    assert_eq!(
        recovered.private_key,
        hex("0xc477f9f65c22cce20657faa5b2d1d8122336f851a508a1ed04e479c34985bf96")
    );

    let public_key = context.public_key(&recovered.private_key).unwrap();
    let expected = point_from_hex(
        context.curve(),
        "0xdbd0c61532279cf72981c3584fc32216e0127699635c2789f549e0730c059b81",
        "0xae133016a69c21e23f1859a95f06d52b7bf149a8f2fe4e8535c8a829b449c5ff",
    )
    .unwrap();
    assert_eq!(public_key, expected);
}

#[test]
fn generator_multiplication_is_linear() {
    let context = secp256k1::context();
    let curve = context.curve();
    let generator = context.generator();
    let a = BigUint::from(901_283_019_823_u64);
    let b = BigUint::from(100_980_987_879_u64);

    let p = curve.scalar_mul(generator, &a).unwrap();
    let q = curve.scalar_mul(generator, &b).unwrap();

    let lhs = curve.add(&p, &q).unwrap();
    let rhs = curve.scalar_mul(generator, &(&a + &b)).unwrap();
    assert_eq!(lhs, rhs);

    let lhs = curve.scalar_mul(&curve.add(&p, &q).unwrap(), &a).unwrap();
    let rhs = curve
        .add(
            &curve.scalar_mul(&p, &a).unwrap(),
            &curve.scalar_mul(&q, &a).unwrap(),
        )
        .unwrap();
    assert_eq!(lhs, rhs);
}

#[test]
fn scalar_division_undoes_multiplication() {
    let context = secp256k1::context();
    let curve = context.curve();
    let generator = context.generator();
    let a = BigUint::from(901_283_019_823_u64);

    let p = curve.scalar_mul(generator, &a).unwrap();
    let quotient = curve
        .scalar_div(&p, &context.scalar_field().element(&a))
        .unwrap();
    assert_eq!(&quotient, generator);
}

#[test]
fn digests_flow_into_signatures() {
    let context = secp256k1::context();
    let private_key = hex(PRIVATE_KEY);
    let public_key = context.public_key(&private_key).unwrap();
    let message = digest::digest_bytes(b"Hello, Bob!");
    let signature = context.sign(&message, &private_key, &hex(NONCE)).unwrap();
    assert!(context.verify(&message, &public_key, &signature).unwrap());
    assert!(!context
        .verify(&digest::digest_bytes(b"Hello, Eve!"), &public_key, &signature)
        .unwrap());
}
