use ecdsa_anatomy::{digest, secp256k1};

use rand::rngs::StdRng;
use rand_core::SeedableRng;

fn main() {
    let mut rng = StdRng::from_seed([41; 32]);
    let context = secp256k1::context();

    let private_key = context.scalar_field().random_element(&mut rng);
    // one nonce for two messages, the classic mistake
    let nonce = context.scalar_field().random_element(&mut rng);

    let first_hash = digest::digest_bytes(b"pay 1 BTC to Alice");
    let second_hash = digest::digest_bytes(b"pay 2 BTC to Carol");

    let first = context
        .sign(&first_hash, private_key.inner(), nonce.inner())
        .unwrap();
    let second = context
        .sign(&second_hash, private_key.inner(), nonce.inner())
        .unwrap();
    println!("first signature:  {}", first);
    println!("second signature: {}", second);
    assert_eq!(first.r, second.r);

    let recovered = context
        .recover_from_nonce_reuse(&first.r, &first.s, &second.s, &first_hash, &second_hash)
        .unwrap();
    println!("recovered nonce:       0x{:x}", recovered.nonce);
    println!("recovered private key: 0x{:x}", recovered.private_key);
    println!("actual private key:    {}", private_key);
    assert_eq!(&recovered.private_key, private_key.inner());
}
