use ecdsa_anatomy::{digest, secp256k1};

use rand::rngs::StdRng;
use rand_core::SeedableRng;

fn main() {
    let mut rng = StdRng::from_seed([14; 32]);
    let context = secp256k1::context();

    let private_key = context.scalar_field().random_element(&mut rng);
    let public_key = context.public_key(private_key.inner()).unwrap();
    println!("private key: {}", private_key);
    println!("public key:  {}", public_key);

    let message = "Hello, Bob!";
    let message_hash = digest::digest_bytes(message.as_bytes());
    println!("message:     {:?}", message);
    println!("sha256:      0x{:x}", message_hash);

    let nonce = context.scalar_field().random_element(&mut rng);
    let signature = context
        .sign(&message_hash, private_key.inner(), nonce.inner())
        .unwrap();
    println!("signature:   {}", signature);

    let authentic = context
        .verify(&message_hash, &public_key, &signature)
        .unwrap();
    println!("verified:    {}", authentic);

    let tampered_hash = digest::digest_bytes(b"Hello, Eve!");
    let tampered = context
        .verify(&tampered_hash, &public_key, &signature)
        .unwrap();
    println!("tampered:    {}", tampered);
}
