use std::io::{self, BufRead, Write};

use elgamal::{Signature, SigningKey, MAX_PRACTICAL_Q_BITS, MIN_SECURE_Q_BITS};
use modgroup::GroupParams;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let q_bits = loop {
        print!("Enter bit-length for subgroup order q (e.g., 256): ");
        io::stdout().flush().expect("flush stdout");
        let line = match lines.next() {
            Some(line) => line.expect("read stdin"),
            None => return,
        };
        match line.trim().parse::<u64>() {
            Ok(bits) => {
                if bits < MIN_SECURE_Q_BITS {
                    println!("Warning: bit-length too small for secure use.");
                } else if bits > MAX_PRACTICAL_Q_BITS {
                    println!("Bit-length very large; generation may take a while.");
                }
                break bits;
            }
            Err(_) => println!("Please enter a valid integer."),
        }
    };

    let mut rng = rand::thread_rng();

    let params = GroupParams::generate(&mut rng, q_bits).expect("parameter generation failed");
    println!("p = {}", params.p);
    println!("q = {}", params.q);
    println!("g = {}", params.g);

    let signing_key = SigningKey::random(&mut rng, &params);
    let verifying_key = signing_key.verifying_key(&params);
    println!("private x = {}", signing_key.exponent());
    println!("public y = {}", verifying_key.value());

    let message = b"HELLO WORLD";
    let signature = signing_key
        .sign(&mut rng, &params, message)
        .expect("signing failed");
    println!("signature = ({}, {})", signature.r, signature.s);

    let valid = verifying_key.verify(&params, message, &signature);
    println!("Signature valid? {valid}");

    // the artifacts serialize cleanly end to end
    let sig_bytes = bincode::serialize(&signature).expect("serialize signature");
    let restored: Signature = bincode::deserialize(&sig_bytes).expect("deserialize signature");
    assert!(verifying_key.verify(&params, message, &restored));
}
