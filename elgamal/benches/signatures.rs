use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elgamal::SigningKey;
use modgroup::GroupParams;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_sign(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let params = GroupParams::generate(&mut rng, 64).expect("params");
    let sk = SigningKey::random(&mut rng, &params);
    let msg = b"HELLO WORLD";

    c.bench_function("elgamal_sign", |bencher| {
        bencher.iter(|| {
            let sig = sk.sign(&mut rng, &params, black_box(msg)).expect("sign");
            black_box(sig);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let params = GroupParams::generate(&mut rng, 64).expect("params");
    let sk = SigningKey::random(&mut rng, &params);
    let vk = sk.verifying_key(&params);
    let msg = b"HELLO WORLD";
    let sig = sk.sign(&mut rng, &params, msg).expect("sign");

    c.bench_function("elgamal_verify", |bencher| {
        bencher.iter(|| {
            let ok = vk.verify(&params, black_box(msg), black_box(&sig));
            black_box(ok);
        })
    });
}

criterion_group!(benches, bench_sign, bench_verify);
criterion_main!(benches);
