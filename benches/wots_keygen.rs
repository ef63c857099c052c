use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::OsRng;
use rand::RngCore;
use wots_plus::{Keccak256Hasher, Params, WotsPlus};

static ALG_NAME: &str = "keygen";

fn keygen_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("WOTS_{}", ALG_NAME));

    for chain_len in [16, 4] {
        let params = Params::new(32, chain_len).unwrap();
        let wots = WotsPlus::with_params(Keccak256Hasher, params).unwrap();

        let mut private_seed = [0u8; 32];
        let mut public_seed = [0u8; 32];
        OsRng.fill_bytes(&mut private_seed);
        OsRng.fill_bytes(&mut public_seed);

        group.bench_function(
            BenchmarkId::new(ALG_NAME, format!("keccak256_w{chain_len}")),
            |b| {
                b.iter(|| {
                    black_box(
                        wots.generate_key_pair(black_box(&private_seed), black_box(&public_seed))
                            .unwrap(),
                    );
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, keygen_benchmarks);
criterion_main!(benches);
