use allowlist_merkle::{Hasher, Keccak256Hasher, MerkleTree};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn leaves(n: u32) -> Vec<allowlist_merkle::Hash> {
    (0..n).map(|i| Keccak256Hasher.hash(&i.to_be_bytes())).collect()
}

fn bench_build(c: &mut Criterion) {
    let leaves = leaves(1024);
    c.bench_function("build 1024 leaves", |b| {
        b.iter(|| MerkleTree::build(&Keccak256Hasher, black_box(leaves.clone())))
    });
}

fn bench_proofs(c: &mut Criterion) {
    let tree = MerkleTree::build(&Keccak256Hasher, leaves(1024)).unwrap();
    c.bench_function("proof for every leaf", |b| {
        b.iter(|| {
            for i in 0..tree.leaf_count() {
                black_box(tree.proof_at(i).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_build, bench_proofs);
criterion_main!(benches);
