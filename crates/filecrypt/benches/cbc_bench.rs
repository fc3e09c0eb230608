use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_core::{encrypt_block, expand_key};
use filecrypt::{decrypt, encrypt};

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut key = [0u8; 16];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut block);
    let schedule = expand_key(&key).unwrap();

    let mut group = c.benchmark_group("block");
    group.bench_function("encrypt_block_128", |b| {
        b.iter(|| encrypt_block(&block, &schedule));
    });
    group.bench_function("expand_key_256", |b| {
        let key256 = [0x5au8; 32];
        b.iter(|| expand_key(&key256).unwrap());
    });
    group.finish();
}

fn bench_buffer(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut key = [0u8; 32];
    let mut plaintext = vec![0u8; 64 * 1024];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut plaintext);
    let ciphertext = encrypt(&key, &plaintext).unwrap();

    let mut group = c.benchmark_group("buffer_64k");
    group.throughput(Throughput::Bytes(plaintext.len() as u64));
    group.sample_size(20);
    group.bench_function("cbc_encrypt", |b| {
        b.iter(|| encrypt(&key, &plaintext).unwrap());
    });
    group.bench_function("cbc_decrypt", |b| {
        b.iter(|| decrypt(&key, &ciphertext).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_block, bench_buffer);
criterion_main!(benches);
