//! Transaction codec benchmarks
//!
//! Serialization, deserialization and identity hashing of transactions with a
//! growing number of inputs and outputs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ela_core::payload::Payload;
use ela_core::{
    Fixed64, Program, Transaction, TransactionBuilder, TxOutput, UInt168, UInt256, UtxoInput,
};

fn sample_transaction(entries: u8) -> Transaction {
    let mut builder = TransactionBuilder::new(Payload::TransferAsset).nonce(entries as u64);
    for i in 0..entries {
        builder = builder
            .input(UtxoInput::new(UInt256::new([i; 32]), i as u16))
            .output(TxOutput::new(
                UInt256::new([0xa3; 32]),
                Fixed64::from_coins(i as i64 + 1),
                UInt168::new([0x21; 21]),
            ))
            .program(Program::new(vec![0x21; 35], vec![0x40; 65]));
    }
    builder.build()
}

fn bench_transaction_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("transaction_codec");

    for entries in [1u8, 8, 64] {
        let tx = sample_transaction(entries);
        let serialized = tx.to_bytes().unwrap();
        group.throughput(Throughput::Bytes(serialized.len() as u64));

        group.bench_with_input(BenchmarkId::new("serialize", entries), &tx, |b, tx| {
            b.iter(|| black_box(tx).to_bytes().unwrap())
        });

        group.bench_with_input(
            BenchmarkId::new("deserialize", entries),
            &serialized,
            |b, bytes| b.iter(|| Transaction::from_bytes(black_box(bytes)).unwrap()),
        );

        group.bench_with_input(BenchmarkId::new("hash", entries), &tx, |b, tx| {
            b.iter(|| {
                let fresh = tx.clone();
                black_box(fresh.hash().unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transaction_codec);
criterion_main!(benches);
