use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use weird_text::{decode, encode, encode_bytes, EncodedSequence};

fn latin1_text(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| char::from(rng.gen_range(0x20u8..=0xFF))).collect()
}

fn codec_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    for len in [16usize, 1024, 64 * 1024] {
        let text = latin1_text(len);
        let bytes: Vec<u8> = text.chars().map(|ch| ch as u8).collect();
        let words = encode(&text).unwrap();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("encode", len), &text, |b, text| {
            b.iter(|| encode(black_box(text)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("encode_bytes", len), &bytes, |b, bytes| {
            b.iter(|| encode_bytes(black_box(bytes)))
        });
        group.bench_with_input(BenchmarkId::new("decode", len), &words, |b, words| {
            b.iter(|| decode(black_box(words)))
        });
    }
    group.finish();
}

fn transport_benches(c: &mut Criterion) {
    let seq = EncodedSequence::encode(&latin1_text(4096)).unwrap();
    let json = seq.to_json().unwrap();
    let base64 = seq.to_base64();
    c.bench_function("transport/from_json", |b| {
        b.iter(|| EncodedSequence::from_json(black_box(&json)).unwrap())
    });
    c.bench_function("transport/from_base64", |b| {
        b.iter(|| EncodedSequence::from_base64(black_box(&base64)).unwrap())
    });
}

criterion_group!(benches, codec_benches, transport_benches);
criterion_main!(benches);
