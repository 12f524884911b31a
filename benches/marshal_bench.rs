// In typebridge-core/benches/marshal_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use typebridge::{decode_column, encode_column, ColumnMeta, NativeVector, SqlDataType};

// --- Mock Column Generation ---

/// A decimal column with a spread of magnitudes and a sprinkling of nulls.
fn generate_decimal_vector(rows: usize) -> NativeVector {
    let values: Vec<f64> = (0..rows)
        .map(|i| {
            if i % 17 == 0 {
                f64::from_bits(typebridge::NA_REAL_BITS)
            } else {
                (i as f64) * 1.25 - 1000.0
            }
        })
        .collect();
    NativeVector::Double(values)
}

/// A character column of short, varied strings.
fn generate_character_vector(rows: usize) -> NativeVector {
    let values: Vec<Option<String>> = (0..rows)
        .map(|i| {
            if i % 13 == 0 {
                None
            } else {
                Some(format!("row-{:06}", i))
            }
        })
        .collect();
    NativeVector::Character(values)
}

// --- Benchmark Suite ---

const BENCH_ROWS: usize = 65536;

fn bench_marshal_kernels(c: &mut Criterion) {
    // --- Setup Data ---
    let decimal_meta = ColumnMeta::decimal(18, 4, true);
    let decimal_vector = generate_decimal_vector(BENCH_ROWS);
    let decimal_encoded = encode_column(&decimal_vector, &decimal_meta, 0).unwrap();

    let char_meta = ColumnMeta::new(SqlDataType::Char, true);
    let char_vector = generate_character_vector(BENCH_ROWS);
    let char_encoded = encode_column(&char_vector, &char_meta, 64).unwrap();

    let wchar_meta = ColumnMeta::new(SqlDataType::WChar, true);
    let wchar_encoded = encode_column(&char_vector, &wchar_meta, 64).unwrap();

    // --- Create a Benchmark Group ---
    let mut group = c.benchmark_group("Column Marshaling");
    group.throughput(criterion::Throughput::Elements(BENCH_ROWS as u64));

    group.bench_function("Encode Decimal", |b| {
        b.iter(|| black_box(encode_column(black_box(&decimal_vector), &decimal_meta, 0)))
    });
    group.bench_function("Decode Decimal", |b| {
        b.iter(|| {
            black_box(decode_column(
                &decimal_meta,
                BENCH_ROWS,
                black_box(&decimal_encoded.data),
                Some(&decimal_encoded.indicators),
            ))
        })
    });

    group.bench_function("Encode Char (UTF-8)", |b| {
        b.iter(|| black_box(encode_column(black_box(&char_vector), &char_meta, 64)))
    });
    group.bench_function("Decode Char (UTF-8)", |b| {
        b.iter(|| {
            black_box(decode_column(
                &char_meta,
                BENCH_ROWS,
                black_box(&char_encoded.data),
                Some(&char_encoded.indicators),
            ))
        })
    });

    group.bench_function("Encode WChar (UTF-16)", |b| {
        b.iter(|| black_box(encode_column(black_box(&char_vector), &wchar_meta, 64)))
    });
    group.bench_function("Decode WChar (UTF-16)", |b| {
        b.iter(|| {
            black_box(decode_column(
                &wchar_meta,
                BENCH_ROWS,
                black_box(&wchar_encoded.data),
                Some(&wchar_encoded.indicators),
            ))
        })
    });

    group.finish();
}

// These two lines generate the main function and register the benchmark group.
criterion_group!(benches, bench_marshal_kernels);
criterion_main!(benches);
