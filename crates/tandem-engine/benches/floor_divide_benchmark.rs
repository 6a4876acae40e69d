// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use tandem_engine::ops::floor_divide;
use tandem_model::operand::OperationRequest;

const SIZES: [usize; 3] = [64, 1024, 16384];

fn int_dividends(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(-1_000_000..1_000_000)).collect()
}

/// Nonzero divisors so the full range is processed every iteration.
fn int_divisors(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(1..100)).collect()
}

fn float_operands(rng: &mut StdRng, len: usize) -> (Vec<f64>, Vec<f64>) {
    let lhs = (0..len)
        .map(|_| rng.random_range(-1_000_000.0..1_000_000.0))
        .collect();
    let rhs = (0..len).map(|_| rng.random_range(0.5..100.0)).collect();
    (lhs, rhs)
}

fn bench_floor_divide(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("floor_divide");

    for len in SIZES {
        let lhs = int_dividends(&mut rng, len);
        let rhs = int_divisors(&mut rng, len);
        let mut out = vec![0_i64; len];

        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("i64_array_scalar", len),
            &len,
            |b, _len| {
                b.iter(|| {
                    let request =
                        OperationRequest::new(black_box(&lhs[..]).into(), black_box(7_i64).into())
                            .output((&mut out[..]).into());
                    floor_divide(request).unwrap()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("i64_array_array", len),
            &len,
            |b, _len| {
                b.iter(|| {
                    let request = OperationRequest::new(
                        black_box(&lhs[..]).into(),
                        black_box(&rhs[..]).into(),
                    )
                    .output((&mut out[..]).into());
                    floor_divide(request).unwrap()
                })
            },
        );

        let (flhs, frhs) = float_operands(&mut rng, len);
        let mut fout = vec![0.0_f64; len];

        group.bench_with_input(
            BenchmarkId::new("f64_array_array", len),
            &len,
            |b, _len| {
                b.iter(|| {
                    let request = OperationRequest::new(
                        black_box(&flhs[..]).into(),
                        black_box(&frhs[..]).into(),
                    )
                    .output((&mut fout[..]).into());
                    floor_divide(request).unwrap()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_floor_divide);
criterion_main!(benches);
