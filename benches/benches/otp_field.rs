// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use understory_otp_field::recording::RecordingFactory;
use understory_otp_field::{OtpConfig, OtpField, PasteBehavior, SlotLayout};

const CONTAINER: Size = Size::new(1024.0, 96.0);

fn field(config: OtpConfig) -> OtpField<RecordingFactory> {
    let mut field = OtpField::new(config, RecordingFactory::default());
    field
        .initialize(CONTAINER)
        .expect("benchmark configs are valid");
    field
}

fn code(len: usize) -> String {
    (0..len).map(|i| char::from(b'0' + (i % 10) as u8)).collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("otp_field/layout");

    for count in [4usize, 8, 64, 512] {
        let layout = SlotLayout::new(count, 40.0, 8.0);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("frames", count), &layout, |b, layout| {
            b.iter(|| {
                let sum: f64 = layout.frames(black_box(CONTAINER)).map(|r| r.x0).sum();
                black_box(sum);
            });
        });

        let probe = Point::new(CONTAINER.width / 2.0 + 3.0, CONTAINER.height / 2.0);
        group.bench_with_input(BenchmarkId::new("slot_at", count), &layout, |b, layout| {
            b.iter(|| black_box(layout.slot_at(black_box(probe), CONTAINER)));
        });
    }

    group.finish();
}

fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("otp_field/typing");

    // A full session: type every slot, then delete everything again.
    for count in [4usize, 6, 8, 32] {
        let config = OtpConfig::default()
            .with_field_count(count)
            .with_metrics(24.0, 4.0, 1.0);
        let digits = code(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(
            BenchmarkId::new("type_then_clear", count),
            &digits,
            |b, digits| {
                b.iter_batched(
                    || field(config.clone()),
                    |mut field| {
                        for d in digits.split_inclusive(|_| true) {
                            field.insert_at_focus(d);
                        }
                        for i in (0..count).rev() {
                            field.backspace(i);
                        }
                        black_box(field);
                    },
                    BatchSize::SmallInput,
                );
            },
        );

        let paste = config.clone().with_paste(PasteBehavior::Distribute);
        group.bench_with_input(BenchmarkId::new("paste", count), &digits, |b, digits| {
            b.iter_batched(
                || field(paste.clone()),
                |mut field| {
                    black_box(field.insert(0, digits));
                    black_box(field);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("otp_field/initialize");

    for count in [4usize, 32, 256] {
        let config = OtpConfig::default().with_field_count(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &config, |b, config| {
            let mut field = field(config.clone());
            b.iter(|| {
                field
                    .initialize(black_box(CONTAINER))
                    .expect("benchmark configs are valid");
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout, bench_typing, bench_initialize);
criterion_main!(benches);
