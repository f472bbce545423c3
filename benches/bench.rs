use circdeque::Deque;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::VecDeque;

fn bench_push_and_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back then pop_front 1001");
    group.bench_function("circdeque::Deque", |b| {
        b.iter(|| {
            let mut deque = Deque::new();
            for i in 0..1001 {
                deque.push_back(black_box(i));
            }

            let mut sum = 0;
            while let Ok(value) = deque.pop_front() {
                sum += value;
            }
            assert_eq!(sum, 500500);
        })
    });
    group.bench_function("std::collections::VecDeque", |b| {
        b.iter(|| {
            let mut deque = VecDeque::new();
            for i in 0..1001 {
                deque.push_back(black_box(i));
            }

            let mut sum = 0;
            while let Some(value) = deque.pop_front() {
                sum += value;
            }
            assert_eq!(sum, 500500);
        })
    });
    group.finish();
}

fn bench_sliding_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("sliding window of 64 over 4096");
    group.bench_function("circdeque::Deque", |b| {
        b.iter(|| {
            let mut deque = Deque::with_capacity(64);
            let mut sum = 0u64;
            for i in 0..4096u64 {
                if deque.len() == 64 {
                    sum += deque.pop_front().unwrap_or_default();
                }
                deque.push_back(black_box(i));
            }
            sum
        })
    });
    group.bench_function("std::collections::VecDeque", |b| {
        b.iter(|| {
            let mut deque = VecDeque::with_capacity(64);
            let mut sum = 0u64;
            for i in 0..4096u64 {
                if deque.len() == 64 {
                    sum += deque.pop_front().unwrap_or_default();
                }
                deque.push_back(black_box(i));
            }
            sum
        })
    });
    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get 1001");
    let deque = (0..1001).collect::<Deque<_>>();
    group.bench_function("circdeque::Deque", |b| {
        b.iter(|| {
            let mut sum = 0;
            for i in 0..1001 {
                if let Ok(x) = deque.get(black_box(i * 2)) {
                    sum += x;
                }
            }
            assert_eq!(sum, 250500);
        })
    });
    let vecdeque = (0..1001).collect::<VecDeque<_>>();
    group.bench_function("std::collections::VecDeque", |b| {
        b.iter(|| {
            let mut sum = 0;
            for i in 0..1001 {
                if let Some(x) = vecdeque.get(black_box(i * 2)) {
                    sum += x;
                }
            }
            assert_eq!(sum, 250500);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_push_and_pop, bench_sliding_window, bench_get);
criterion_main!(benches);
