use divan::{black_box, Bencher};

fn main() {
    divan::main();
}

fn ints(n: i32) -> Vec<i32> {
    (0..n).collect()
}

// repeating values so deduplication has work to do
fn with_duplicates(n: i32) -> Vec<i32> {
    (0..n).map(|i| i % 100).collect()
}

#[divan::bench(args = [100, 10_000, 1_000_000])]
fn contains(bencher: Bencher, n: i32) {
    let seq = ints(n);
    let target = n / 2;
    bencher.bench_local(|| vecutil::contains(black_box(&seq), black_box(&target)));
}

#[divan::bench(args = [100, 10_000, 1_000_000])]
fn contains_naive(bencher: Bencher, n: i32) {
    let seq = ints(n);
    let target = n / 2;
    bencher.bench_local(|| {
        let seq = black_box(&seq);
        let target = black_box(&target);
        let mut found = false;
        for item in seq {
            if item == target {
                found = true;
                break;
            }
        }
        found
    });
}

#[divan::bench(args = [100, 10_000])]
fn concat(bencher: Bencher, n: i32) {
    let first = ints(n);
    let second = ints(n);
    bencher.bench_local(|| vecutil::concat(black_box(&first), black_box(&second)));
}

#[divan::bench(args = [100, 10_000])]
fn concat_naive(bencher: Bencher, n: i32) {
    let first = ints(n);
    let second = ints(n);
    bencher.bench_local(|| {
        let mut result = Vec::new();
        for item in black_box(&first) {
            result.push(*item);
        }
        for item in black_box(&second) {
            result.push(*item);
        }
        result
    });
}

#[divan::bench(args = [100, 10_000])]
fn erase_all_of(bencher: Bencher, n: i32) {
    let seq = with_duplicates(n);
    bencher
        .with_inputs(|| seq.clone())
        .bench_local_values(|mut seq| {
            vecutil::erase_all_of(&mut seq, black_box(&42));
            seq
        });
}

#[divan::bench(args = [100, 10_000])]
fn erase_all_of_naive(bencher: Bencher, n: i32) {
    let seq = with_duplicates(n);
    bencher
        .with_inputs(|| seq.clone())
        .bench_local_values(|mut seq| {
            let target = black_box(42);
            let mut i = 0;
            while i < seq.len() {
                if seq[i] == target {
                    seq.remove(i);
                } else {
                    i += 1;
                }
            }
            seq
        });
}

#[divan::bench(args = [100, 10_000])]
fn erase_duplicate_elements(bencher: Bencher, n: i32) {
    let seq = with_duplicates(n);
    bencher.bench_local(|| vecutil::erase_duplicate_elements(black_box(&seq)));
}

#[divan::bench(args = [100, 10_000])]
fn erase_duplicate_elements_naive(bencher: Bencher, n: i32) {
    let seq = with_duplicates(n);
    bencher.bench_local(|| {
        let mut result: Vec<i32> = Vec::new();
        for item in black_box(&seq) {
            if !result.contains(item) {
                result.push(*item);
            }
        }
        result
    });
}

#[divan::bench(args = [100, 10_000, 1_000_000])]
fn sum_all(bencher: Bencher, n: i32) {
    let seq = ints(n).into_iter().map(i64::from).collect::<Vec<_>>();
    bencher.bench_local(|| vecutil::sum_all(black_box(&seq), 0));
}

#[divan::bench(args = [100, 10_000, 1_000_000])]
fn sum_all_naive(bencher: Bencher, n: i32) {
    let seq = ints(n).into_iter().map(i64::from).collect::<Vec<_>>();
    bencher.bench_local(|| {
        let mut total = 0i64;
        for item in black_box(&seq) {
            total += item;
        }
        total
    });
}
