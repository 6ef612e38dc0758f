use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lexevo_sim::base::Dictionary;
use lexevo_sim::evolution::{EditDistanceMatrix, NeighborFinder};

/// Every word over `alphabet` of exactly `len` letters.
fn all_words(alphabet: &str, len: usize) -> Vec<String> {
    let mut words = vec![String::new()];
    for _ in 0..len {
        words = words
            .iter()
            .flat_map(|prefix| alphabet.chars().map(move |c| format!("{prefix}{c}")))
            .collect();
    }
    words
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_distance");

    for &len in &[4usize, 16, 64] {
        let x: Vec<char> = "ACGT".chars().cycle().take(len).collect();
        let y: Vec<char> = "TGCA".chars().cycle().take(len).collect();
        let mut matrix = EditDistanceMatrix::with_capacity(len);

        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_with_input(BenchmarkId::new("reused_matrix", len), &len, |b, _| {
            b.iter(|| black_box(matrix.distance(black_box(&x), black_box(&y)).unwrap()))
        });
    }

    group.finish();
}

fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");

    let mut words = all_words("ABCDE", 3);
    words.extend(all_words("ABCD", 4));
    let dictionary = Dictionary::from_words(&words).unwrap();
    let source = dictionary.lookup("ABC").unwrap();

    group.throughput(Throughput::Elements(dictionary.len() as u64));
    for &budget in &[0i64, 1, 2, 4] {
        let mut finder = NeighborFinder::new(&dictionary);
        group.bench_with_input(BenchmarkId::new("scan", budget), &budget, |b, &budget| {
            b.iter(|| black_box(finder.neighbors(source, budget).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_distance, bench_neighbors);
criterion_main!(benches);
