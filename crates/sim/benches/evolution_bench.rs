use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lexevo_sim::base::Dictionary;
use lexevo_sim::evolution::SentenceMutator;
use lexevo_sim::simulation::{EvolutionTree, ExpansionStrategy, NullSink};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

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

fn dictionary() -> Dictionary {
    let mut words = all_words("ABCDE", 3);
    words.extend(all_words("ABCD", 4));
    Dictionary::from_words(&words).unwrap()
}

fn bench_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutation");
    let dictionary = dictionary();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

    let sentence = dictionary
        .resolve(["ABC", "DCBA", "EEE", "ABCD"])
        .unwrap();

    for &edits in &[1i64, 4, 8] {
        let mut mutator = SentenceMutator::new(&dictionary, 1.0);
        group.bench_with_input(BenchmarkId::new("episode", edits), &edits, |b, &edits| {
            b.iter(|| {
                black_box(
                    mutator
                        .mutate(black_box(&sentence), edits, &mut rng, &mut NullSink)
                        .unwrap(),
                )
            })
        });
    }

    group.finish();
}

fn bench_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_expansion");
    let dictionary = dictionary();
    let root = dictionary.resolve(["ABC", "DCBA"]).unwrap();

    for strategy in [ExpansionStrategy::Recursive, ExpansionStrategy::Iterative] {
        for &depth in &[4usize, 8] {
            let id = BenchmarkId::new(format!("{strategy:?}"), depth);
            group.bench_with_input(id, &depth, |b, &depth| {
                b.iter(|| {
                    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
                    let mut tree = EvolutionTree::new(&dictionary, 2, 1.0);
                    black_box(
                        tree.expand_with(
                            strategy,
                            &root,
                            depth,
                            &mut rng,
                            &mut NullSink,
                            &mut NullSink,
                        )
                        .unwrap(),
                    )
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_mutation, bench_tree);
criterion_main!(benches);
