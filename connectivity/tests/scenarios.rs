/// Fixed pair sequences with hand-derived final states and access totals.
use connectivity::{Engine, Outcome, Recorder, Variant};

/// Figure 1.1 input.
const S: [(usize, usize); 7] = [(0, 2), (1, 4), (2, 5), (3, 6), (0, 4), (6, 0), (1, 3)];

/// Figure 1.7 input.
const S7: [(usize, usize); 9] = [
    (3, 4),
    (4, 9),
    (8, 0),
    (2, 3),
    (5, 6),
    (5, 9),
    (7, 3),
    (8, 4),
    (6, 1),
];

/// Figure 1.8 input: perfectly balanced merges.
const S8: [(usize, usize); 9] = [
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (8, 9),
    (0, 2),
    (4, 6),
    (0, 4),
    (6, 8),
];

fn recorded(variant: Variant, n: usize, pairs: &[(usize, usize)]) -> Engine<Recorder> {
    let mut engine = Engine::with_observer(variant, n, Recorder::new()).unwrap();
    engine.run(pairs.iter().copied()).unwrap();
    engine.validate().unwrap();
    engine
}

fn six_merges_then_found() -> Vec<Outcome> {
    let mut outcomes = vec![Outcome::Merged; 6];
    outcomes.push(Outcome::AlreadyConnected);
    outcomes
}

#[test]
fn quick_find_on_fig_1_1() {
    let engine = recorded(Variant::QuickFind, 10, &S);
    assert_eq!(engine.ids(), &[4, 4, 4, 4, 4, 4, 4, 7, 8, 9]);
    assert_eq!(engine.observer().outcomes(), six_merges_then_found());
    assert_eq!(engine.total_accesses(), 100);
    assert_eq!(engine.component_count(), 4);
}

#[test]
fn quick_find_per_step_labels() {
    let engine = recorded(Variant::QuickFind, 10, &S);
    let steps = &engine.observer().steps;
    // q's label survives: after (0,2) site 0 carries label 2.
    assert_eq!(steps[0].ids, vec![2, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(steps[2].ids, vec![5, 4, 5, 3, 4, 5, 6, 7, 8, 9]);
    let accesses: Vec<u64> = steps.iter().map(|s| s.accesses).collect();
    assert_eq!(accesses, vec![15, 15, 17, 15, 19, 17, 2]);
}

#[test]
fn quick_union_on_fig_1_1() {
    let engine = recorded(Variant::QuickUnion, 10, &S);
    assert_eq!(engine.ids(), &[2, 4, 5, 6, 4, 4, 4, 7, 8, 9]);
    assert_eq!(engine.observer().outcomes(), six_merges_then_found());
    assert_eq!(engine.total_accesses(), 36);
    assert_eq!(engine.sizes(), None);
}

#[test]
fn weighted_on_fig_1_1() {
    let engine = recorded(Variant::WeightedQuickUnion, 10, &S);
    assert_eq!(engine.ids(), &[0, 0, 0, 0, 1, 0, 3, 7, 8, 9]);
    assert_eq!(engine.sizes().unwrap()[0], 7);
    assert_eq!(engine.total_accesses(), 30);
}

#[test]
fn weighted_on_fig_1_7_forms_one_component() {
    let engine = recorded(Variant::WeightedQuickUnion, 10, &S7);
    assert_eq!(engine.ids(), &[8, 3, 3, 3, 3, 3, 5, 3, 3, 3]);
    assert_eq!(engine.observer().outcomes(), vec![Outcome::Merged; 9]);
    assert_eq!(engine.component_count(), 1);
    assert_eq!(engine.sizes().unwrap()[3], 10);
    let root = engine.find_root(0).unwrap();
    for i in 0..10 {
        assert_eq!(engine.find_root(i).unwrap(), root);
    }
}

#[test]
fn weighted_on_fig_1_8_hits_height_bound() {
    let engine = recorded(Variant::WeightedQuickUnion, 10, &S8);
    assert_eq!(engine.ids(), &[0, 0, 0, 2, 0, 4, 4, 6, 0, 8]);
    // floor(log2 10) = 3, reached by 7 -> 6 -> 4 -> 0.
    assert_eq!(engine.max_depth(), 3);
}

#[test]
fn halving_on_fig_1_1() {
    let engine = recorded(Variant::WeightedHalving, 10, &S);
    assert_eq!(engine.ids(), &[0, 0, 0, 0, 1, 0, 3, 7, 8, 9]);
    assert_eq!(engine.observer().outcomes(), six_merges_then_found());
}

#[test]
fn halving_repeats_on_already_connected_pairs() {
    let mut engine =
        Engine::with_observer(Variant::WeightedHalving, 4, Recorder::new()).unwrap();
    engine.run([(0, 1), (2, 3), (0, 2)]).unwrap();
    assert_eq!(engine.ids(), &[0, 0, 0, 2]);

    assert_eq!(engine.connect(3, 1), Ok(Outcome::AlreadyConnected));
    assert_eq!(engine.ids(), &[0, 0, 0, 0]);
    assert_eq!(engine.observer().steps.last().unwrap().accesses, 12);

    // The path is now one hop each, but halving still reads and writes.
    assert_eq!(engine.connect(3, 1), Ok(Outcome::AlreadyConnected));
    assert_eq!(engine.observer().steps.last().unwrap().accesses, 12);
}

#[test]
fn full_compression_points_visited_sites_at_root() {
    let mut engine =
        Engine::with_observer(Variant::WeightedFullCompression, 8, Recorder::new()).unwrap();
    engine
        .run([(0, 1), (2, 3), (0, 2), (4, 5), (6, 7), (4, 6)])
        .unwrap();
    assert_eq!(engine.depth(3), Ok(2));
    assert_eq!(engine.depth(7), Ok(2));

    assert_eq!(engine.connect(3, 7), Ok(Outcome::Merged));
    let ids = engine.ids();
    for x in [3, 2, 7, 6, 4] {
        assert_eq!(ids[x], 0, "site {x} should point at the root");
    }
    // Site 5 was not on either path.
    assert_eq!(ids[5], 4);
    // Finds 5 + 5, link 1, compression 7 + 10.
    assert_eq!(engine.observer().steps.last().unwrap().accesses, 28);
    engine.validate().unwrap();
}

#[test]
fn full_compression_skips_connected_pairs() {
    let mut engine = Engine::new(Variant::WeightedFullCompression, 4).unwrap();
    engine.run([(0, 1), (2, 3), (0, 2)]).unwrap();
    engine.run([(1, 3)]).unwrap();
    // 3 -> 2 -> 0 untouched: the pair was already connected.
    assert_eq!(engine.ids(), &[0, 0, 0, 2]);
}

#[test]
fn random_saturation_of_a_thousand() {
    let mut engine = Engine::new(Variant::WeightedHalving, 1000).unwrap();
    let report = engine.random_saturate(1000, 2024).unwrap();
    assert_eq!(report.unions, 999);
    assert!(report.edges >= 999);
    assert_eq!(engine.component_count(), 1);
    assert_eq!(engine.sizes().unwrap()[engine.find_root(0).unwrap()], 1000);
}
