use circle_mis::{
    utils::{is_independent, total_weight},
    Implicit, IntervalModel, MisEngine, OutputSensitive, Switching, Valiente, Weight,
};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

fn random_model(rng: &mut StdRng, n: usize, max_weight: Weight) -> IntervalModel {
    let mut perm: Vec<usize> = (0..2 * n).collect();
    perm.shuffle(rng);
    let triples: Vec<_> = perm
        .chunks(2)
        .map(|pair| {
            (
                pair[0].min(pair[1]),
                pair[0].max(pair[1]),
                rng.gen_range(0..=max_weight),
            )
        })
        .collect();
    IntervalModel::from_endpoints(&triples).unwrap()
}

/// Short random chords: many nested and disjoint pairs, so the optimum is
/// large relative to n.
fn local_model(rng: &mut StdRng, n: usize, reach: usize) -> IntervalModel {
    let mut perm: Vec<usize> = (0..2 * n).collect();
    for i in 0..perm.len() {
        let j = (i + rng.gen_range(0..reach)).min(perm.len() - 1);
        perm.swap(i, j);
    }
    let triples: Vec<_> = perm
        .chunks(2)
        .map(|pair| (pair[0].min(pair[1]), pair[0].max(pair[1]), 1))
        .collect();
    IntervalModel::from_endpoints(&triples).unwrap()
}

fn brute_force(model: &IntervalModel) -> Weight {
    let ivs = model.intervals();
    let n = ivs.len();
    let conflicts: Vec<u32> = (0..n)
        .map(|i| {
            (0..n)
                .filter(|&j| ivs[i].overlaps(&ivs[j]))
                .fold(0u32, |acc, j| acc | (1 << j))
        })
        .collect();
    let mut best = 0;
    'subsets: for mask in 0u32..(1 << n) {
        let mut weight = 0;
        for i in 0..n {
            if (mask >> i) & 1 == 1 {
                if conflicts[i] & mask != 0 {
                    continue 'subsets;
                }
                weight += ivs[i].weight();
            }
        }
        best = best.max(weight);
    }
    best
}

#[test]
fn brute_force_spot_checks_up_to_twenty() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in [12usize, 16, 20] {
        let model = random_model(&mut rng, n, 9);
        let expected = brute_force(&model);
        assert_eq!(total_weight(&Valiente.compute_mis(&model)), expected, "n = {n}");
        let chosen = OutputSensitive
            .try_compute_mis(&model, model.total_weight())
            .unwrap();
        assert_eq!(total_weight(&chosen), expected, "n = {n}");
        let chosen = Implicit.try_compute_mis(&model, model.total_weight()).unwrap();
        assert_eq!(total_weight(&chosen), expected, "n = {n}");
    }
}

#[test]
fn engines_agree_on_larger_random_models() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in [100usize, 250, 500] {
        let model = random_model(&mut rng, n, 50);
        let reference = Valiente.compute_mis(&model);
        let expected = total_weight(&reference);
        assert!(is_independent(&reference));
        for engine in [&OutputSensitive as &dyn MisEngine, &Implicit] {
            let chosen = engine.try_compute_mis(&model, expected).unwrap();
            assert_eq!(total_weight(&chosen), expected, "{} n = {n}", engine.name());
            assert!(is_independent(&chosen));
        }
    }
}

#[test]
fn engines_agree_when_optimum_is_large() {
    let mut rng = StdRng::seed_from_u64(2024);
    for reach in [2usize, 4, 8] {
        let model = local_model(&mut rng, 400, reach);
        let expected = total_weight(&Valiente.compute_mis(&model));
        assert!(expected > 40, "reach {reach} gave a small optimum {expected}");
        for engine in [&OutputSensitive as &dyn MisEngine, &Implicit] {
            let chosen = engine.try_compute_mis(&model, expected).unwrap();
            assert_eq!(total_weight(&chosen), expected, "{} reach = {reach}", engine.name());
            assert!(engine.try_compute_mis(&model, expected - 1).is_none());
        }
        assert_eq!(Switching::new().run(&model).0, expected);
    }
}
