use circle_mis::{
    compute_mis, try_compute_mis, utils::total_weight, IntervalModel, MisEngine, Strategy,
    Switching,
};

fn weight_by_every_strategy(model: &IntervalModel) -> Vec<u64> {
    Strategy::ALL
        .iter()
        .map(|s| {
            let chosen = s
                .try_compute_mis(model, model.total_weight())
                .expect("total weight never exceeds the optimum");
            total_weight(&chosen)
        })
        .collect()
}

/// k chords where every pair crosses: [i, i + k] for i in 0..k.
fn circulant_clique(k: usize) -> IntervalModel {
    let pairs: Vec<_> = (0..k).map(|i| (i, i + k)).collect();
    IntervalModel::unweighted(&pairs).unwrap()
}

#[test]
fn no_intervals() {
    let model = IntervalModel::new(Vec::new()).unwrap();
    assert_eq!(weight_by_every_strategy(&model), vec![0, 0, 0]);
    assert_eq!(try_compute_mis(&model, 0), Some(Vec::new()));
    assert!(compute_mis(&model).is_empty());
}

#[test]
fn single_interval() {
    let model = IntervalModel::from_endpoints(&[(0, 1, 5)]).unwrap();
    for strategy in Strategy::ALL {
        let chosen = strategy.try_compute_mis(&model, 5).unwrap();
        assert_eq!(chosen.len(), 1);
        assert_eq!((chosen[0].left(), chosen[0].right()), (0, 1));
        assert_eq!(chosen[0].weight(), 5);
    }
}

#[test]
fn three_nested_intervals_are_all_chosen() {
    let model = IntervalModel::unweighted(&[(0, 5), (1, 4), (2, 3)]).unwrap();
    assert_eq!(weight_by_every_strategy(&model), vec![3, 3, 3]);
    let chosen = compute_mis(&model);
    let spans: Vec<_> = chosen.iter().map(|iv| (iv.left(), iv.right())).collect();
    assert_eq!(spans, vec![(0, 5), (1, 4), (2, 3)]);
}

#[test]
fn two_crossing_intervals_pick_one() {
    let model = IntervalModel::unweighted(&[(0, 2), (1, 3)]).unwrap();
    assert_eq!(weight_by_every_strategy(&model), vec![1, 1, 1]);
}

#[test]
fn circulant_clique_has_weight_one() {
    for k in [1usize, 2, 3, 5, 8, 13, 40] {
        let model = circulant_clique(k);
        assert_eq!(weight_by_every_strategy(&model), vec![1, 1, 1], "k = {k}");
    }
}

#[test]
fn bound_below_optimum_aborts_and_switching_recovers() {
    // optimum: [0,9] with both [1,4] and [5,8] inside, and [2,3], [6,7] deeper
    let model =
        IntervalModel::unweighted(&[(0, 9), (1, 4), (2, 3), (5, 8), (6, 7)]).unwrap();
    assert!(try_compute_mis(&model, 4).is_none());
    assert!(Strategy::Implicit.try_compute_mis(&model, 4).is_none());

    let (weight, chosen) = Switching::with_config(Strategy::OutputSensitive, Some(4)).run(&model);
    assert_eq!(weight, 5);
    assert_eq!(chosen.len(), 5);

    let (weight, _) = Switching::with_config(Strategy::Implicit, Some(4)).run(&model);
    assert_eq!(weight, 5);
}

#[test]
fn bound_equal_to_optimum_does_not_abort() {
    let model = IntervalModel::from_endpoints(&[(0, 3, 4), (1, 2, 6), (4, 5, 2)]).unwrap();
    assert_eq!(try_compute_mis(&model, 12).map(|s| total_weight(&s)), Some(12));
    assert!(try_compute_mis(&model, 11).is_none());
}

#[test]
fn heavy_chord_beats_many_light_ones() {
    // [0,7] (w=10) crosses every light chord that starts inside and ends outside
    let model = IntervalModel::from_endpoints(&[
        (0, 7, 10),
        (1, 8, 1),
        (2, 9, 1),
        (3, 10, 1),
        (4, 11, 1),
        (5, 6, 1),
    ])
    .unwrap();
    // [0,7] + [5,6] = 11 versus the four light chords, which also cross each other
    assert_eq!(weight_by_every_strategy(&model), vec![11, 11, 11]);
}

#[test]
fn results_are_sorted_by_left_endpoint() {
    let model =
        IntervalModel::unweighted(&[(6, 7), (0, 5), (2, 3), (8, 9), (1, 4)]).unwrap();
    for strategy in Strategy::ALL {
        let chosen = strategy.try_compute_mis(&model, 10).unwrap();
        assert!(chosen.windows(2).all(|w| w[0].left() < w[1].left()));
        assert_eq!(chosen.len(), 5);
    }
}

#[test]
fn zero_weight_chords_are_left_out() {
    // [0,5] and [6,7] weigh nothing; [1,2] and [3,4] sit inside [0,5]
    let model =
        IntervalModel::from_endpoints(&[(0, 5, 0), (1, 2, 3), (3, 4, 2), (6, 7, 0)]).unwrap();
    assert_eq!(weight_by_every_strategy(&model), vec![5; 3]);
    for strategy in Strategy::ALL {
        let chosen = strategy.try_compute_mis(&model, 5).unwrap();
        let indices: Vec<_> = chosen.iter().map(|iv| iv.index()).collect();
        assert_eq!(indices, vec![1, 2], "{}", strategy.name());
    }

    let all_zero = IntervalModel::from_endpoints(&[(0, 1, 0), (2, 3, 0)]).unwrap();
    assert!(try_compute_mis(&all_zero, 0).unwrap().is_empty());
    assert!(Switching::new().run(&all_zero).1.is_empty());
}

#[test]
fn crossing_containers_keep_their_own_nested_chains() {
    // [0,7] holds [2,3] then [4,6]; [1,9] would rather follow [2,3] with
    // [5,8], which crosses [0,7]
    let model = IntervalModel::from_endpoints(&[
        (0, 7, 100),
        (1, 9, 1),
        (2, 3, 1),
        (4, 6, 1),
        (5, 8, 10),
    ])
    .unwrap();
    for strategy in Strategy::ALL {
        let chosen = strategy.try_compute_mis(&model, model.total_weight()).unwrap();
        let indices: Vec<_> = chosen.iter().map(|iv| iv.index()).collect();
        assert_eq!(indices, vec![0, 2, 3], "{}", strategy.name());
        assert_eq!(total_weight(&chosen), 102);
    }
}
