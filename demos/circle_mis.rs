//! Example: maximum-weight independent set of a small chord diagram.
//!
//! Run with:
//! `cargo run --example circle_mis`

use circle_mis::{IntervalModel, MisEngine, Strategy, SwitchingBuilder};

fn main() {
    // (left, right, weight); chords cross iff their intervals overlap
    // without nesting.
    let chords = [
        (0, 9, 4),
        (1, 4, 2),
        (2, 11, 7),
        (3, 5, 1),
        (6, 8, 3),
        (7, 10, 2),
    ];
    let model = match IntervalModel::from_endpoints(&chords) {
        Ok(model) => model,
        Err(err) => {
            eprintln!("invalid chord diagram: {err}");
            std::process::exit(2);
        }
    };

    println!("chords: {}, density: {}", model.len(), model.density());

    for strategy in Strategy::ALL {
        match strategy.try_compute_mis(&model, 8) {
            Some(chosen) => println!("{:>16}: {} intervals", strategy.name(), chosen.len()),
            None => println!("{:>16}: exceeded bound 8", strategy.name()),
        }
    }

    let solver = SwitchingBuilder::new()
        .with_primary(Strategy::Implicit)
        .with_bound(8)
        .build();
    let (weight, chosen) = solver.run(&model);
    println!("optimum weight: {weight}");
    for iv in &chosen {
        println!("  [{}, {}] weight {}", iv.left(), iv.right(), iv.weight());
    }
}
