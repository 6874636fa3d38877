
use itertools::Itertools;
use model::base_types::Kg;
use model::packages::Package;

/// Chooses the packages a single vehicle trip carries.
///
/// Greedy heuristic, not a knapsack optimum: candidates are taken by weight
/// descending (heavy packages are the hardest to combine later), ties by
/// distance ascending, and admitted while the cumulative weight stays
/// within `max_load`. `chosen` is in admission order; `remaining` keeps the
/// candidates' original order. If no candidate fits individually, `chosen`
/// is empty.
pub fn select_shipment<'a>(
    candidates: &[&'a Package],
    max_load: Kg,
) -> (Vec<&'a Package>, Vec<&'a Package>) {
    let mut chosen: Vec<&Package> = Vec::new();
    let mut load: Kg = 0.0;

    for package in candidates.iter().copied().sorted_by(|a, b| {
        b.weight()
            .total_cmp(&a.weight())
            .then(a.distance().total_cmp(&b.distance()))
    }) {
        if load + package.weight() <= max_load {
            chosen.push(package);
            load += package.weight();
        }
    }

    let remaining = candidates
        .iter()
        .copied()
        .filter(|package| !chosen.iter().any(|c| c.id() == package.id()))
        .collect();

    (chosen, remaining)
}
