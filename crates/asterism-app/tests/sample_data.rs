//! The bundled data document loads and plans cleanly in every mode.

use std::path::Path;

use asterism_graph::{RevealMode, RevealPlan};
use asterism_types::{ConstellationData, Selector, StarId};
use pretty_assertions::assert_eq;

fn sample() -> ConstellationData {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/constellations.json");
    ConstellationData::load(&path).unwrap()
}

#[test]
fn test_sample_document_is_consistent() {
    let data = sample();
    assert_eq!(data.items.len(), 3);
    for c in &data.items {
        assert!(c.duplicate_star_ids().is_empty(), "{}", c.name);
        assert_eq!(c.dangling_pairs().count(), 0, "{}", c.name);
    }
}

#[test]
fn test_breadth_first_reaches_every_star() {
    let data = sample();
    for c in &data.items {
        let plan = RevealPlan::build(c, RevealMode::BreadthFirst).unwrap();
        // One tree edge per star after the root; cycle-closing pairs are not drawn
        assert_eq!(plan.schedule.reached, c.stars.len(), "{}", c.name);
        assert_eq!(plan.schedule.edge_count(), c.stars.len() - 1, "{}", c.name);
        assert!(plan.schedule.skipped.is_empty());
    }
}

#[test]
fn test_flat_modes_draw_every_pair() {
    let data = sample();
    for c in &data.items {
        for mode in [RevealMode::Sequential, RevealMode::Simultaneous] {
            let plan = RevealPlan::build(c, mode).unwrap();
            assert_eq!(plan.schedule.edge_count(), c.pairs.len(), "{} {mode}", c.name);
        }
    }
}

#[test]
fn test_cassiopeia_reveals_from_gamma() {
    let data = sample();
    let c = data.select(&Selector::Name("Cassiopeia".into())).unwrap();
    let plan = RevealPlan::build(c, RevealMode::BreadthFirst).unwrap();

    assert_eq!(plan.root, StarId::new(3));
    assert_eq!(plan.schedule.levels.len(), 2);
    assert_eq!(plan.schedule.reached, 5);
}
