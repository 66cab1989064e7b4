//! Property 1: Equivalence with the sequential oracle.
//!
//! Kruskal must match the oracle's forest weight, edge count and component
//! count. Prim, grown from vertex `0`, must match the oracle's weight and
//! size for the component holding `0`, and must agree with Kruskal on
//! connected graphs.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::super::{build, grow};
use super::helpers::summed_weight;
use super::oracle::sequential_kruskal;
use super::types::GraphFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    let forest = build(&graph).map_err(|err| {
        TestCaseError::fail(format!("kruskal failed: {err} ({})", fixture.context()))
    })?;

    if forest.total_cost() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "kruskal weight mismatch: engine={}, oracle={} ({})",
            forest.total_cost(),
            oracle.total_weight,
            fixture.context(),
        )));
    }
    if forest.len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "kruskal edge count mismatch: engine={}, oracle={} ({})",
            forest.len(),
            oracle.edge_count,
            fixture.context(),
        )));
    }
    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: engine={}, oracle={} ({})",
            forest.component_count(),
            oracle.component_count,
            fixture.context(),
        )));
    }

    if fixture.vertex_count == 0 {
        return Ok(());
    }

    let tree = grow(&graph, &0).map_err(|err| {
        TestCaseError::fail(format!("prim failed: {err} ({})", fixture.context()))
    })?;

    let expected_weight = oracle.component_weight_of(0);
    if tree.total_cost() != expected_weight {
        return Err(TestCaseError::fail(format!(
            "prim weight mismatch: engine={}, oracle={expected_weight} ({})",
            tree.total_cost(),
            fixture.context(),
        )));
    }
    if summed_weight(&tree) != tree.total_cost() {
        return Err(TestCaseError::fail(format!(
            "prim total {} differs from its edge sum {} ({})",
            tree.total_cost(),
            summed_weight(&tree),
            fixture.context(),
        )));
    }
    let expected_edges = oracle.component_size_of(0) - 1;
    if tree.len() != expected_edges {
        return Err(TestCaseError::fail(format!(
            "prim edge count mismatch: engine={}, expected={expected_edges} ({})",
            tree.len(),
            fixture.context(),
        )));
    }

    if oracle.component_count == 1 && tree.total_cost() != forest.total_cost() {
        return Err(TestCaseError::fail(format!(
            "prim and kruskal disagree on a connected graph: prim={}, kruskal={} ({})",
            tree.total_cost(),
            forest.total_cost(),
            fixture.context(),
        )));
    }

    Ok(())
}
