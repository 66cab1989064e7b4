//! Shared test utilities for `arbor-core`.

use arbor_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::Graph;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `ARBOR_PBT_CASES` and
/// `ARBOR_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Nine data centres `A`..`I` joined by cable runs, listed from both ends.
///
/// Its minimum spanning tree has eight edges and costs 37.
#[must_use]
pub(crate) fn data_centre_graph() -> Graph<char, u32> {
    Graph::from_adjacency([
        ('A', vec![('B', 4), ('H', 8)]),
        ('B', vec![('A', 4), ('C', 8), ('H', 11)]),
        ('C', vec![('B', 8), ('D', 7), ('F', 4), ('I', 2)]),
        ('D', vec![('C', 7), ('E', 9), ('F', 14)]),
        ('E', vec![('D', 9), ('F', 10)]),
        ('F', vec![('C', 4), ('D', 14), ('E', 10), ('G', 2)]),
        ('G', vec![('F', 2), ('H', 1), ('I', 6)]),
        ('H', vec![('A', 8), ('B', 11), ('G', 1), ('I', 7)]),
        ('I', vec![('C', 2), ('G', 6), ('H', 7)]),
    ])
}
