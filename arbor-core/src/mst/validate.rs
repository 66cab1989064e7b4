//! Up-front admission checks shared by both engines.

use crate::{
    builder::NegativeWeights,
    error::{MstError, Result, WeightDefect},
    graph::{Graph, Vertex},
    weight::Weight,
};

/// Summary of an admitted graph.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Admission {
    /// Records carrying a negative weight that the policy let through.
    pub(crate) negative_records: usize,
}

/// Checks every adjacency record before an engine runs.
///
/// A record must name a key of the graph and carry a finite weight. Negative
/// weights are rejected or counted depending on `policy`.
pub(crate) fn admit<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    policy: NegativeWeights,
) -> Result<Admission> {
    let mut admission = Admission::default();
    for (_, node, records) in graph.entries() {
        for (neighbor, weight) in records {
            if !graph.contains(neighbor) {
                return Err(MstError::unknown_vertex(neighbor));
            }
            if !weight.is_finite() {
                return Err(MstError::malformed(
                    node,
                    neighbor,
                    weight,
                    WeightDefect::NonFinite,
                ));
            }
            if weight.is_negative() {
                match policy {
                    NegativeWeights::Reject => {
                        return Err(MstError::malformed(
                            node,
                            neighbor,
                            weight,
                            WeightDefect::Negative,
                        ));
                    }
                    NegativeWeights::Accept => {
                        admission.negative_records += 1;
                    }
                }
            }
        }
    }
    Ok(admission)
}
