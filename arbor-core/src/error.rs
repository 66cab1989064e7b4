//! Error types for the Arbor core library.
//!
//! Defines the error enum exposed by the public API, its stable codes and a
//! convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::result::Algorithm;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// The reason an adjacency record was rejected as malformed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WeightDefect {
    /// The weight is below zero while negative weights are rejected.
    Negative,
    /// The weight is NaN or infinite and cannot be ordered.
    NonFinite,
}

impl fmt::Display for WeightDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Negative => "negative",
            Self::NonFinite => "non-finite",
        })
    }
}

/// An error produced while computing a minimum spanning tree or forest.
///
/// Vertex labels and weights are rendered into strings so the error stays
/// independent of the graph's label and weight types.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// An operation referenced a vertex that is not a key of the graph.
    #[error("vertex {vertex} is not present in the graph")]
    UnknownVertex {
        /// `Debug` rendering of the missing vertex label.
        vertex: Arc<str>,
    },
    /// An adjacency record carried a weight the solver cannot accept.
    #[error("edge ({left}, {right}) has {defect} weight {weight}")]
    MalformedGraph {
        /// `Debug` rendering of the vertex whose adjacency holds the record.
        left: Arc<str>,
        /// `Debug` rendering of the neighbour named by the record.
        right: Arc<str>,
        /// `Display` rendering of the offending weight.
        weight: Arc<str>,
        /// Why the weight was rejected.
        defect: WeightDefect,
    },
    /// The sum of accepted weights does not fit the weight type.
    #[error("{algorithm} total cost overflows {weight_type}")]
    CostOverflow {
        /// Engine that was accumulating the total.
        algorithm: Algorithm,
        /// Name of the weight type.
        weight_type: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// An operation referenced a vertex that is not a key of the graph.
        UnknownVertex => UnknownVertex { .. } => "MST_UNKNOWN_VERTEX",
        /// An adjacency record carried a weight the solver cannot accept.
        MalformedGraph => MalformedGraph { .. } => "MST_MALFORMED_GRAPH",
        /// The total cost does not fit the weight type.
        CostOverflow => CostOverflow { .. } => "MST_COST_OVERFLOW",
    }
}

impl MstError {
    pub(crate) fn unknown_vertex<V: fmt::Debug>(vertex: &V) -> Self {
        Self::UnknownVertex {
            vertex: Arc::from(format!("{vertex:?}")),
        }
    }

    pub(crate) fn malformed<V, W>(left: &V, right: &V, weight: W, defect: WeightDefect) -> Self
    where
        V: fmt::Debug,
        W: fmt::Display,
    {
        Self::MalformedGraph {
            left: Arc::from(format!("{left:?}")),
            right: Arc::from(format!("{right:?}")),
            weight: Arc::from(weight.to_string()),
            defect,
        }
    }

    pub(crate) fn cost_overflow<W>(algorithm: Algorithm) -> Self {
        Self::CostOverflow {
            algorithm,
            weight_type: std::any::type_name::<W>(),
        }
    }

    /// Retrieve the [`WeightDefect`] when the error reports a malformed record.
    #[must_use]
    pub const fn defect(&self) -> Option<WeightDefect> {
        match self {
            Self::MalformedGraph { defect, .. } => Some(*defect),
            Self::UnknownVertex { .. } | Self::CostOverflow { .. } => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
