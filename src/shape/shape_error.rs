use crate::math::{Real, Vector};
use crate::shape::ShapeType;

/// Errors raised when a shape is built or modified with invalid parameters.
///
/// A shape that fails to build is never created, so it can never take part
/// in a collision pass.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A half-extent of a cuboid is negative or not finite.
    #[error("the half-extents must be finite and non-negative, found {0}")]
    NegativeExtent(Real),
    /// A radius or a half-height is negative or not finite.
    #[error("the radius and half-height of a {0:?} must be finite and non-negative, found {1}")]
    NegativeRadius(ShapeType, Real),
    /// The collision margin is negative or not finite.
    #[error("the collision margin must be finite and non-negative, found {0}")]
    NegativeMargin(Real),
    /// A local scaling factor is not strictly positive and finite.
    #[error("the local scaling factors must be finite and strictly positive, found {0}")]
    InvalidScaling(Real),
    /// A polyhedron needs at least four non-coplanar vertices.
    #[error("a convex polyhedron needs at least 4 vertices and 4 faces")]
    TooFewVertices,
    /// A face has fewer than three distinct vertices, or a zero area.
    #[error("the face {face} is degenerate")]
    DegenerateFace {
        /// The index of the degenerate face.
        face: u32,
    },
    /// A face references a vertex that does not exist.
    #[error("the face {face} references the vertex {index} which is out of bounds")]
    InvalidVertexIndex {
        /// The index of the faulty face.
        face: u32,
        /// The out-of-bounds vertex index.
        index: u32,
    },
    /// An edge is shared by more than two faces.
    #[error("the edge ({v1}, {v2}) is shared by more than two faces")]
    NonManifoldEdge {
        /// First endpoint of the edge.
        v1: u32,
        /// Second endpoint of the edge.
        v2: u32,
    },
    /// An edge belongs to a single face, so the polyhedron is not closed.
    #[error("the edge ({v1}, {v2}) belongs to a single face")]
    OpenEdge {
        /// First endpoint of the edge.
        v1: u32,
        /// Second endpoint of the edge.
        v2: u32,
    },
    /// Two faces traverse the same directed edge.
    #[error("the edge ({v1}, {v2}) is traversed in the same direction by two faces")]
    InconsistentWinding {
        /// Origin of the directed edge.
        v1: u32,
        /// Destination of the directed edge.
        v2: u32,
    },
    /// A vertex lies in front of the plane of a face.
    #[error("the vertex {vertex} lies in front of the face {face}")]
    NotConvex {
        /// The face whose plane is violated.
        face: u32,
        /// The vertex in front of that plane.
        vertex: u32,
    },
}

pub(crate) fn check_margin(margin: Real) -> Result<Real, ShapeError> {
    if margin.is_finite() && margin >= 0.0 {
        Ok(margin)
    } else {
        Err(ShapeError::NegativeMargin(margin))
    }
}

pub(crate) fn check_scaling(scaling: &Vector<Real>) -> Result<(), ShapeError> {
    match scaling.iter().find(|s| !s.is_finite() || **s <= 0.0) {
        Some(s) => Err(ShapeError::InvalidScaling(*s)),
        None => Ok(()),
    }
}
