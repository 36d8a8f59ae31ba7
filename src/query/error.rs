use crate::shape::ShapeType;

/// Error indicating that no contact algorithm is registered for a pair of shape types.
///
/// This is raised by [`DispatchTable::dispatch`](crate::query::DispatchTable::dispatch)
/// when neither `(kind1, kind2)` nor `(kind2, kind1)` has an algorithm.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("no contact algorithm is registered between {kind1:?} and {kind2:?}")]
pub struct Unsupported {
    /// The type of the first shape of the pair.
    pub kind1: ShapeType,
    /// The type of the second shape of the pair.
    pub kind2: ShapeType,
}
