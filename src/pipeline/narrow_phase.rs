use crate::pipeline::{ColliderSet, ContactSnapshot, ShapeId};
use crate::query::{ContactManifoldInfo, DispatchTable, NarrowPhaseConfig, Unsupported};

/// A pair of colliders found potentially in contact by a broad-phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShapePair {
    /// The handle of the first collider.
    pub shape1: ShapeId,
    /// The handle of the second collider.
    pub shape2: ShapeId,
}

impl ShapePair {
    /// Creates a new pair.
    pub fn new(shape1: ShapeId, shape2: ShapeId) -> Self {
        Self { shape1, shape2 }
    }
}

/// Error of the narrow-phase on a single pair.
///
/// These never interrupt a pass: they are collected into the
/// [`NarrowPhaseReport`] while the other pairs are processed normally.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum NarrowPhaseError {
    /// No contact algorithm is registered for the kinds of the pair.
    #[error(transparent)]
    Unsupported(#[from] Unsupported),
    /// The pair refers to a collider missing from the collider set.
    #[error("the collider {0:?} does not exist")]
    UnknownShape(ShapeId),
}

/// The result of a narrow-phase pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NarrowPhaseReport {
    /// The contact manifolds with at least one contact, in the order of the input pairs.
    pub manifolds: Vec<ContactManifoldInfo>,
    /// The pairs that could not be processed.
    pub failures: Vec<(ShapePair, NarrowPhaseError)>,
}

/// The narrow-phase: computes the contact manifolds of the pairs found by a broad-phase.
///
/// The narrow-phase owns no shape. Each call to [`NarrowPhase::update`] borrows the
/// [`ColliderSet`] for the duration of the pass, and keeps the resulting manifolds for
/// inspection with [`NarrowPhase::debug_snapshot`].
#[derive(Clone, Debug, Default)]
pub struct NarrowPhase {
    dispatcher: DispatchTable,
    config: NarrowPhaseConfig,
    manifolds: Vec<ContactManifoldInfo>,
}

impl NarrowPhase {
    /// Creates a narrow-phase with the default dispatch table and configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a narrow-phase with a custom dispatch table and configuration.
    pub fn with_dispatcher(dispatcher: DispatchTable, config: NarrowPhaseConfig) -> Self {
        Self {
            dispatcher,
            config,
            manifolds: Vec::new(),
        }
    }

    /// The dispatch table selecting the contact algorithms.
    pub fn dispatcher(&self) -> &DispatchTable {
        &self.dispatcher
    }

    /// The dispatch table selecting the contact algorithms, mutably.
    pub fn dispatcher_mut(&mut self) -> &mut DispatchTable {
        &mut self.dispatcher
    }

    /// The configuration of the contact algorithms.
    pub fn config(&self) -> &NarrowPhaseConfig {
        &self.config
    }

    /// The configuration of the contact algorithms, mutably.
    pub fn config_mut(&mut self) -> &mut NarrowPhaseConfig {
        &mut self.config
    }

    /// The manifolds computed by the last pass.
    pub fn manifolds(&self) -> &[ContactManifoldInfo] {
        &self.manifolds
    }

    /// Computes the contact manifolds of all the given pairs.
    ///
    /// Pairs without contact are dropped from the report. Pairs that cannot be processed are
    /// reported as failures and logged. With the `parallel` feature, pairs are processed in
    /// parallel with the same output as the sequential pass.
    pub fn update(&mut self, colliders: &ColliderSet, pairs: &[ShapePair]) -> NarrowPhaseReport {
        let dispatcher = &self.dispatcher;
        let config = &self.config;
        let process =
            |pair: &ShapePair| (*pair, compute_pair(dispatcher, config, colliders, pair));

        #[cfg(feature = "parallel")]
        let results: Vec<_> = {
            use rayon::prelude::*;
            pairs.par_iter().map(process).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let results: Vec<_> = pairs.iter().map(process).collect();

        let mut report = NarrowPhaseReport::default();

        for (pair, result) in results {
            match result {
                Ok(manifold) if !manifold.is_empty() => report.manifolds.push(manifold),
                Ok(_) => {}
                Err(err) => {
                    log::warn!("narrow-phase skipped the pair {pair:?}: {err}");
                    report.failures.push((pair, err));
                }
            }
        }

        self.manifolds.clone_from(&report.manifolds);
        report
    }

    /// A read-only view of the manifolds computed by the last pass.
    pub fn debug_snapshot(&self) -> ContactSnapshot<'_> {
        ContactSnapshot::new(&self.manifolds)
    }
}

fn compute_pair(
    dispatcher: &DispatchTable,
    config: &NarrowPhaseConfig,
    colliders: &ColliderSet,
    pair: &ShapePair,
) -> Result<ContactManifoldInfo, NarrowPhaseError> {
    let co1 = colliders
        .get(pair.shape1)
        .ok_or(NarrowPhaseError::UnknownShape(pair.shape1))?;
    let co2 = colliders
        .get(pair.shape2)
        .ok_or(NarrowPhaseError::UnknownShape(pair.shape2))?;

    let mut manifold =
        ContactManifoldInfo::new(pair.shape1, pair.shape2, co1.position, co2.position);
    dispatcher.dispatch(&co1.shape, &co2.shape, config, &mut manifold)?;
    Ok(manifold)
}
