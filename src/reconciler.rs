//! Keyed reconciliation between the current sample and the drawn curves.

use crate::data_types::Color;
use glam::Vec2;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::trace;

/// Stable curve identity: the row's rank in the one-time shuffle. Unique for
/// every row regardless of any grouping field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RowKey(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub key: RowKey,
    /// Index of the source row in the dataset.
    pub row: usize,
    pub points: Vec<Vec2>,
    /// Assigned at creation, never recomputed.
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "key", rename_all = "snake_case")]
pub enum ReconcileAction {
    Create(RowKey),
    Update(RowKey),
    Remove(RowKey),
}

impl ReconcileAction {
    pub fn key(&self) -> RowKey {
        match self {
            Self::Create(k) | Self::Update(k) | Self::Remove(k) => *k,
        }
    }
}

/// Owns the drawn-curve set keyed by [`RowKey`].
#[derive(Clone, Debug, Default)]
pub struct RenderReconciler {
    curves: BTreeMap<RowKey, Curve>,
}

impl RenderReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn get(&self, key: RowKey) -> Option<&Curve> {
        self.curves.get(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = RowKey> + '_ {
        self.curves.keys().copied()
    }

    /// Curves in key order.
    pub fn curves(&self) -> impl Iterator<Item = &Curve> {
        self.curves.values()
    }

    /// Brings the curve set in line with `sample`, a prefix of the shuffled row
    /// order (entry `i` is the row index whose key is `RowKey(i)`).
    ///
    /// Removals come first, then creations and in-place updates in key order.
    /// `path` fills a row's points, `color` is only consulted for new curves.
    pub fn reconcile<P, C>(
        &mut self,
        sample: &[usize],
        mut path: P,
        mut color: C,
    ) -> Vec<ReconcileAction>
    where
        P: FnMut(usize, &mut Vec<Vec2>),
        C: FnMut(usize) -> Color,
    {
        let mut actions = Vec::new();

        let stale = self.curves.split_off(&RowKey(sample.len()));
        actions.extend(stale.into_keys().map(ReconcileAction::Remove));

        for (rank, &row) in sample.iter().enumerate() {
            let key = RowKey(rank);
            let replaced = match self.curves.get_mut(&key) {
                Some(curve) if curve.row == row => {
                    path(row, &mut curve.points);
                    actions.push(ReconcileAction::Update(key));
                    continue;
                }
                // Same rank, different row: the sample came from another shuffle.
                Some(_) => true,
                None => false,
            };
            if replaced {
                actions.push(ReconcileAction::Remove(key));
            }

            let mut points = Vec::new();
            path(row, &mut points);
            self.curves.insert(
                key,
                Curve {
                    key,
                    row,
                    points,
                    color: color(row),
                },
            );
            actions.push(ReconcileAction::Create(key));
        }

        trace!(
            curves = self.curves.len(),
            actions = actions.len(),
            "reconciled sample"
        );
        actions
    }

    /// Recomputes every drawn path after a layout change. No curve is created
    /// or removed.
    pub fn refresh<P>(&mut self, mut path: P) -> Vec<ReconcileAction>
    where
        P: FnMut(usize, &mut Vec<Vec2>),
    {
        self.curves
            .values_mut()
            .map(|curve| {
                path(curve.row, &mut curve.points);
                ReconcileAction::Update(curve.key)
            })
            .collect()
    }

    /// Detaches every curve.
    pub fn clear(&mut self) -> Vec<ReconcileAction> {
        std::mem::take(&mut self.curves)
            .into_keys()
            .map(ReconcileAction::Remove)
            .collect()
    }
}
