use tracing::debug;

use crate::models::filters::ChartFilters;
use crate::models::transaction::FlowType;

/// Receives committed category selections from a chart.
///
/// This is the upward half of the unidirectional flow: a chart commits
/// through the sink, and the owner pushes the new applied list back
/// down via `ChartSelection::external_applied_change`.
pub trait SelectionSink {
    fn on_categories_applied(&mut self, flow: FlowType, category_ids: &[String]);
}

impl SelectionSink for ChartFilters {
    fn on_categories_applied(&mut self, flow: FlowType, category_ids: &[String]) {
        self.set_categories(flow, category_ids.to_vec());
    }
}

/// Two-phase category selection for one chart instance.
///
/// Clicking slices edits the pending set only; Apply commits the
/// pending set through the sink, and Clear commits an empty set
/// immediately. Staging lets the user explore several slices before
/// triggering an upstream recompute.
#[derive(Debug, Clone)]
pub struct ChartSelection {
    flow: FlowType,
    applied: Vec<String>,
    pending: Vec<String>,
}

impl ChartSelection {
    /// A fresh selection starts with pending mirroring applied.
    pub fn new(flow: FlowType, applied: Vec<String>) -> Self {
        let pending = applied.clone();
        Self {
            flow,
            applied,
            pending,
        }
    }

    #[must_use]
    pub fn flow(&self) -> FlowType {
        self.flow
    }

    /// The committed selection driving the visible aggregation.
    #[must_use]
    pub fn applied(&self) -> &[String] {
        &self.applied
    }

    /// The in-progress selection, not yet committed.
    #[must_use]
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// The owner's applied list changed (e.g., filters cleared
    /// elsewhere). Discards any unpropagated pending edits; the
    /// external change always wins.
    pub fn external_applied_change(&mut self, new_applied: Vec<String>) {
        self.pending = new_applied.clone();
        self.applied = new_applied;
    }

    /// Flip one category in the pending set. The applied set is
    /// untouched until Apply.
    pub fn toggle(&mut self, category_id: &str) {
        if let Some(pos) = self.pending.iter().position(|id| id == category_id) {
            self.pending.remove(pos);
        } else {
            self.pending.push(category_id.to_string());
        }
    }

    /// Commit the pending set through the sink.
    ///
    /// The applied set updates only once the owner echoes the new list
    /// back via `external_applied_change`.
    pub fn apply(&self, sink: &mut dyn SelectionSink) {
        debug!(flow = %self.flow, count = self.pending.len(), "applying chart selection");
        sink.on_categories_applied(self.flow, &self.pending);
    }

    /// Empty the pending set and commit immediately, skipping the
    /// apply step.
    pub fn clear(&mut self, sink: &mut dyn SelectionSink) {
        debug!(flow = %self.flow, "clearing chart selection");
        self.pending.clear();
        sink.on_categories_applied(self.flow, &[]);
    }

    /// True when pending differs from applied, ignoring order.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        let mut pending = self.pending.clone();
        let mut applied = self.applied.clone();
        pending.sort();
        applied.sort();
        pending != applied
    }

    /// True when anything is selected, applied or pending.
    /// Drives whether a "clear" control is shown.
    #[must_use]
    pub fn has_any_selections(&self) -> bool {
        !self.applied.is_empty() || !self.pending.is_empty()
    }
}
