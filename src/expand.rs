use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::element::{find_element, find_parent, Content, Element};
use crate::snapshot::{AxisCapture, ElementRecord, InitialStyle, ParentHint};
use crate::types::ExpandAxis;

/// Bookkeeping for elements with an expand/collapse transition in flight.
///
/// Records live here, keyed by element id, rather than on the elements
/// themselves. A record is written by [`capture`](Self::capture) just before
/// a transition mutates an element and consumed by
/// [`restore`](Self::restore) when the transition finishes.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExpandState {
    /// Augmentation records per element id.
    records: HashMap<String, ElementRecord>,
}

impl ExpandState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any element still has a record pending restore.
    pub fn has_pending(&self) -> bool {
        !self.records.is_empty()
    }

    /// The record for an element, if one was captured.
    pub fn record(&self, id: &str) -> Option<&ElementRecord> {
        self.records.get(id)
    }

    /// Insert or replace the record for an element.
    ///
    /// [`capture`](Self::capture) is the usual entry point; this exists for
    /// callers that build records themselves, such as a session restored
    /// from serialized state.
    pub fn insert(&mut self, id: impl Into<String>, record: ElementRecord) {
        self.records.insert(id.into(), record);
    }

    /// Drop the record for an element without restoring anything.
    pub fn clear(&mut self, id: &str) -> Option<ElementRecord> {
        self.records.remove(id)
    }

    /// Capture pre-transition state for the element with the given id.
    ///
    /// Snapshots the transition and overflow declarations, the declaration
    /// of the axis about to be animated, and the element's current parent.
    /// Capturing an id that is not in the tree is a no-op. A second capture
    /// for the same id replaces the first.
    pub fn capture(&mut self, root: &Element, id: &str, axis: ExpandAxis) {
        let Some(element) = find_element(root, id) else {
            log::debug!("[expand] capture skipped, {id} not in tree");
            return;
        };

        let parent = match find_parent(root, id) {
            Some(parent) => ParentHint::Element(parent.id.clone()),
            None => ParentHint::Detached,
        };

        let mut initial = InitialStyle::new(
            element.style.effective_transition(),
            element.style.effective_overflow(),
        );
        let captured = AxisCapture::Value(element.style.effective_axis(axis).to_string());
        match axis {
            ExpandAxis::Vertical => initial.height = Some(captured),
            ExpandAxis::Horizontal => initial.width = Some(captured),
        }

        log::debug!("[expand] captured {id}: {} axis, parent {parent:?}", axis.property());

        self.records.insert(
            id.to_string(),
            ElementRecord {
                parent: Some(parent),
                initial_style: Some(initial),
            },
        );
    }

    /// Restore an element's declarations from its captured snapshot.
    ///
    /// A missing record, or a record without a snapshot, means there is
    /// nothing to restore and the element is left untouched. `transition`
    /// and `overflow` are always written back; a dimension is written back
    /// only when it was captured with a value. The consumed record is
    /// removed, so a finished transition leaves no stale bookkeeping behind.
    pub fn restore(&mut self, element: &mut Element) {
        let Some(record) = self.records.remove(&element.id) else {
            return;
        };
        let Some(initial) = record.initial_style else {
            log::debug!("[expand] record for {} had no snapshot", element.id);
            return;
        };

        element.style.transition = Some(initial.transition);
        element.style.overflow = Some(initial.overflow);
        if let Some(AxisCapture::Value(height)) = initial.height {
            element.style.height = Some(height);
        }
        if let Some(AxisCapture::Value(width)) = initial.width {
            element.style.width = Some(width);
        }

        log::debug!("[expand] restored {}", element.id);
    }

    /// Resolve the parent of an element, preferring the captured hint.
    ///
    /// The hint is trusted only while the hinted parent still contains the
    /// element; the tree may have been reparented since capture, in which
    /// case this falls back to a live traversal.
    pub fn resolve_parent<'a>(&self, root: &'a Element, id: &str) -> Option<&'a Element> {
        let hint = self.records.get(id).and_then(|record| record.parent.as_ref());
        if let Some(ParentHint::Element(parent_id)) = hint {
            if let Some(parent) = find_element(root, parent_id) {
                if parent.child_elements().iter().any(|child| child.id == id) {
                    return Some(parent);
                }
            }
            log::debug!("[expand] stale parent hint for {id}, falling back to traversal");
        }

        find_parent(root, id)
    }

    /// Drop records for elements no longer in the tree.
    pub fn cleanup(&mut self, current_ids: &HashSet<String>) {
        self.records.retain(|id, _| current_ids.contains(id));
    }
}

/// Collect all element IDs from the tree.
pub fn collect_element_ids(element: &Element) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_ids_recursive(element, &mut ids);
    ids
}

fn collect_ids_recursive(element: &Element, ids: &mut HashSet<String>) {
    ids.insert(element.id.clone());
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_ids_recursive(child, ids);
        }
    }
}
