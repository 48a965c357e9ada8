//! Augmentation data attached to elements while a transition is in flight.
//!
//! Records are stored outside the tree (see [`crate::expand::ExpandState`])
//! so the host element type stays untouched. Every field here is optional:
//! an element with nothing captured is the normal resting state, not an
//! error.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::ExpandAxis;

/// A captured dimension declaration.
///
/// `Untracked` records that the axis was deliberately skipped for this
/// transition and serializes as `null`. A snapshot that never mentions the
/// axis omits the field entirely; the two states are distinct and must
/// survive a round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisCapture {
    /// The pre-transition declaration value.
    Value(String),
    /// The axis is intentionally not tracked.
    Untracked,
}

impl AxisCapture {
    /// The captured value, if the axis was actually tracked.
    pub fn value(&self) -> Option<&str> {
        match self {
            AxisCapture::Value(value) => Some(value),
            AxisCapture::Untracked => None,
        }
    }

    pub fn is_untracked(&self) -> bool {
        matches!(self, AxisCapture::Untracked)
    }
}

/// Errors from validating snapshot input.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot is missing its transition declaration.
    #[error("initial style snapshot is missing the transition declaration")]
    MissingTransition,

    /// The snapshot is missing its overflow declaration.
    #[error("initial style snapshot is missing the overflow declaration")]
    MissingOverflow,
}

/// Pre-transition style state for a single element.
///
/// `transition` and `overflow` are always captured together; the dimension
/// captures are independently optional because only one axis is animated at
/// a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialStyle {
    pub transition: String,
    pub overflow: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_axis_capture"
    )]
    pub height: Option<AxisCapture>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_axis_capture"
    )]
    pub width: Option<AxisCapture>,
}

impl InitialStyle {
    /// Snapshot with the two required declarations and no dimension captures.
    pub fn new(transition: impl Into<String>, overflow: impl Into<String>) -> Self {
        Self {
            transition: transition.into(),
            overflow: overflow.into(),
            height: None,
            width: None,
        }
    }

    /// Builds a snapshot from loosely-typed input, rejecting input that is
    /// missing either required declaration.
    pub fn from_parts(
        transition: Option<String>,
        overflow: Option<String>,
        height: Option<AxisCapture>,
        width: Option<AxisCapture>,
    ) -> Result<Self, SnapshotError> {
        let transition = transition.ok_or(SnapshotError::MissingTransition)?;
        let overflow = overflow.ok_or(SnapshotError::MissingOverflow)?;
        Ok(Self {
            transition,
            overflow,
            height,
            width,
        })
    }

    pub fn height(mut self, capture: AxisCapture) -> Self {
        self.height = Some(capture);
        self
    }

    pub fn width(mut self, capture: AxisCapture) -> Self {
        self.width = Some(capture);
        self
    }

    /// Captured value for an axis, if that axis was tracked with a value.
    pub fn axis_value(&self, axis: ExpandAxis) -> Option<&str> {
        let capture = match axis {
            ExpandAxis::Vertical => self.height.as_ref(),
            ExpandAxis::Horizontal => self.width.as_ref(),
        };
        capture.and_then(AxisCapture::value)
    }
}

/// Non-owning back-reference to an element's parent at capture time.
///
/// This is a navigational key into the tree, never an owning handle; the
/// tree may have changed since capture, so readers verify before trusting
/// it. Serializes as the parent id, or `null` for `Detached`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParentHint {
    /// Id of the element's parent when the hint was taken.
    Element(String),
    /// The element was known to have no parent.
    Detached,
}

impl ParentHint {
    /// The hinted parent id, if the element had one.
    pub fn element_id(&self) -> Option<&str> {
        match self {
            ParentHint::Element(id) => Some(id),
            ParentHint::Detached => None,
        }
    }
}

/// Side-table entry for one element: what an expand/collapse operation
/// remembers while its transition runs.
///
/// Both fields are optional. An absent field means "not captured yet",
/// which is distinct from `ParentHint::Detached` (known to have no parent)
/// and from an `AxisCapture::Untracked` dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRecord {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_parent_hint"
    )]
    pub parent: Option<ParentHint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_style: Option<InitialStyle>,
}

impl ElementRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.parent.is_none() && self.initial_style.is_none()
    }
}

// A plain `Option` would swallow an explicit `null` as absence. These
// helpers only run when the field is present, so `null` reaches the
// untagged enum and maps to its unit variant.
fn present_axis_capture<'de, D>(deserializer: D) -> Result<Option<AxisCapture>, D::Error>
where
    D: Deserializer<'de>,
{
    AxisCapture::deserialize(deserializer).map(Some)
}

fn present_parent_hint<'de, D>(deserializer: D) -> Result<Option<ParentHint>, D::Error>
where
    D: Deserializer<'de>,
{
    ParentHint::deserialize(deserializer).map(Some)
}
