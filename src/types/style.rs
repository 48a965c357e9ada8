use super::ExpandAxis;

/// Inline style declarations for an element.
///
/// Declarations are kept as plain strings since that is the form they are
/// captured in and written back after a transition. An unset declaration
/// reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub transition: Option<String>,
    pub overflow: Option<String>,
    pub height: Option<String>,
    pub width: Option<String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transition(mut self, value: impl Into<String>) -> Self {
        self.transition = Some(value.into());
        self
    }

    pub fn overflow(mut self, value: impl Into<String>) -> Self {
        self.overflow = Some(value.into());
        self
    }

    pub fn height(mut self, value: impl Into<String>) -> Self {
        self.height = Some(value.into());
        self
    }

    pub fn width(mut self, value: impl Into<String>) -> Self {
        self.width = Some(value.into());
        self
    }

    /// Effective transition declaration ("" when unset).
    pub fn effective_transition(&self) -> &str {
        self.transition.as_deref().unwrap_or("")
    }

    /// Effective overflow declaration ("" when unset).
    pub fn effective_overflow(&self) -> &str {
        self.overflow.as_deref().unwrap_or("")
    }

    /// Effective height declaration ("" when unset).
    pub fn effective_height(&self) -> &str {
        self.height.as_deref().unwrap_or("")
    }

    /// Effective width declaration ("" when unset).
    pub fn effective_width(&self) -> &str {
        self.width.as_deref().unwrap_or("")
    }

    /// Effective value of the declaration an axis animates.
    pub fn effective_axis(&self, axis: ExpandAxis) -> &str {
        match axis {
            ExpandAxis::Vertical => self.effective_height(),
            ExpandAxis::Horizontal => self.effective_width(),
        }
    }

    /// Set the declaration an axis animates.
    pub fn set_axis(&mut self, axis: ExpandAxis, value: impl Into<String>) {
        match axis {
            ExpandAxis::Vertical => self.height = Some(value.into()),
            ExpandAxis::Horizontal => self.width = Some(value.into()),
        }
    }
}
