/// Which dimension an expand/collapse operation animates.
///
/// An operation animates exactly one axis, so a style capture tracks the
/// chosen axis and leaves the other one alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpandAxis {
    #[default]
    Vertical,
    Horizontal,
}

impl ExpandAxis {
    /// The style declaration this axis animates.
    pub fn property(self) -> &'static str {
        match self {
            ExpandAxis::Vertical => "height",
            ExpandAxis::Horizontal => "width",
        }
    }
}
