mod axis;
mod style;

pub use axis::ExpandAxis;
pub use style::Style;
