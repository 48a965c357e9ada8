pub mod element;
pub mod expand;
pub mod snapshot;
pub mod types;

pub use element::{find_element, find_element_mut, find_parent, Content, Element};
pub use expand::{collect_element_ids, ExpandState};
pub use snapshot::{AxisCapture, ElementRecord, InitialStyle, ParentHint, SnapshotError};
pub use types::{ExpandAxis, Style};
