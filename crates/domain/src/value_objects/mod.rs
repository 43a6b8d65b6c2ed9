//! Value objects - Immutable objects defined by their attributes

mod diagram;
mod names;
mod proximity;

pub use diagram::{diagram_label, DiagramReference, DEFAULT_DIAGRAM_ASSET};
pub use names::PartName;
pub use proximity::ProximityHint;
