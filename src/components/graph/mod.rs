//! Lens-filtered knowledge-graph model, the pure element adapter, and the
//! two rendering backends that consume its output.

pub mod adapter;
mod canvas;
mod diagram;
pub mod layout;
pub mod lens;
mod render;
mod state;
pub mod types;
pub mod view;

pub use adapter::compute_visible_elements;
pub use canvas::GraphCanvas;
pub use diagram::GraphDiagram;
pub use layout::DiagramLayout;
pub use lens::{Lens, LensInfo};
pub use types::{Dataset, LegendItem};
pub use view::{ViewCommand, ViewRequest};
