//! UI components.

pub mod graph;
pub mod legend;
pub mod lens_panel;
pub mod toolbar;
