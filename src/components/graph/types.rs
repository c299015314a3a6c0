//! Render-input data model: nodes, edges, legend entries, and the dataset
//! document that carries them. All of it is immutable from this layer's
//! perspective; entities are fetched once per query and held only as
//! render input.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::lens::{ColorCategory, Lens, LensInfo};

/// An architecture entity. Nodes are rendered under every lens; only the
/// color mapping changes per lens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	#[serde(default)]
	pub x: f64,
	#[serde(default)]
	pub y: f64,
	/// Per-lens display color category. Missing lenses fall back to slate.
	#[serde(default)]
	pub colors: HashMap<Lens, ColorCategory>,
	#[serde(default)]
	pub meta: HashMap<String, String>,
}

/// A relation between two entities, tagged with the lenses it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
	/// Optional stable id; defaulted from the edge's input index when absent.
	#[serde(default)]
	pub id: Option<String>,
	pub source: String,
	pub target: String,
	/// Visible under every lens, short-circuiting `lenses`.
	#[serde(default)]
	pub always: bool,
	#[serde(default)]
	pub lenses: Vec<Lens>,
	#[serde(default)]
	pub width: Option<f64>,
	#[serde(default)]
	pub dashed: bool,
	#[serde(default)]
	pub meta: HashMap<String, String>,
}

impl GraphEdge {
	/// Visibility rule: `always == true` OR the active lens is a member.
	pub fn visible_under(&self, lens: Lens) -> bool {
		self.always || self.lenses.contains(&lens)
	}
}

/// One legend entry, filtered by lens with the same rule as edges; an empty
/// lens set means shown everywhere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegendItem {
	pub label: String,
	pub category: ColorCategory,
	#[serde(default)]
	pub dashed: bool,
	#[serde(default)]
	pub lenses: Vec<Lens>,
}

impl LegendItem {
	/// Whether the entry appears under the given lens.
	pub fn shown_under(&self, lens: Lens) -> bool {
		self.lenses.is_empty() || self.lenses.contains(&lens)
	}
}

/// The full mock document consumed by the viewer. Integrity score and drift
/// summary are precomputed upstream and displayed as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
	#[serde(default)]
	pub nodes: Vec<GraphNode>,
	#[serde(default)]
	pub edges: Vec<GraphEdge>,
	#[serde(default)]
	pub legend: Vec<LegendItem>,
	#[serde(default)]
	pub lenses: HashMap<Lens, LensInfo>,
	#[serde(default)]
	pub integrity_score: u8,
	#[serde(default)]
	pub drift_summary: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn edge(always: bool, lenses: Vec<Lens>) -> GraphEdge {
		GraphEdge {
			id: None,
			source: "a".into(),
			target: "b".into(),
			always,
			lenses,
			width: None,
			dashed: false,
			meta: HashMap::new(),
		}
	}

	#[test]
	fn always_short_circuits_membership() {
		let e = edge(true, vec![]);
		for lens in Lens::ALL {
			assert!(e.visible_under(lens));
		}
	}

	#[test]
	fn membership_gates_visibility() {
		let e = edge(false, vec![Lens::Intent, Lens::Drift]);
		assert!(!e.visible_under(Lens::Reality));
		assert!(e.visible_under(Lens::Intent));
		assert!(e.visible_under(Lens::Drift));
	}

	#[test]
	fn empty_legend_lens_set_means_everywhere() {
		let item = LegendItem {
			label: "Service".into(),
			category: ColorCategory::Sky,
			dashed: false,
			lenses: vec![],
		};
		for lens in Lens::ALL {
			assert!(item.shown_under(lens));
		}
		let scoped = LegendItem {
			lenses: vec![Lens::Drift],
			..item
		};
		assert!(scoped.shown_under(Lens::Drift));
		assert!(!scoped.shown_under(Lens::Reality));
	}
}
