//! Pure transformation from the raw node/edge lists and the active lens to
//! the element set a rendering backend draws. Best-effort by design:
//! malformed input degrades (neutral color, dropped edge) instead of
//! raising.

use std::collections::HashSet;

use super::lens::{ColorCategory, Lens};
use super::types::{GraphEdge, GraphNode};

/// Render width for edges that do not specify one.
pub const DEFAULT_EDGE_WIDTH: f64 = 1.5;

/// A node as handed to a rendering backend. One per input node, under
/// every lens.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderNode {
	pub id: String,
	pub label: String,
	pub x: f64,
	pub y: f64,
	pub color: ColorCategory,
}

/// An edge that survived lens filtering and endpoint resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderEdge {
	pub id: String,
	pub source: String,
	pub target: String,
	pub width: f64,
	pub dashed: bool,
}

/// The computed element set for one lens.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderElements {
	pub lens: Lens,
	pub nodes: Vec<RenderNode>,
	pub edges: Vec<RenderEdge>,
}

/// Compute the visible element set for `active_lens`.
///
/// Nodes are never filtered; each resolves its color via the per-lens
/// mapping, slate when absent. An edge is kept iff it is visible under the
/// lens and both endpoints resolve against the node id set; unresolved
/// edges are dropped silently. Input order is preserved.
pub fn compute_visible_elements(
	nodes: &[GraphNode],
	edges: &[GraphEdge],
	active_lens: Lens,
) -> RenderElements {
	let known: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

	let render_nodes = nodes
		.iter()
		.map(|n| RenderNode {
			id: n.id.clone(),
			label: n.label.clone(),
			x: n.x,
			y: n.y,
			color: n.colors.get(&active_lens).copied().unwrap_or_default(),
		})
		.collect();

	let render_edges = edges
		.iter()
		.enumerate()
		.filter_map(|(i, e)| {
			if !e.visible_under(active_lens) {
				return None;
			}
			if !known.contains(e.source.as_str()) || !known.contains(e.target.as_str()) {
				return None;
			}
			Some(RenderEdge {
				// Index-derived fallback id, assigned before filtering so it
				// is stable across lens switches.
				id: e.id.clone().unwrap_or_else(|| format!("edge-{i}")),
				source: e.source.clone(),
				target: e.target.clone(),
				width: e.width.unwrap_or(DEFAULT_EDGE_WIDTH),
				dashed: e.dashed,
			})
		})
		.collect();

	RenderElements {
		lens: active_lens,
		nodes: render_nodes,
		edges: render_edges,
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn node(id: &str) -> GraphNode {
		GraphNode {
			id: id.into(),
			label: id.to_ascii_uppercase(),
			x: 0.0,
			y: 0.0,
			colors: HashMap::new(),
			meta: HashMap::new(),
		}
	}

	fn edge(source: &str, target: &str, always: bool, lenses: Vec<Lens>) -> GraphEdge {
		GraphEdge {
			id: None,
			source: source.into(),
			target: target.into(),
			always,
			lenses,
			width: None,
			dashed: false,
			meta: HashMap::new(),
		}
	}

	fn edge_ids(out: &RenderElements) -> Vec<(String, String)> {
		out.edges
			.iter()
			.map(|e| (e.source.clone(), e.target.clone()))
			.collect()
	}

	#[test]
	fn always_edges_survive_every_lens() {
		let nodes = [node("a"), node("b")];
		let edges = [edge("a", "b", true, vec![])];
		for lens in Lens::ALL {
			let out = compute_visible_elements(&nodes, &edges, lens);
			assert_eq!(edge_ids(&out), vec![("a".into(), "b".into())], "{lens:?}");
		}
	}

	#[test]
	fn lens_scoped_edge_present_iff_member() {
		let nodes = [node("a"), node("b")];
		let edges = [edge("a", "b", false, vec![Lens::Reality, Lens::Drift])];
		let present = |lens| !compute_visible_elements(&nodes, &edges, lens).edges.is_empty();
		assert!(present(Lens::Reality));
		assert!(!present(Lens::Intent));
		assert!(present(Lens::Drift));
	}

	#[test]
	fn unresolved_endpoint_drops_edge_under_every_lens() {
		let nodes = [node("a")];
		let edges = [edge("a", "d", true, vec![]), edge("d", "a", false, vec![Lens::Intent])];
		for lens in Lens::ALL {
			let out = compute_visible_elements(&nodes, &edges, lens);
			assert!(out.edges.is_empty(), "{lens:?}");
		}
	}

	#[test]
	fn nodes_always_present_with_mapped_or_neutral_color() {
		let mut colored = node("a");
		colored
			.colors
			.insert(Lens::Intent, ColorCategory::Emerald);
		let nodes = [colored, node("b")];

		for lens in Lens::ALL {
			let out = compute_visible_elements(&nodes, &[], lens);
			assert_eq!(out.nodes.len(), 2);
			let expected = if lens == Lens::Intent {
				ColorCategory::Emerald
			} else {
				ColorCategory::Slate
			};
			assert_eq!(out.nodes[0].color, expected, "{lens:?}");
			assert_eq!(out.nodes[1].color, ColorCategory::Slate);
		}
	}

	#[test]
	fn width_defaults_and_id_is_index_derived() {
		let nodes = [node("a"), node("b")];
		let mut wide = edge("a", "b", true, vec![]);
		wide.width = Some(4.0);
		wide.dashed = true;
		let edges = [edge("a", "b", false, vec![Lens::Intent]), wide];

		let out = compute_visible_elements(&nodes, &edges, Lens::Reality);
		assert_eq!(out.edges.len(), 1);
		// The surviving edge sits at input index 1 even though index 0 was
		// filtered out.
		assert_eq!(out.edges[0].id, "edge-1");
		assert_eq!(out.edges[0].width, 4.0);
		assert!(out.edges[0].dashed);

		let out = compute_visible_elements(&nodes, &edges, Lens::Intent);
		assert_eq!(out.edges[0].id, "edge-0");
		assert_eq!(out.edges[0].width, DEFAULT_EDGE_WIDTH);
		assert!(!out.edges[0].dashed);
	}

	#[test]
	fn explicit_edge_id_wins_over_fallback() {
		let nodes = [node("a"), node("b")];
		let mut named = edge("a", "b", true, vec![]);
		named.id = Some("calls".into());
		let out = compute_visible_elements(&nodes, &[named], Lens::Reality);
		assert_eq!(out.edges[0].id, "calls");
	}

	#[test]
	fn idempotent_for_identical_inputs() {
		let mut a = node("a");
		a.colors.insert(Lens::Drift, ColorCategory::Rose);
		let nodes = [a, node("b"), node("c")];
		let edges = [
			edge("a", "b", false, vec![Lens::Reality]),
			edge("b", "c", true, vec![]),
		];
		for lens in Lens::ALL {
			let first = compute_visible_elements(&nodes, &edges, lens);
			let second = compute_visible_elements(&nodes, &edges, lens);
			assert_eq!(first, second);
		}
	}

	#[test]
	fn scenario_always_edge_outlives_lens_scoped_edge() {
		let nodes = [node("a"), node("b"), node("c")];
		let edges = [
			edge("a", "b", false, vec![Lens::Reality]),
			edge("b", "c", true, vec![]),
		];

		let out = compute_visible_elements(&nodes, &edges, Lens::Reality);
		assert_eq!(
			edge_ids(&out),
			vec![("a".into(), "b".into()), ("b".into(), "c".into())]
		);

		let out = compute_visible_elements(&nodes, &edges, Lens::Intent);
		assert_eq!(edge_ids(&out), vec![("b".into(), "c".into())]);
	}

	#[test]
	fn scenario_edge_to_unknown_node_excluded_everywhere() {
		let nodes = [node("a"), node("b"), node("c")];
		let edges = [edge("a", "d", true, vec![])];
		for lens in Lens::ALL {
			assert!(compute_visible_elements(&nodes, &edges, lens).edges.is_empty());
		}
	}
}
