//! Layout position computation for the diagram backend. Every mode is a
//! one-shot assignment of positions inside a viewport; the backend animates
//! toward them with a fixed-duration transition.

use std::collections::{HashMap, VecDeque};
use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use serde::{Deserialize, Serialize};

use super::adapter::RenderElements;

/// Relayout animation duration applied by the diagram backend.
pub const LAYOUT_ANIMATION_MS: u32 = 400;

const MARGIN: f64 = 60.0;
const FORCE_STEPS: u32 = 300;
const FORCE_DT: f32 = 0.016;

/// Diagram layout mode, selected externally; changing it retriggers a full
/// relayout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagramLayout {
	Hierarchical,
	ForceDirected,
	Circular,
	Grid,
	BreadthFirst,
}

impl DiagramLayout {
	/// All modes, in picker order.
	pub const ALL: [DiagramLayout; 5] = [
		DiagramLayout::Hierarchical,
		DiagramLayout::ForceDirected,
		DiagramLayout::Circular,
		DiagramLayout::Grid,
		DiagramLayout::BreadthFirst,
	];

	/// Stable kebab-case identifier.
	pub fn as_str(self) -> &'static str {
		match self {
			DiagramLayout::Hierarchical => "hierarchical",
			DiagramLayout::ForceDirected => "force-directed",
			DiagramLayout::Circular => "circular",
			DiagramLayout::Grid => "grid",
			DiagramLayout::BreadthFirst => "breadth-first",
		}
	}

	/// Picker label.
	pub fn label(self) -> &'static str {
		match self {
			DiagramLayout::Hierarchical => "Hierarchical",
			DiagramLayout::ForceDirected => "Force",
			DiagramLayout::Circular => "Circular",
			DiagramLayout::Grid => "Grid",
			DiagramLayout::BreadthFirst => "Breadth-first",
		}
	}

	/// Parse the identifier form.
	pub fn parse(s: &str) -> Option<DiagramLayout> {
		DiagramLayout::ALL
			.into_iter()
			.find(|l| l.as_str() == s.trim().to_ascii_lowercase())
	}
}

impl Default for DiagramLayout {
	fn default() -> Self {
		DiagramLayout::Hierarchical
	}
}

/// Compute a position for every node of `elements` inside a
/// `width` x `height` viewport under the given layout mode.
pub fn compute_positions(
	layout: DiagramLayout,
	elements: &RenderElements,
	width: f64,
	height: f64,
) -> HashMap<String, (f64, f64)> {
	if elements.nodes.is_empty() {
		return HashMap::new();
	}
	match layout {
		DiagramLayout::Circular => circular(elements, width, height),
		DiagramLayout::Grid => grid(elements, width, height),
		DiagramLayout::Hierarchical => layered(elements, width, height, Axis::Vertical),
		DiagramLayout::BreadthFirst => layered(elements, width, height, Axis::Horizontal),
		DiagramLayout::ForceDirected => force_directed(elements, width, height),
	}
}

fn circular(elements: &RenderElements, width: f64, height: f64) -> HashMap<String, (f64, f64)> {
	let n = elements.nodes.len();
	let (cx, cy) = (width / 2.0, height / 2.0);
	let radius = (width.min(height) / 2.0 - MARGIN).max(10.0);
	elements
		.nodes
		.iter()
		.enumerate()
		.map(|(i, node)| {
			let angle = (i as f64) * 2.0 * PI / n as f64;
			(
				node.id.clone(),
				(cx + radius * angle.cos(), cy + radius * angle.sin()),
			)
		})
		.collect()
}

fn grid(elements: &RenderElements, width: f64, height: f64) -> HashMap<String, (f64, f64)> {
	let n = elements.nodes.len();
	let cols = (n as f64).sqrt().ceil().max(1.0) as usize;
	let rows = n.div_ceil(cols);
	let cell_w = (width - 2.0 * MARGIN) / cols as f64;
	let cell_h = (height - 2.0 * MARGIN) / rows as f64;
	elements
		.nodes
		.iter()
		.enumerate()
		.map(|(i, node)| {
			let (col, row) = (i % cols, i / cols);
			(
				node.id.clone(),
				(
					MARGIN + (col as f64 + 0.5) * cell_w,
					MARGIN + (row as f64 + 0.5) * cell_h,
				),
			)
		})
		.collect()
}

enum Axis {
	/// Layers stack top-down.
	Vertical,
	/// Layers stack left-to-right.
	Horizontal,
}

/// BFS layering from in-degree-zero roots. Nodes unreached by any root
/// (cycles, disconnected remainder) are appended as one trailing layer so
/// every node gets a position.
fn layered(
	elements: &RenderElements,
	width: f64,
	height: f64,
	axis: Axis,
) -> HashMap<String, (f64, f64)> {
	let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
	let mut indegree: HashMap<&str, usize> = HashMap::new();
	for node in &elements.nodes {
		adjacency.entry(node.id.as_str()).or_default();
		indegree.entry(node.id.as_str()).or_insert(0);
	}
	for edge in &elements.edges {
		adjacency
			.entry(edge.source.as_str())
			.or_default()
			.push(edge.target.as_str());
		*indegree.entry(edge.target.as_str()).or_insert(0) += 1;
	}

	let mut depth: HashMap<&str, usize> = HashMap::new();
	let mut queue: VecDeque<&str> = elements
		.nodes
		.iter()
		.map(|n| n.id.as_str())
		.filter(|id| indegree[id] == 0)
		.collect();
	if queue.is_empty() {
		// Pure cycle; seed from the first node in input order.
		queue.push_back(elements.nodes[0].id.as_str());
	}
	for &root in &queue {
		depth.insert(root, 0);
	}
	while let Some(id) = queue.pop_front() {
		let d = depth[id];
		for &next in &adjacency[id] {
			if !depth.contains_key(next) {
				depth.insert(next, d + 1);
				queue.push_back(next);
			}
		}
	}

	let trailing = depth.values().copied().max().unwrap_or(0) + 1;
	let mut layers: Vec<Vec<&str>> = vec![Vec::new(); trailing + 1];
	for node in &elements.nodes {
		let d = depth.get(node.id.as_str()).copied().unwrap_or(trailing);
		layers[d].push(node.id.as_str());
	}
	layers.retain(|layer| !layer.is_empty());

	let mut out = HashMap::new();
	let layer_count = layers.len();
	for (li, layer) in layers.iter().enumerate() {
		let along = match layer_count {
			1 => 0.5,
			_ => li as f64 / (layer_count - 1) as f64,
		};
		for (ni, &id) in layer.iter().enumerate() {
			let across = (ni as f64 + 1.0) / (layer.len() as f64 + 1.0);
			let (x, y) = match axis {
				Axis::Vertical => (
					MARGIN + across * (width - 2.0 * MARGIN),
					MARGIN + along * (height - 2.0 * MARGIN),
				),
				Axis::Horizontal => (
					MARGIN + along * (width - 2.0 * MARGIN),
					MARGIN + across * (height - 2.0 * MARGIN),
				),
			};
			out.insert(id.to_string(), (x, y));
		}
	}
	out
}

/// Run the force engine for a bounded number of steps from a circular seed
/// and read the settled positions back once.
fn force_directed(
	elements: &RenderElements,
	width: f64,
	height: f64,
) -> HashMap<String, (f64, f64)> {
	let mut graph: ForceGraph<String, ()> = ForceGraph::new(SimulationParameters {
		force_charge: 150.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	});

	let seed = circular(elements, width, height);
	let mut id_to_idx = HashMap::new();
	for node in &elements.nodes {
		let (x, y) = seed[&node.id];
		let idx = graph.add_node(NodeData {
			x: x as f32,
			y: y as f32,
			mass: 10.0,
			is_anchor: false,
			user_data: node.id.clone(),
		});
		id_to_idx.insert(node.id.as_str(), idx);
	}
	for edge in &elements.edges {
		if let (Some(&src), Some(&tgt)) = (
			id_to_idx.get(edge.source.as_str()),
			id_to_idx.get(edge.target.as_str()),
		) {
			graph.add_edge(src, tgt, EdgeData::default());
		}
	}

	for _ in 0..FORCE_STEPS {
		graph.update(FORCE_DT);
	}

	let mut out = HashMap::new();
	graph.visit_nodes(|node| {
		let x = (node.x() as f64).clamp(MARGIN, width - MARGIN);
		let y = (node.y() as f64).clamp(MARGIN, height - MARGIN);
		out.insert(node.data.user_data.clone(), (x, y));
	});
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph::adapter::{RenderEdge, RenderNode, DEFAULT_EDGE_WIDTH};
	use crate::components::graph::lens::{ColorCategory, Lens};

	fn elements(node_ids: &[&str], edges: &[(&str, &str)]) -> RenderElements {
		RenderElements {
			lens: Lens::Reality,
			nodes: node_ids
				.iter()
				.map(|id| RenderNode {
					id: (*id).into(),
					label: (*id).into(),
					x: 0.0,
					y: 0.0,
					color: ColorCategory::Slate,
				})
				.collect(),
			edges: edges
				.iter()
				.enumerate()
				.map(|(i, (s, t))| RenderEdge {
					id: format!("edge-{i}"),
					source: (*s).into(),
					target: (*t).into(),
					width: DEFAULT_EDGE_WIDTH,
					dashed: false,
				})
				.collect(),
		}
	}

	#[test]
	fn every_mode_positions_every_node() {
		let els = elements(&["a", "b", "c", "d", "e"], &[("a", "b"), ("b", "c")]);
		for layout in DiagramLayout::ALL {
			let pos = compute_positions(layout, &els, 800.0, 600.0);
			assert_eq!(pos.len(), 5, "{layout:?}");
			for (x, y) in pos.values() {
				assert!(x.is_finite() && y.is_finite(), "{layout:?}");
				assert!((0.0..=800.0).contains(x), "{layout:?}");
				assert!((0.0..=600.0).contains(y), "{layout:?}");
			}
		}
	}

	#[test]
	fn empty_input_yields_empty_positions() {
		let els = elements(&[], &[]);
		for layout in DiagramLayout::ALL {
			assert!(compute_positions(layout, &els, 800.0, 600.0).is_empty());
		}
	}

	#[test]
	fn hierarchical_places_sources_above_targets() {
		let els = elements(&["root", "mid", "leaf"], &[("root", "mid"), ("mid", "leaf")]);
		let pos = compute_positions(DiagramLayout::Hierarchical, &els, 800.0, 600.0);
		assert!(pos["root"].1 < pos["mid"].1);
		assert!(pos["mid"].1 < pos["leaf"].1);
	}

	#[test]
	fn breadth_first_places_sources_left_of_targets() {
		let els = elements(&["root", "mid", "leaf"], &[("root", "mid"), ("mid", "leaf")]);
		let pos = compute_positions(DiagramLayout::BreadthFirst, &els, 800.0, 600.0);
		assert!(pos["root"].0 < pos["mid"].0);
		assert!(pos["mid"].0 < pos["leaf"].0);
	}

	#[test]
	fn cycle_still_gets_positions() {
		let els = elements(&["a", "b"], &[("a", "b"), ("b", "a")]);
		let pos = compute_positions(DiagramLayout::Hierarchical, &els, 800.0, 600.0);
		assert_eq!(pos.len(), 2);
	}

	#[test]
	fn grid_is_row_major() {
		let els = elements(&["a", "b", "c", "d"], &[]);
		let pos = compute_positions(DiagramLayout::Grid, &els, 800.0, 600.0);
		// 4 nodes -> 2x2 grid: a and b share a row, a and c share a column.
		assert_eq!(pos["a"].1, pos["b"].1);
		assert_eq!(pos["a"].0, pos["c"].0);
		assert!(pos["a"].0 < pos["b"].0);
		assert!(pos["a"].1 < pos["c"].1);
	}

	#[test]
	fn circular_spreads_nodes_distinctly() {
		let els = elements(&["a", "b", "c", "d"], &[]);
		let pos = compute_positions(DiagramLayout::Circular, &els, 800.0, 600.0);
		let points: Vec<_> = pos.values().collect();
		for i in 0..points.len() {
			for j in (i + 1)..points.len() {
				let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
				assert!((dx * dx + dy * dy).sqrt() > 50.0);
			}
		}
	}

	#[test]
	fn layout_parse_round_trips() {
		for layout in DiagramLayout::ALL {
			assert_eq!(DiagramLayout::parse(layout.as_str()), Some(layout));
		}
		assert_eq!(DiagramLayout::parse("orbital"), None);
	}
}
