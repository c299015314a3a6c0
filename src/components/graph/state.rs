//! Engine state owned by the canvas backend: the force simulation, view
//! transform, and pointer interaction bookkeeping. Rebuilt wholesale
//! whenever the element set changes.

use std::collections::{HashMap, HashSet};

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::adapter::RenderElements;
use super::lens::{ColorCategory, Lens};
use super::view::{Bounds, ViewCommand, ViewTransform};

/// Node draw radius in graph space.
pub const NODE_RADIUS: f64 = 6.0;
/// Pointer hit radius in graph space.
pub const HIT_RADIUS: f64 = 12.0;
/// Pointer travel below this is a click rather than a drag.
pub const CLICK_THRESHOLD: f64 = 4.0;

/// Per-node payload carried inside the simulation.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub id: String,
	pub label: String,
	pub color: ColorCategory,
}

/// Styled edge between two simulation nodes. Kept as a parallel list so
/// width and dash survive alongside the engine's own edge set.
#[derive(Clone, Copy, Debug)]
pub struct EdgeStyle {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub width: f64,
	pub dashed: bool,
}

/// Active node drag.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
	/// Greatest pointer travel since mousedown, for click detection.
	pub travel: f64,
}

/// Active background pan.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Hovered node and its one-hop neighborhood.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
}

/// The canvas backend's engine state.
pub struct CanvasState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub lens: Lens,
	pub animation_running: bool,
	edges: Vec<EdgeStyle>,
}

impl CanvasState {
	/// Build the simulation from an adapter element set, seeded at the
	/// nodes' data positions and fitted into the viewport.
	pub fn new(elements: &RenderElements, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();

		for node in &elements.nodes {
			let idx = graph.add_node(NodeData {
				x: node.x as f32,
				y: node.y as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					color: node.color,
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		// Adapter output already resolved endpoints; the lookups here can
		// only miss on an internally inconsistent element set.
		for edge in &elements.edges {
			if let (Some(&src), Some(&tgt)) = (
				id_to_idx.get(edge.source.as_str()),
				id_to_idx.get(edge.target.as_str()),
			) {
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push(EdgeStyle {
					source: src,
					target: tgt,
					width: edge.width,
					dashed: edge.dashed,
				});
			}
		}

		let transform = match Bounds::of_nodes(&elements.nodes) {
			Some(b) => ViewTransform::fit(b, width, height),
			None => ViewTransform::default(),
		};

		Self {
			graph,
			edges,
			transform,
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			lens: elements.lens,
			animation_running: true,
		}
	}

	/// Styled edges in input order.
	pub fn edges(&self) -> &[EdgeStyle] {
		&self.edges
	}

	/// Snapshot of simulation positions keyed by engine index.
	pub fn positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut out = HashMap::new();
		self.graph.visit_nodes(|node| {
			out.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		out
	}

	/// Topmost node under a screen point, if any.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.transform.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in graph space, scaling with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	/// Domain id of an engine node.
	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.id.clone());
			}
		});
		found
	}

	/// Update the hovered node; returns true when the hover target changed.
	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) -> bool {
		if self.hover.node == node {
			return false;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();
		if let Some(idx) = node {
			for edge in &self.edges {
				if edge.source == idx {
					self.hover.neighbors.insert(edge.target);
				} else if edge.target == idx {
					self.hover.neighbors.insert(edge.source);
				}
			}
		}
		true
	}

	/// Whether a node belongs to the hover highlight set.
	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	/// Whether any highlight is active.
	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some()
	}

	/// Advance the simulation one frame.
	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}

	/// Apply a toolbar view command.
	pub fn apply(&mut self, command: ViewCommand) {
		let bounds = Bounds::of(self.positions().into_values());
		self.transform.apply(command, bounds, self.width, self.height);
	}
}
