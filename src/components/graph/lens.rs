//! Lens and color enumerations plus per-lens display metadata.
//!
//! Lenses are a closed set so an invalid lens value is a compile-time
//! concern rather than a runtime lookup miss.

use serde::{Deserialize, Serialize};

/// A named viewing mode. Exactly one lens is active at a time; the active
/// lens selects edge visibility and the node color mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lens {
	/// What the codebase actually does.
	Reality,
	/// What the architecture says it should do.
	Intent,
	/// Precomputed divergence between reality and intent.
	Drift,
}

impl Lens {
	/// All lenses, in display order.
	pub const ALL: [Lens; 3] = [Lens::Reality, Lens::Intent, Lens::Drift];

	/// Stable lowercase identifier, matching the wire form.
	pub fn as_str(self) -> &'static str {
		match self {
			Lens::Reality => "reality",
			Lens::Intent => "intent",
			Lens::Drift => "drift",
		}
	}

	/// Human-readable label.
	pub fn label(self) -> &'static str {
		match self {
			Lens::Reality => "Reality",
			Lens::Intent => "Intent",
			Lens::Drift => "Drift",
		}
	}

	/// Parse the lowercase identifier form.
	pub fn parse(s: &str) -> Option<Lens> {
		match s.trim().to_ascii_lowercase().as_str() {
			"reality" => Some(Lens::Reality),
			"intent" => Some(Lens::Intent),
			"drift" => Some(Lens::Drift),
			_ => None,
		}
	}

	/// Accent color used for edges and chrome while this lens is active.
	pub fn accent(self) -> &'static str {
		match self {
			Lens::Reality => "#38bdf8",
			Lens::Intent => "#a78bfa",
			Lens::Drift => "#fb7185",
		}
	}

	/// Accent color as rgb components, for alpha-composited canvas strokes.
	pub fn accent_rgb(self) -> (u8, u8, u8) {
		match self {
			Lens::Reality => (56, 189, 248),
			Lens::Intent => (167, 139, 250),
			Lens::Drift => (251, 113, 133),
		}
	}
}

impl Default for Lens {
	fn default() -> Self {
		Lens::Reality
	}
}

/// Display color category for a node under some lens. `Slate` is the
/// neutral fallback when a node carries no mapping for the active lens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
	Emerald,
	Sky,
	Amber,
	Rose,
	Violet,
	Slate,
}

impl ColorCategory {
	/// Fill color for nodes and legend swatches.
	pub fn hex(self) -> &'static str {
		match self {
			ColorCategory::Emerald => "#34d399",
			ColorCategory::Sky => "#38bdf8",
			ColorCategory::Amber => "#fbbf24",
			ColorCategory::Rose => "#fb7185",
			ColorCategory::Violet => "#a78bfa",
			ColorCategory::Slate => "#94a3b8",
		}
	}
}

impl Default for ColorCategory {
	fn default() -> Self {
		ColorCategory::Slate
	}
}

/// One named metric shown in the lens panel, precomputed upstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LensMetric {
	pub name: String,
	pub value: String,
}

/// Per-lens display metadata, supplied as mock data and shown as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LensInfo {
	pub label: String,
	pub accent: String,
	#[serde(default)]
	pub metrics: Vec<LensMetric>,
	#[serde(default)]
	pub violation: Option<String>,
}
