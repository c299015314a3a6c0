//! Mock dataset loading. Stands in for the query layer: one embedded JSON
//! document fetched once and held as render input.

use crate::components::graph::Dataset;

const SAMPLE: &str = include_str!("../assets/sample_graph.json");

/// Parse a dataset document.
pub fn parse_dataset(raw: &str) -> Result<Dataset, serde_json::Error> {
	serde_json::from_str(raw)
}

/// The embedded sample knowledge graph. A malformed document degrades to an
/// empty dataset rather than failing the app.
pub fn load_sample() -> Dataset {
	match parse_dataset(SAMPLE) {
		Ok(dataset) => dataset,
		Err(err) => {
			log::error!("sample dataset failed to parse: {err}");
			Dataset::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph::{compute_visible_elements, Lens};

	#[test]
	fn sample_document_parses() {
		let dataset = parse_dataset(SAMPLE).unwrap();
		assert_eq!(dataset.nodes.len(), 11);
		assert!(!dataset.edges.is_empty());
		assert!(!dataset.legend.is_empty());
		assert_eq!(dataset.lenses.len(), 3);
		assert!(dataset.integrity_score <= 100);
		assert!(!dataset.drift_summary.is_empty());
	}

	#[test]
	fn sample_adapts_under_every_lens() {
		let dataset = load_sample();
		for lens in Lens::ALL {
			let out = compute_visible_elements(&dataset.nodes, &dataset.edges, lens);
			assert_eq!(out.nodes.len(), dataset.nodes.len());
			// The always-on audit-log edge references an unmodeled node and
			// must be dropped under every lens.
			assert!(out.edges.iter().all(|e| e.target != "audit-log"));
			assert!(!out.edges.is_empty());
		}
	}

	#[test]
	fn drift_lens_shows_only_drift_tagged_scoped_edges() {
		let dataset = load_sample();
		let out = compute_visible_elements(&dataset.nodes, &dataset.edges, Lens::Drift);
		let ids: Vec<&str> = out.edges.iter().map(|e| e.id.as_str()).collect();
		assert!(ids.contains(&"order-bus-intent"));
		assert!(ids.contains(&"billing-ledger-reality"));
		// Reality-only edges disappear under drift.
		assert!(!out
			.edges
			.iter()
			.any(|e| e.source == "catalog-service" && e.target == "search-index"));
		// Always edges survive.
		assert!(ids.contains(&"gw-auth"));
	}

	#[test]
	fn malformed_document_degrades_to_empty() {
		assert!(parse_dataset("{ not json").is_err());
	}
}
