/// Configuration for rendering and data loading.
///
/// Plain structs with `Default` values matching the browser front end.

// ─── RenderConfig ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Drawing-area width in pixels.
    pub width: f64,
    /// Drawing-area height in pixels.
    pub height: f64,
    /// Radius of every node circle.
    pub node_radius: f64,
    /// Vertical distance from a node center to its label baseline.
    pub label_offset: f64,
    /// Vertical distance from a node center up to its tooltip anchor.
    pub tooltip_offset: f64,
    /// Pixels per character column in the text preview.
    pub cell_width: f64,
    /// Pixels per character row in the text preview.
    pub cell_height: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            node_radius: 20.0,
            label_offset: 35.0,
            tooltip_offset: 40.0,
            cell_width: 10.0,
            cell_height: 20.0,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

// ─── SourcePaths ─────────────────────────────────────────────────────────────

/// Where the catalog inputs live, relative to the data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub fragments: String,
    pub network: String,
    pub reconstructions: String,
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self {
            fragments: "fragments/pipeline_batch.yml".to_string(),
            network: "networks/citation_network.json".to_string(),
            reconstructions: "reconstructions".to_string(),
        }
    }
}
