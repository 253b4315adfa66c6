//! SVG surface — serializes draw commands to a standalone SVG document.

use super::{DrawCommand, Surface};
use crate::config::RenderConfig;

// ── Constants ────────────────────────────────────────────────────────────────

const BACKGROUND: &str = "#f8f9fa";
const EDGE_STROKE: &str = r##"stroke="#999" stroke-width="2""##;
const NODE_STROKE: &str = r##"stroke="#fff" stroke-width="3""##;
const LABEL_STYLE: &str = r##"text-anchor="middle" font-size="12" fill="#333""##;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Format a coordinate with at most two decimals and no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

// ── Surface ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct SvgSurface {
    width: f64,
    height: f64,
}

impl SvgSurface {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
        }
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl Surface for SvgSurface {
    fn draw(&self, commands: &[DrawCommand]) -> String {
        let (w, h) = (num(self.width), num(self.height));
        let mut parts = vec![format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        )];
        parts.push(format!(
            r#"<rect width="{w}" height="{h}" fill="{BACKGROUND}"/>"#
        ));

        for cmd in commands {
            parts.push(match cmd {
                DrawCommand::Line { x1, y1, x2, y2 } => format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {EDGE_STROKE}/>"#,
                    num(*x1),
                    num(*y1),
                    num(*x2),
                    num(*y2)
                ),
                DrawCommand::Circle { x, y, radius, fill } => format!(
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}" {NODE_STROKE}/>"#,
                    num(*x),
                    num(*y),
                    num(*radius),
                    fill.hex()
                ),
                DrawCommand::Label { x, y, text } => format!(
                    r#"<text x="{}" y="{}" {LABEL_STYLE}>{}</text>"#,
                    num(*x),
                    num(*y),
                    escape(text)
                ),
            });
        }

        parts.push("</svg>".to_string());
        parts.join("\n")
    }
}
