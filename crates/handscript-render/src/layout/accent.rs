use super::{DecorationStroke, LayoutContext, LayoutEngine, LayoutResult};
use handscript_core::AccentNode;
use handscript_core::geom::{LayoutBox, point};

const ACCENT_RAISE: f64 = 0.2;
const CARET_HALF_WIDTH: f64 = 0.15;
const CARET_HEIGHT: f64 = 0.1;
const BAR_HALF_WIDTH: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AccentMark {
    Caret,
    Bar,
}

impl AccentMark {
    pub(crate) fn from_kind(kind: &str) -> Option<Self> {
        match kind.trim() {
            "\\hat" | "\\widehat" | "hat" | "ˆ" | "^" => Some(Self::Caret),
            "\\bar" | "\\overline" | "bar" | "¯" => Some(Self::Bar),
            _ => None,
        }
    }
}

impl LayoutEngine<'_> {
    pub(super) fn layout_accent(&self, node: &AccentNode, ctx: &LayoutContext) -> LayoutResult {
        let font_size = ctx.font_size;
        let base = self.layout(&node.base, ctx);
        let base_bounds = base.bounds;

        let ay = base_bounds.y - font_size * ACCENT_RAISE;
        let cx = ctx.current_x + base_bounds.width / 2.0;

        let mut out = LayoutResult::empty(ctx);
        out.absorb(base);
        match AccentMark::from_kind(&node.accent) {
            Some(AccentMark::Caret) => {
                let dx = font_size * CARET_HALF_WIDTH;
                let dy = font_size * CARET_HEIGHT;
                out.decorations.push(DecorationStroke::new(vec![
                    point(cx - dx, ay + dy),
                    point(cx, ay),
                    point(cx + dx, ay + dy),
                ]));
            }
            Some(AccentMark::Bar) => {
                let dx = font_size * BAR_HALF_WIDTH;
                out.decorations.push(DecorationStroke::new(vec![
                    point(cx - dx, ay),
                    point(cx + dx, ay),
                ]));
            }
            None => {
                tracing::debug!(accent = %node.accent, "unsupported accent kind; drawing base only");
            }
        }

        out.bounds = LayoutBox {
            x: base_bounds.x,
            y: ay,
            width: base_bounds.width,
            height: base_bounds.bottom() - ay,
            baseline: base_bounds.baseline + (base_bounds.y - ay),
        };
        out
    }
}
