use super::{LayoutContext, LayoutEngine, LayoutResult, PositionedSymbol};
use handscript_core::geom::{LayoutBox, point};

/// Pen advance for a literal space, in em.
const SPACE_ADVANCE: f64 = 0.3;
/// Box baseline for a run of text, in em. Calibrated for Latin glyph proportions.
const TEXT_BASELINE: f64 = 0.85;

impl LayoutEngine<'_> {
    pub(super) fn layout_text(&self, value: &str, ctx: &LayoutContext) -> LayoutResult {
        let font_size = ctx.font_size;
        let mut out = LayoutResult::empty(ctx);
        let mut x = ctx.current_x;

        for ch in value.chars() {
            if ch == ' ' {
                x += font_size * SPACE_ADVANCE;
                continue;
            }

            let metrics = self.glyph(ch);
            let height = font_size;
            let width = height * metrics.aspect_ratio;
            let y = ctx.baseline_y - height * metrics.baseline;
            let advance = width * metrics.advance + font_size * ctx.spacing;

            out.symbols
                .push(PositionedSymbol::new(metrics, point(x, y), height));
            x += advance;
        }

        out.bounds = LayoutBox {
            x: ctx.current_x,
            y: ctx.baseline_y - font_size,
            width: x - ctx.current_x,
            height: font_size,
            baseline: font_size * TEXT_BASELINE,
        };
        out
    }
}
