use super::{DecorationStroke, LayoutContext, LayoutEngine, LayoutResult};
use handscript_core::FractionNode;
use handscript_core::geom::{LayoutBox, point};

const PART_SCALE: f64 = 0.65;
const NUMERATOR_RAISE: f64 = 0.7;
const DENOMINATOR_DROP: f64 = 0.5;
const BAR_RAISE: f64 = 0.05;
const BAR_PADDING: f64 = 0.15;
const BOX_TOP: f64 = 0.8;
const BOX_HEIGHT: f64 = 1.4;
const BOX_BASELINE: f64 = 0.55;

impl LayoutEngine<'_> {
    pub(super) fn layout_fraction(&self, node: &FractionNode, ctx: &LayoutContext) -> LayoutResult {
        let font_size = ctx.font_size;
        let part_ctx = ctx.with_font_size(font_size * PART_SCALE);

        let numerator = self.layout(
            &node.numerator,
            &part_ctx.with_baseline(ctx.baseline_y - font_size * NUMERATOR_RAISE),
        );
        let denominator = self.layout(
            &node.denominator,
            &part_ctx.with_baseline(ctx.baseline_y + font_size * DENOMINATOR_DROP),
        );

        // Equal widths give a zero offset for both parts.
        let max_width = numerator.bounds.width.max(denominator.bounds.width);
        let num_dx = (max_width - numerator.bounds.width) / 2.0;
        let den_dx = (max_width - denominator.bounds.width) / 2.0;
        let numerator = numerator.shifted_x(num_dx);
        let denominator = denominator.shifted_x(den_dx);

        let mut out = LayoutResult::empty(ctx);
        out.absorb(numerator);
        out.absorb(denominator);

        let bar_y = ctx.baseline_y - font_size * BAR_RAISE;
        let padding = font_size * BAR_PADDING;
        out.decorations.push(DecorationStroke::new(vec![
            point(ctx.current_x - padding, bar_y),
            point(ctx.current_x + max_width + padding, bar_y),
        ]));

        let height = font_size * BOX_HEIGHT;
        out.bounds = LayoutBox {
            x: ctx.current_x,
            y: ctx.baseline_y - font_size * BOX_TOP,
            width: max_width + padding * 2.0,
            height,
            baseline: height * BOX_BASELINE,
        };
        out
    }
}
