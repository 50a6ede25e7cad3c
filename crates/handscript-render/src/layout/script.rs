use super::{LayoutContext, LayoutEngine, LayoutResult};
use handscript_core::geom::LayoutBox;
use handscript_core::{ScriptKind, ScriptNode};

const SCRIPT_SCALE: f64 = 0.6;
const SUPERSCRIPT_RAISE: f64 = 0.6;
const SUBSCRIPT_DROP: f64 = 0.2;

impl LayoutEngine<'_> {
    pub(super) fn layout_script(
        &self,
        kind: ScriptKind,
        node: &ScriptNode,
        ctx: &LayoutContext,
    ) -> LayoutResult {
        let font_size = ctx.font_size;
        let base = self.layout(&node.base, ctx);

        let script_x = base.bounds.right();
        let script_baseline = match kind {
            ScriptKind::Superscript => ctx.baseline_y - font_size * SUPERSCRIPT_RAISE,
            ScriptKind::Subscript => ctx.baseline_y + font_size * SUBSCRIPT_DROP,
        };
        let script = self.layout(
            &node.script,
            &ctx.with_font_size(font_size * SCRIPT_SCALE)
                .with_x(script_x)
                .with_baseline(script_baseline),
        );

        let min_y = base.bounds.y.min(script.bounds.y);
        let max_y = base.bounds.bottom().max(script.bounds.bottom());
        let width = script_x + script.bounds.width - ctx.current_x;

        let mut out = LayoutResult::empty(ctx);
        out.absorb(base);
        out.absorb(script);
        out.bounds = LayoutBox {
            x: ctx.current_x,
            y: min_y,
            width,
            height: max_y - min_y,
            baseline: ctx.baseline_y - min_y,
        };
        out
    }
}
