use super::{DecorationStroke, LayoutContext, LayoutEngine, LayoutResult};
use handscript_core::SqrtNode;
use handscript_core::geom::{LayoutBox, point};

const RADICAL_WIDTH: f64 = 0.5;
const CONTENT_SCALE: f64 = 0.9;
const PADDING: f64 = 0.15;
const TOP_FROM_BASELINE: f64 = 0.85;
const INDEX_SCALE: f64 = 0.5;
/// Index baseline, as a fraction of the radical height below its top.
const INDEX_BASELINE: f64 = 0.45;

impl LayoutEngine<'_> {
    pub(super) fn layout_sqrt(&self, node: &SqrtNode, ctx: &LayoutContext) -> LayoutResult {
        let font_size = ctx.font_size;
        let radical_width = font_size * RADICAL_WIDTH;
        let x = ctx.current_x;

        let content = self.layout(
            &node.content,
            &ctx.with_font_size(font_size * CONTENT_SCALE)
                .with_x(x + radical_width),
        );

        let padding = font_size * PADDING;
        let height = content.bounds.height + padding * 2.0;
        let y1 = ctx.baseline_y - font_size * TOP_FROM_BASELINE;
        let y2 = y1 + height;
        let content_width = content.bounds.width;

        let mut out = LayoutResult::empty(ctx);
        out.absorb(content);
        out.decorations.push(DecorationStroke::new(vec![
            point(x, y1 + height * 0.5),
            point(x + radical_width * 0.3, y1 + height * 0.7),
            point(x + radical_width * 0.5, y2),
            point(x + radical_width * 0.7, y1),
            point(x + radical_width + content_width + padding, y1),
        ]));

        let mut bounds = LayoutBox {
            x,
            y: y1,
            width: radical_width + content_width + padding,
            height,
            baseline: ctx.baseline_y - y1,
        };

        if let Some(index) = &node.index {
            let index = self.layout(
                index,
                &ctx.with_font_size(font_size * INDEX_SCALE)
                    .with_baseline(y1 + height * INDEX_BASELINE),
            );
            let top = bounds.y.min(index.bounds.y);
            let bottom = bounds.bottom().max(index.bounds.bottom());
            bounds.width = bounds.width.max(index.bounds.right() - x);
            bounds.y = top;
            bounds.height = bottom - top;
            bounds.baseline = ctx.baseline_y - top;
            out.absorb(index);
        }

        out.bounds = bounds;
        out
    }
}
