use crate::{HandwriterConfig, HandwriterResult};
use handscript_core::{BuiltinGlyphs, ExpressionNode, Stroke, SymbolMetricsProvider};
use handscript_render::{
    DrawingPlan, LayoutContext, LayoutEngine, LayoutResult, create_drawing_plan,
    generate_strokes, jitter_rng, resample, smooth,
};
use std::sync::Arc;

/// End-to-end pipeline: layout, strokes, smoothing, resampling and timing.
///
/// A handwriter is cheap to clone; the glyph provider is shared.
#[derive(Clone)]
pub struct Handwriter {
    config: HandwriterConfig,
    glyphs: Arc<dyn SymbolMetricsProvider + Send + Sync>,
}

impl std::fmt::Debug for Handwriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handwriter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Handwriter {
    fn default() -> Self {
        Self {
            config: HandwriterConfig::default(),
            glyphs: Arc::new(BuiltinGlyphs::default()),
        }
    }
}

impl Handwriter {
    pub fn new(config: HandwriterConfig) -> HandwriterResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Replaces the glyph provider (the built-in set by default).
    pub fn with_glyphs(mut self, glyphs: Arc<dyn SymbolMetricsProvider + Send + Sync>) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn config(&self) -> &HandwriterConfig {
        &self.config
    }

    /// Applies `edit` to a copy of the config and keeps it only if it validates.
    pub fn update_config(
        &mut self,
        edit: impl FnOnce(&mut HandwriterConfig),
    ) -> HandwriterResult<()> {
        let mut next = self.config.clone();
        edit(&mut next);
        next.validate()?;
        self.config = next;
        Ok(())
    }

    pub fn layout_context(&self) -> LayoutContext {
        LayoutContext::at(
            self.config.position,
            self.config.font_size,
            self.config.spacing,
        )
    }

    pub fn layout(&self, node: &ExpressionNode) -> LayoutResult {
        let provider: &dyn SymbolMetricsProvider = self.glyphs.as_ref();
        LayoutEngine::new(provider).layout(node, &self.layout_context())
    }

    /// Final strokes for an already laid out expression: jittered, smoothed and resampled.
    pub fn strokes(&self, layout: &LayoutResult) -> Vec<Stroke> {
        let mut rng = jitter_rng(self.config.seed);
        generate_strokes(
            &layout.symbols,
            &layout.decorations,
            self.config.jitter,
            &mut rng,
        )
        .iter()
        .map(|stroke| {
            let smoothed = smooth(stroke, self.config.smoothing_tension);
            if self.config.resample_spacing > 0.0 {
                resample(&smoothed, self.config.resample_spacing)
            } else {
                smoothed
            }
        })
        .collect()
    }

    pub fn create_drawing_plan(&self, node: &ExpressionNode) -> HandwriterResult<DrawingPlan> {
        let layout = self.layout(node);
        tracing::debug!(
            expression = %node.plain_text(),
            symbols = layout.symbols.len(),
            decorations = layout.decorations.len(),
            "laid out expression"
        );
        let strokes = self.strokes(&layout);
        let plan = create_drawing_plan(strokes, layout.bounds, &self.config.animation())?;
        Ok(plan)
    }

    /// Same as [`Handwriter::create_drawing_plan`] for a tree in its JSON form.
    pub fn plan_from_json(&self, text: &str) -> HandwriterResult<DrawingPlan> {
        let node = ExpressionNode::from_json(text)?;
        self.create_drawing_plan(&node)
    }
}

/// One-shot helper with the built-in glyphs.
pub fn create_handwritten_equation(
    node: &ExpressionNode,
    config: HandwriterConfig,
) -> HandwriterResult<DrawingPlan> {
    Handwriter::new(config)?.create_drawing_plan(node)
}
