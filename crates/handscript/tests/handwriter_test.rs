use handscript::render::DrawingInstruction;
use handscript::{
    BuiltinGlyphs, ExpressionNode, Handwriter, HandwriterConfig, HandwriterError,
    LargeOperatorKind, PlaceholderProvider, create_handwritten_equation,
};
use std::sync::Arc;

fn quadratic() -> ExpressionNode {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures/expressions/quadratic.json");
    let text = std::fs::read_to_string(path).expect("fixture");
    ExpressionNode::from_json(&text).expect("tree")
}

fn exact_config() -> HandwriterConfig {
    HandwriterConfig {
        jitter: 0.0,
        ..HandwriterConfig::default()
    }
}

#[test]
fn default_pipeline_produces_a_sequential_plan() {
    let plan = Handwriter::default().create_drawing_plan(&quadratic()).unwrap();
    assert!(plan.stroke_count() > 13);
    assert!(plan.total_duration_ms > 0.0);

    let mut clock = 0.0;
    for instruction in &plan.instructions {
        assert!((instruction.start_ms() - clock).abs() < 1e-9);
        clock = instruction.end_ms();
    }
    // Every stroke is followed by the 30 ms default pause.
    let pauses = plan
        .instructions
        .iter()
        .filter(|i| {
            matches!(i, DrawingInstruction::Pause { duration_ms, .. } if *duration_ms == 30.0)
        })
        .count();
    assert_eq!(pauses, plan.stroke_count());
}

#[test]
fn layout_starts_at_the_configured_position() {
    let writer = Handwriter::new(exact_config()).unwrap();
    let layout = writer.layout(&ExpressionNode::text("x"));
    assert_eq!(layout.bounds.x, 100.0);
    // Baseline is 0.7 em below the pen; a text box reaches one em above it.
    assert!((layout.bounds.y - (128.0 - 40.0)).abs() < 1e-9);

    let x = &layout.symbols[0];
    assert_eq!(x.origin.x, 100.0);
    assert!((x.origin.y - (128.0 - 40.0 * x.metrics.baseline)).abs() < 1e-9);
}

#[test]
fn zero_jitter_plans_are_identical() {
    let writer = Handwriter::new(exact_config()).unwrap();
    let tree = quadratic();
    assert_eq!(
        writer.create_drawing_plan(&tree).unwrap(),
        writer.create_drawing_plan(&tree).unwrap()
    );
}

#[test]
fn seeded_plans_are_identical() {
    let config = HandwriterConfig {
        seed: Some(99),
        ..HandwriterConfig::default()
    };
    let tree = ExpressionNode::large_operator(
        LargeOperatorKind::Product,
        Some(ExpressionNode::text("k=1")),
        Some(ExpressionNode::text("n")),
    );
    let a = create_handwritten_equation(&tree, config.clone()).unwrap();
    let b = create_handwritten_equation(&tree, config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn resampled_points_are_evenly_spaced() {
    let writer = Handwriter::new(exact_config()).unwrap();
    let layout = writer.layout(&ExpressionNode::fraction(
        ExpressionNode::text("1"),
        ExpressionNode::text("2"),
    ));
    let strokes = writer.strokes(&layout);
    let bar = strokes.last().unwrap();
    assert!(bar.starts_glyph);
    for pair in bar.points[..bar.points.len() - 1].windows(2) {
        assert!((pair[0].distance_to(pair[1]) - 5.0).abs() < 1e-6);
    }
}

#[test]
fn update_config_keeps_the_old_value_on_error() {
    let mut writer = Handwriter::default();
    let err = writer.update_config(|c| c.speed = -1.0).unwrap_err();
    assert!(matches!(err, HandwriterError::Render(_)));
    assert_eq!(writer.config().speed, 300.0);

    writer.update_config(|c| c.font_size = 80.0).unwrap();
    assert_eq!(writer.config().font_size, 80.0);
}

#[test]
fn custom_glyph_provider_is_used() {
    let writer = Handwriter::new(exact_config())
        .unwrap()
        .with_glyphs(Arc::new(PlaceholderProvider));
    let layout = writer.layout(&ExpressionNode::text("1"));
    assert_eq!(layout.symbols[0].metrics.strokes.len(), 3);

    let builtin = Handwriter::new(exact_config())
        .unwrap()
        .with_glyphs(Arc::new(BuiltinGlyphs::default()));
    let layout = builtin.layout(&ExpressionNode::text("1"));
    assert_ne!(layout.symbols[0].metrics.strokes.len(), 3);
}

#[test]
fn plan_from_json_reports_parse_errors() {
    let writer = Handwriter::default();
    assert!(matches!(
        writer.plan_from_json("[1, 2"),
        Err(HandwriterError::Core(_))
    ));
    let plan = writer
        .plan_from_json(r#"{ "type": "text", "value": "a" }"#)
        .unwrap();
    assert!(plan.stroke_count() >= 1);
    assert_eq!(plan.bounds.x, 100.0);
}
