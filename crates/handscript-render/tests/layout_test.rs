use handscript_core::{BuiltinGlyphs, ExpressionNode, SymbolMetricsProvider, point};
use handscript_render::{LayoutContext, LayoutEngine, LayoutResult};
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn load_fixture(name: &str) -> ExpressionNode {
    let path = workspace_root()
        .join("fixtures")
        .join("expressions")
        .join(name);
    let text = std::fs::read_to_string(&path).expect("fixture");
    ExpressionNode::from_json(&text).expect("tree parses")
}

fn layout_fixture(name: &str, glyphs: &BuiltinGlyphs) -> LayoutResult {
    let tree = load_fixture(name);
    let ctx = LayoutContext::at(point(100.0, 100.0), 40.0, 0.1);
    LayoutEngine::new(glyphs).layout(&tree, &ctx)
}

fn assert_well_formed(out: &LayoutResult, glyphs: &BuiltinGlyphs) {
    for sym in &out.symbols {
        assert!(glyphs.contains(sym.ch()), "no builtin glyph for {:?}", sym.ch());
        assert!(sym.origin.x.is_finite() && sym.origin.y.is_finite());
        assert!(sym.height > 0.0);
    }
    for deco in &out.decorations {
        assert!(deco.points.len() >= 2);
        assert!(deco.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
    let b = out.bounds;
    assert!(b.width > 0.0 && b.height > 0.0);
    assert!(b.baseline >= 0.0 && b.baseline <= b.height);
}

#[test]
fn quadratic_formula_layout() {
    let glyphs = BuiltinGlyphs::default();
    assert_eq!(load_fixture("quadratic.json").plain_text(), "x=-b±√b2−4ac/2a");

    let out = layout_fixture("quadratic.json", &glyphs);
    assert_well_formed(&out, &glyphs);

    let chars: String = out.symbols.iter().map(|s| s.ch()).collect();
    assert_eq!(chars, "x=-b±b2−4ac2a");
    // Radical first (absorbed with the numerator), then the fraction bar.
    assert_eq!(out.decorations.len(), 2);
    assert_eq!(out.decorations[0].points.len(), 5);
    assert_eq!(out.decorations[1].points.len(), 2);

    // The group's baseline matches the context baseline.
    assert!((out.bounds.baseline_y() - 128.0).abs() < 1e-9);
}

#[test]
fn definite_integral_layout() {
    let glyphs = BuiltinGlyphs::default();
    let out = layout_fixture("integral.json", &glyphs);
    assert_well_formed(&out, &glyphs);

    let chars: String = out.symbols.iter().map(|s| s.ch()).collect();
    assert_eq!(chars, "∫01x2dx=13");
    assert_eq!(out.decorations.len(), 1);

    let integral = &out.symbols[0];
    assert!((integral.height - 112.0).abs() < 1e-9);
    // The operator dominates the vertical extent of the whole expression.
    assert!(out.bounds.y <= integral.origin.y);
    assert!(out.bounds.bottom() >= integral.origin.y + integral.height - 1e-9);
}

#[test]
fn unknown_nodes_do_not_stop_the_rest() {
    let glyphs = BuiltinGlyphs::default();
    let out = layout_fixture("nested.json", &glyphs);
    assert_well_formed(&out, &glyphs);

    let chars: String = out.symbols.iter().map(|s| s.ch()).collect();
    assert_eq!(chars, "{x+∑i=1n}yk");
    // Only the hat accent draws a decoration.
    assert_eq!(out.decorations.len(), 1);
    assert_eq!(out.decorations[0].points.len(), 3);

    // Glyphs flow left to right across the unknown matrix.
    let right_brace = out.symbols.iter().position(|s| s.ch() == '}').unwrap();
    let brace = &out.symbols[right_brace];
    let y = &out.symbols[right_brace + 1];
    assert_eq!(y.ch(), 'y');
    assert!(y.origin.x >= brace.origin.x + brace.width() - 1e-9);
}
