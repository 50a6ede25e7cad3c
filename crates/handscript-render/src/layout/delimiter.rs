use super::{LayoutContext, LayoutEngine, LayoutResult, PositionedSymbol};
use handscript_core::geom::{LayoutBox, point};
use handscript_core::{DelimiterNode, SymbolMetrics};
use std::sync::Arc;

/// Room reserved for the left delimiter, in em.
const LEFT_GAP: f64 = 0.3;

/// Character recorded on the placeholder drawn for a delimiter name with no glyph.
const UNSUPPORTED_DELIMITER: char = '\u{FFFD}';

/// How a delimiter as written in the tree is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DelimiterGlyph {
    Char(char),
    /// A multi-character name with no known glyph.
    Unsupported,
}

/// Maps a delimiter as written in the tree to the glyph that draws it.
///
/// `\{` and `\}` become braces, named delimiters (`\langle`, `\lfloor`, ...) map to their
/// Unicode glyphs and any other single character is taken as is. An empty delimiter or `.`
/// (the "null" delimiter of `\left.`) draws nothing.
pub(crate) fn delimiter_glyph(raw: &str) -> Option<DelimiterGlyph> {
    let name = raw.trim();
    let name = name.strip_prefix('\\').unwrap_or(name);
    let ch = match name {
        "" | "." => return None,
        "lbrace" => '{',
        "rbrace" => '}',
        "lbrack" => '[',
        "rbrack" => ']',
        "lparen" => '(',
        "rparen" => ')',
        "vert" | "lvert" | "rvert" => '|',
        "Vert" | "lVert" | "rVert" => '‖',
        "langle" => '⟨',
        "rangle" => '⟩',
        "lfloor" => '⌊',
        "rfloor" => '⌋',
        "lceil" => '⌈',
        "rceil" => '⌉',
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => return Some(DelimiterGlyph::Unsupported),
            }
        }
    };
    Some(DelimiterGlyph::Char(ch))
}

impl LayoutEngine<'_> {
    pub(super) fn layout_delimiter(
        &self,
        node: &DelimiterNode,
        ctx: &LayoutContext,
    ) -> LayoutResult {
        let font_size = ctx.font_size;
        let x = ctx.current_x;
        let content = self.layout(&node.content, &ctx.with_x(x + font_size * LEFT_GAP));

        let height = if node.stretchy {
            content.bounds.height.max(font_size)
        } else {
            font_size
        };
        let top = content.bounds.y;
        let right_x = x + font_size * LEFT_GAP + content.bounds.width;
        let content_bounds = content.bounds;

        let mut out = LayoutResult::empty(ctx);
        if let Some(metrics) = self.delimiter_metrics(&node.left) {
            out.symbols
                .push(PositionedSymbol::new(metrics, point(x, top), height));
        }
        out.absorb(content);

        let mut right_width = 0.0;
        if let Some(metrics) = self.delimiter_metrics(&node.right) {
            let right = PositionedSymbol::new(metrics, point(right_x, top), height);
            right_width = right.width();
            out.symbols.push(right);
        }

        out.bounds = LayoutBox {
            x,
            y: content_bounds.y,
            width: right_x + right_width - x,
            height: content_bounds.height,
            baseline: content_bounds.baseline,
        };
        out
    }

    fn delimiter_metrics(&self, raw: &str) -> Option<Arc<SymbolMetrics>> {
        match delimiter_glyph(raw)? {
            DelimiterGlyph::Char(ch) => Some(self.glyph(ch)),
            DelimiterGlyph::Unsupported => {
                tracing::warn!(delimiter = raw, "unsupported delimiter; drawing placeholder");
                Some(Arc::new(SymbolMetrics::placeholder(UNSUPPORTED_DELIMITER)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DelimiterGlyph, delimiter_glyph};

    fn glyph(ch: char) -> Option<DelimiterGlyph> {
        Some(DelimiterGlyph::Char(ch))
    }

    #[test]
    fn delimiter_glyph_normalizes_escapes() {
        assert_eq!(delimiter_glyph("("), glyph('('));
        assert_eq!(delimiter_glyph("\\{"), glyph('{'));
        assert_eq!(delimiter_glyph("\\}"), glyph('}'));
        assert_eq!(delimiter_glyph("\\lbrace"), glyph('{'));
        assert_eq!(delimiter_glyph("\\vert"), glyph('|'));
        assert_eq!(delimiter_glyph("."), None);
        assert_eq!(delimiter_glyph(""), None);
    }

    #[test]
    fn named_delimiters_never_fall_back_to_their_first_letter() {
        assert_eq!(delimiter_glyph("\\langle"), glyph('⟨'));
        assert_eq!(delimiter_glyph("\\rangle"), glyph('⟩'));
        assert_eq!(delimiter_glyph("\\lfloor"), glyph('⌊'));
        assert_eq!(delimiter_glyph("\\rceil"), glyph('⌉'));
        assert_eq!(delimiter_glyph("\\Vert"), glyph('‖'));
        assert_eq!(
            delimiter_glyph("\\backslash"),
            Some(DelimiterGlyph::Unsupported)
        );
        assert_eq!(delimiter_glyph("ab"), Some(DelimiterGlyph::Unsupported));
    }
}
