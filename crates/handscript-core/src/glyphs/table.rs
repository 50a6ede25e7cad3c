//! Handwritten outlines for the built-in glyph set.
//!
//! Coordinates are normalized to a unit box with (0, 0) at the top-left. Points outside
//! 0..1 are allowed for descenders.

pub(super) struct GlyphDef {
    pub ch: char,
    pub baseline: f64,
    pub aspect_ratio: f64,
    pub advance: f64,
    pub strokes: &'static [&'static [(f64, f64)]],
}

pub(super) const GLYPHS: &[GlyphDef] = &[
    GlyphDef {
        ch: '0',
        baseline: 0.85,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.7, 0.15), (0.5, 0.05), (0.3, 0.15), (0.15, 0.35), (0.1, 0.5), (0.15, 0.65), (0.3, 0.85), (0.5, 0.95), (0.7, 0.85), (0.85, 0.65), (0.9, 0.5), (0.85, 0.35), (0.7, 0.15)],
        ],
    },
    GlyphDef {
        ch: '1',
        baseline: 0.85,
        aspect_ratio: 0.5,
        advance: 0.55,
        strokes: &[
            &[(0.3, 0.2), (0.5, 0.05)],
            &[(0.5, 0.05), (0.5, 0.95)],
        ],
    },
    GlyphDef {
        ch: '2',
        baseline: 0.85,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.2, 0.25), (0.3, 0.1), (0.5, 0.05), (0.7, 0.1), (0.8, 0.25), (0.75, 0.4), (0.5, 0.6), (0.2, 0.85)],
            &[(0.2, 0.95), (0.8, 0.95)],
        ],
    },
    GlyphDef {
        ch: '3',
        baseline: 0.85,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.2, 0.15), (0.4, 0.05), (0.6, 0.05), (0.75, 0.15), (0.8, 0.3), (0.65, 0.45), (0.5, 0.5)],
            &[(0.5, 0.5), (0.7, 0.55), (0.85, 0.7), (0.85, 0.85), (0.7, 0.95), (0.4, 0.95), (0.2, 0.85)],
        ],
    },
    GlyphDef {
        ch: '4',
        baseline: 0.85,
        aspect_ratio: 0.75,
        advance: 0.8,
        strokes: &[
            &[(0.6, 0.05), (0.15, 0.65), (0.85, 0.65)],
            &[(0.6, 0.05), (0.6, 0.95)],
        ],
    },
    GlyphDef {
        ch: '5',
        baseline: 0.85,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.75, 0.05), (0.25, 0.05), (0.2, 0.45)],
            &[(0.2, 0.45), (0.5, 0.4), (0.75, 0.5), (0.85, 0.7), (0.8, 0.85), (0.6, 0.95), (0.3, 0.95), (0.15, 0.8)],
        ],
    },
    GlyphDef {
        ch: '6',
        baseline: 0.85,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.7, 0.2), (0.5, 0.05), (0.3, 0.15), (0.15, 0.35), (0.1, 0.6), (0.15, 0.75), (0.3, 0.85), (0.5, 0.9), (0.7, 0.85), (0.85, 0.7), (0.85, 0.55), (0.7, 0.45), (0.5, 0.4), (0.3, 0.45), (0.15, 0.55)],
        ],
    },
    GlyphDef {
        ch: '7',
        baseline: 0.85,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.15, 0.05), (0.85, 0.05), (0.4, 0.95)],
        ],
    },
    GlyphDef {
        ch: '8',
        baseline: 0.85,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.5, 0.45), (0.3, 0.35), (0.25, 0.2), (0.35, 0.08), (0.5, 0.05), (0.65, 0.08), (0.75, 0.2), (0.7, 0.35), (0.5, 0.45)],
            &[(0.5, 0.45), (0.2, 0.55), (0.15, 0.75), (0.25, 0.9), (0.5, 0.95), (0.75, 0.9), (0.85, 0.75), (0.8, 0.55), (0.5, 0.45)],
        ],
    },
    GlyphDef {
        ch: '9',
        baseline: 0.85,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.85, 0.45), (0.7, 0.55), (0.5, 0.6), (0.3, 0.55), (0.15, 0.4), (0.15, 0.25), (0.3, 0.15), (0.5, 0.1), (0.7, 0.15), (0.85, 0.25), (0.9, 0.4), (0.85, 0.65), (0.7, 0.85), (0.5, 0.95), (0.3, 0.8)],
        ],
    },
    GlyphDef {
        ch: 'a',
        baseline: 0.7,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.75, 0.3), (0.5, 0.2), (0.3, 0.3), (0.2, 0.45), (0.25, 0.6), (0.45, 0.7), (0.65, 0.65), (0.75, 0.5)],
            &[(0.75, 0.3), (0.75, 0.7)],
        ],
    },
    GlyphDef {
        ch: 'b',
        baseline: 0.85,
        aspect_ratio: 0.75,
        advance: 0.8,
        strokes: &[
            &[(0.2, 0.05), (0.2, 0.95)],
            &[(0.2, 0.35), (0.4, 0.25), (0.6, 0.25), (0.8, 0.35), (0.85, 0.55), (0.8, 0.75), (0.6, 0.85), (0.4, 0.85), (0.2, 0.75)],
        ],
    },
    GlyphDef {
        ch: 'c',
        baseline: 0.7,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.85, 0.35), (0.65, 0.22), (0.4, 0.2), (0.25, 0.35), (0.2, 0.55), (0.25, 0.75), (0.4, 0.9), (0.65, 0.88), (0.85, 0.75)],
        ],
    },
    GlyphDef {
        ch: 'd',
        baseline: 0.85,
        aspect_ratio: 0.75,
        advance: 0.8,
        strokes: &[
            &[(0.8, 0.75), (0.6, 0.85), (0.4, 0.85), (0.2, 0.75), (0.15, 0.55), (0.2, 0.35), (0.4, 0.25), (0.6, 0.25), (0.8, 0.35)],
            &[(0.8, 0.35), (0.8, 0.05), (0.8, 0.95)],
        ],
    },
    GlyphDef {
        ch: 'x',
        baseline: 0.7,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.15, 0.25), (0.75, 0.85)],
            &[(0.75, 0.25), (0.15, 0.85)],
        ],
    },
    GlyphDef {
        ch: 'y',
        baseline: 0.7,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.15, 0.25), (0.45, 0.65)],
            &[(0.75, 0.25), (0.2, 1.1)],
        ],
    },
    GlyphDef {
        ch: 'n',
        baseline: 0.7,
        aspect_ratio: 0.75,
        advance: 0.8,
        strokes: &[
            &[(0.2, 0.25), (0.2, 0.85)],
            &[(0.2, 0.35), (0.3, 0.25), (0.5, 0.22), (0.7, 0.3), (0.75, 0.45)],
            &[(0.75, 0.45), (0.75, 0.85)],
        ],
    },
    GlyphDef {
        ch: 'α',
        baseline: 0.7,
        aspect_ratio: 0.75,
        advance: 0.8,
        strokes: &[
            &[(0.7, 0.3), (0.5, 0.2), (0.3, 0.3), (0.25, 0.5), (0.35, 0.7), (0.55, 0.75), (0.7, 0.65)],
            &[(0.7, 0.3), (0.7, 0.85), (0.75, 0.95)],
        ],
    },
    GlyphDef {
        ch: 'β',
        baseline: 0.7,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.3, 1.0), (0.25, 0.3), (0.3, 0.1), (0.45, 0.05), (0.65, 0.1), (0.75, 0.25), (0.7, 0.4), (0.5, 0.5)],
            &[(0.5, 0.5), (0.7, 0.6), (0.8, 0.75), (0.75, 0.9), (0.55, 0.98), (0.35, 0.95), (0.25, 0.85)],
        ],
    },
    GlyphDef {
        ch: 'θ',
        baseline: 0.85,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.7, 0.2), (0.5, 0.05), (0.3, 0.2), (0.2, 0.4), (0.2, 0.65), (0.3, 0.85), (0.5, 1.0), (0.7, 0.85), (0.8, 0.65), (0.8, 0.4), (0.7, 0.2)],
            &[(0.15, 0.5), (0.85, 0.5)],
        ],
    },
    GlyphDef {
        ch: 'π',
        baseline: 0.7,
        aspect_ratio: 0.9,
        advance: 0.95,
        strokes: &[
            &[(0.1, 0.25), (0.9, 0.25)],
            &[(0.3, 0.25), (0.3, 0.85)],
            &[(0.7, 0.25), (0.7, 0.85)],
        ],
    },
    GlyphDef {
        ch: '+',
        baseline: 0.5,
        aspect_ratio: 1.0,
        advance: 1.05,
        strokes: &[
            &[(0.5, 0.15), (0.5, 0.85)],
            &[(0.15, 0.5), (0.85, 0.5)],
        ],
    },
    GlyphDef {
        ch: '−',
        baseline: 0.5,
        aspect_ratio: 1.0,
        advance: 1.05,
        strokes: &[
            &[(0.15, 0.5), (0.85, 0.5)],
        ],
    },
    GlyphDef {
        ch: '-',
        baseline: 0.5,
        aspect_ratio: 1.0,
        advance: 1.05,
        strokes: &[
            &[(0.15, 0.5), (0.85, 0.5)],
        ],
    },
    GlyphDef {
        ch: '=',
        baseline: 0.5,
        aspect_ratio: 1.0,
        advance: 1.05,
        strokes: &[
            &[(0.15, 0.38), (0.85, 0.38)],
            &[(0.15, 0.62), (0.85, 0.62)],
        ],
    },
    GlyphDef {
        ch: '×',
        baseline: 0.5,
        aspect_ratio: 1.0,
        advance: 1.05,
        strokes: &[
            &[(0.2, 0.2), (0.8, 0.8)],
            &[(0.8, 0.2), (0.2, 0.8)],
        ],
    },
    GlyphDef {
        ch: '÷',
        baseline: 0.5,
        aspect_ratio: 1.0,
        advance: 1.05,
        strokes: &[
            &[(0.5, 0.15), (0.5, 0.25)],
            &[(0.15, 0.5), (0.85, 0.5)],
            &[(0.5, 0.75), (0.5, 0.85)],
        ],
    },
    GlyphDef {
        ch: '(',
        baseline: 0.85,
        aspect_ratio: 0.4,
        advance: 0.45,
        strokes: &[
            &[(0.7, 0.05), (0.4, 0.2), (0.25, 0.5), (0.4, 0.8), (0.7, 0.95)],
        ],
    },
    GlyphDef {
        ch: ')',
        baseline: 0.85,
        aspect_ratio: 0.4,
        advance: 0.45,
        strokes: &[
            &[(0.3, 0.05), (0.6, 0.2), (0.75, 0.5), (0.6, 0.8), (0.3, 0.95)],
        ],
    },
    GlyphDef {
        ch: '[',
        baseline: 0.85,
        aspect_ratio: 0.4,
        advance: 0.45,
        strokes: &[
            &[(0.7, 0.05), (0.3, 0.05), (0.3, 0.95), (0.7, 0.95)],
        ],
    },
    GlyphDef {
        ch: ']',
        baseline: 0.85,
        aspect_ratio: 0.4,
        advance: 0.45,
        strokes: &[
            &[(0.3, 0.05), (0.7, 0.05), (0.7, 0.95), (0.3, 0.95)],
        ],
    },
    GlyphDef {
        ch: '∫',
        baseline: 0.85,
        aspect_ratio: 0.5,
        advance: 0.6,
        strokes: &[
            &[(0.7, 0.0), (0.6, 0.05), (0.5, 0.15), (0.45, 0.35), (0.45, 0.65), (0.5, 0.85), (0.6, 0.95), (0.7, 1.0)],
        ],
    },
    GlyphDef {
        ch: '∑',
        baseline: 0.85,
        aspect_ratio: 0.8,
        advance: 0.9,
        strokes: &[
            &[(0.85, 0.05), (0.25, 0.05), (0.6, 0.5), (0.25, 0.95), (0.85, 0.95)],
        ],
    },
    GlyphDef {
        ch: '√',
        baseline: 0.85,
        aspect_ratio: 1.0,
        advance: 1.0,
        strokes: &[
            &[(0.1, 0.5), (0.25, 0.65), (0.35, 0.95), (0.45, 0.15), (0.95, 0.15)],
        ],
    },
    GlyphDef {
        ch: 'e',
        baseline: 0.7,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.75, 0.5), (0.5, 0.2), (0.25, 0.35), (0.2, 0.55), (0.3, 0.75), (0.5, 0.85), (0.7, 0.8), (0.8, 0.6)],
            &[(0.2, 0.5), (0.7, 0.5)],
        ],
    },
    GlyphDef {
        ch: 'f',
        baseline: 0.85,
        aspect_ratio: 0.6,
        advance: 0.65,
        strokes: &[
            &[(0.7, 0.1), (0.55, 0.05), (0.45, 0.15), (0.45, 0.95)],
            &[(0.2, 0.35), (0.7, 0.35)],
        ],
    },
    GlyphDef {
        ch: 'g',
        baseline: 0.7,
        aspect_ratio: 0.75,
        advance: 0.8,
        strokes: &[
            &[(0.8, 0.35), (0.6, 0.25), (0.4, 0.25), (0.2, 0.35), (0.15, 0.55), (0.2, 0.75), (0.4, 0.85), (0.6, 0.85), (0.8, 0.75)],
            &[(0.8, 0.35), (0.8, 0.95), (0.7, 1.05), (0.5, 1.1), (0.3, 1.05)],
        ],
    },
    GlyphDef {
        ch: 'h',
        baseline: 0.85,
        aspect_ratio: 0.75,
        advance: 0.8,
        strokes: &[
            &[(0.2, 0.05), (0.2, 0.95)],
            &[(0.2, 0.35), (0.3, 0.25), (0.5, 0.22), (0.7, 0.3), (0.75, 0.45)],
            &[(0.75, 0.45), (0.75, 0.95)],
        ],
    },
    GlyphDef {
        ch: 'i',
        baseline: 0.7,
        aspect_ratio: 0.4,
        advance: 0.45,
        strokes: &[
            &[(0.4, 0.05), (0.4, 0.15)],
            &[(0.4, 0.3), (0.4, 0.85)],
        ],
    },
    GlyphDef {
        ch: 'j',
        baseline: 0.7,
        aspect_ratio: 0.5,
        advance: 0.55,
        strokes: &[
            &[(0.5, 0.05), (0.5, 0.15)],
            &[(0.5, 0.3), (0.5, 0.95), (0.4, 1.05), (0.25, 1.05), (0.15, 0.95)],
        ],
    },
    GlyphDef {
        ch: 'k',
        baseline: 0.85,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.2, 0.05), (0.2, 0.95)],
            &[(0.75, 0.25), (0.2, 0.55)],
            &[(0.35, 0.45), (0.75, 0.85)],
        ],
    },
    GlyphDef {
        ch: 'l',
        baseline: 0.85,
        aspect_ratio: 0.4,
        advance: 0.45,
        strokes: &[
            &[(0.4, 0.05), (0.4, 0.95)],
        ],
    },
    GlyphDef {
        ch: 'm',
        baseline: 0.7,
        aspect_ratio: 1.1,
        advance: 1.15,
        strokes: &[
            &[(0.15, 0.25), (0.15, 0.85)],
            &[(0.15, 0.35), (0.25, 0.25), (0.35, 0.22), (0.45, 0.3), (0.48, 0.4)],
            &[(0.48, 0.4), (0.48, 0.85)],
            &[(0.48, 0.35), (0.58, 0.25), (0.68, 0.22), (0.78, 0.3), (0.82, 0.4)],
            &[(0.82, 0.4), (0.82, 0.85)],
        ],
    },
    GlyphDef {
        ch: 'o',
        baseline: 0.7,
        aspect_ratio: 0.75,
        advance: 0.8,
        strokes: &[
            &[(0.7, 0.3), (0.5, 0.2), (0.3, 0.3), (0.2, 0.5), (0.3, 0.7), (0.5, 0.8), (0.7, 0.7), (0.8, 0.5), (0.7, 0.3)],
        ],
    },
    GlyphDef {
        ch: 'p',
        baseline: 0.7,
        aspect_ratio: 0.75,
        advance: 0.8,
        strokes: &[
            &[(0.2, 0.25), (0.2, 1.1)],
            &[(0.2, 0.35), (0.4, 0.25), (0.6, 0.25), (0.8, 0.35), (0.85, 0.55), (0.8, 0.75), (0.6, 0.85), (0.4, 0.85), (0.2, 0.75)],
        ],
    },
    GlyphDef {
        ch: 'q',
        baseline: 0.7,
        aspect_ratio: 0.75,
        advance: 0.8,
        strokes: &[
            &[(0.8, 0.75), (0.6, 0.85), (0.4, 0.85), (0.2, 0.75), (0.15, 0.55), (0.2, 0.35), (0.4, 0.25), (0.6, 0.25), (0.8, 0.35)],
            &[(0.8, 0.35), (0.8, 1.1)],
        ],
    },
    GlyphDef {
        ch: 'r',
        baseline: 0.7,
        aspect_ratio: 0.6,
        advance: 0.65,
        strokes: &[
            &[(0.2, 0.25), (0.2, 0.85)],
            &[(0.2, 0.35), (0.35, 0.25), (0.55, 0.22), (0.7, 0.3)],
        ],
    },
    GlyphDef {
        ch: 's',
        baseline: 0.7,
        aspect_ratio: 0.65,
        advance: 0.7,
        strokes: &[
            &[(0.75, 0.3), (0.55, 0.2), (0.35, 0.25), (0.25, 0.35), (0.35, 0.48), (0.55, 0.52), (0.7, 0.58), (0.75, 0.68), (0.65, 0.8), (0.45, 0.85), (0.25, 0.75)],
        ],
    },
    GlyphDef {
        ch: 't',
        baseline: 0.85,
        aspect_ratio: 0.6,
        advance: 0.65,
        strokes: &[
            &[(0.4, 0.1), (0.4, 0.85), (0.5, 0.95), (0.65, 0.95)],
            &[(0.2, 0.3), (0.65, 0.3)],
        ],
    },
    GlyphDef {
        ch: 'u',
        baseline: 0.7,
        aspect_ratio: 0.75,
        advance: 0.8,
        strokes: &[
            &[(0.2, 0.25), (0.2, 0.65), (0.25, 0.78), (0.4, 0.85)],
            &[(0.4, 0.85), (0.6, 0.8), (0.75, 0.65), (0.75, 0.25)],
            &[(0.75, 0.55), (0.75, 0.95)],
        ],
    },
    GlyphDef {
        ch: 'v',
        baseline: 0.7,
        aspect_ratio: 0.8,
        advance: 0.85,
        strokes: &[
            &[(0.15, 0.25), (0.45, 0.85)],
            &[(0.85, 0.25), (0.45, 0.85)],
        ],
    },
    GlyphDef {
        ch: 'w',
        baseline: 0.7,
        aspect_ratio: 1.1,
        advance: 1.15,
        strokes: &[
            &[(0.1, 0.25), (0.25, 0.85)],
            &[(0.5, 0.25), (0.25, 0.85)],
            &[(0.5, 0.25), (0.75, 0.85)],
            &[(0.9, 0.25), (0.75, 0.85)],
        ],
    },
    GlyphDef {
        ch: 'z',
        baseline: 0.7,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.2, 0.25), (0.75, 0.25), (0.2, 0.85), (0.75, 0.85)],
        ],
    },
    GlyphDef {
        ch: 'A',
        baseline: 0.85,
        aspect_ratio: 0.8,
        advance: 0.85,
        strokes: &[
            &[(0.15, 0.95), (0.5, 0.05)],
            &[(0.5, 0.05), (0.85, 0.95)],
            &[(0.3, 0.6), (0.7, 0.6)],
        ],
    },
    GlyphDef {
        ch: 'X',
        baseline: 0.85,
        aspect_ratio: 0.8,
        advance: 0.85,
        strokes: &[
            &[(0.15, 0.05), (0.85, 0.95)],
            &[(0.85, 0.05), (0.15, 0.95)],
        ],
    },
    GlyphDef {
        ch: 'Y',
        baseline: 0.85,
        aspect_ratio: 0.8,
        advance: 0.85,
        strokes: &[
            &[(0.15, 0.05), (0.5, 0.45)],
            &[(0.85, 0.05), (0.5, 0.45)],
            &[(0.5, 0.45), (0.5, 0.95)],
        ],
    },
    GlyphDef {
        ch: 'B',
        baseline: 0.85,
        aspect_ratio: 0.75,
        advance: 0.8,
        strokes: &[
            &[(0.2, 0.05), (0.2, 0.95)],
            &[(0.2, 0.05), (0.6, 0.05), (0.75, 0.15), (0.75, 0.35), (0.6, 0.48), (0.3, 0.5)],
            &[(0.3, 0.5), (0.65, 0.52), (0.8, 0.65), (0.8, 0.85), (0.65, 0.95), (0.2, 0.95)],
        ],
    },
    GlyphDef {
        ch: 'C',
        baseline: 0.85,
        aspect_ratio: 0.8,
        advance: 0.85,
        strokes: &[
            &[(0.85, 0.2), (0.65, 0.05), (0.4, 0.05), (0.2, 0.2), (0.15, 0.5), (0.2, 0.8), (0.4, 0.95), (0.65, 0.95), (0.85, 0.8)],
        ],
    },
    GlyphDef {
        ch: 'D',
        baseline: 0.85,
        aspect_ratio: 0.8,
        advance: 0.85,
        strokes: &[
            &[(0.2, 0.05), (0.2, 0.95)],
            &[(0.2, 0.05), (0.5, 0.05), (0.7, 0.15), (0.8, 0.35), (0.8, 0.65), (0.7, 0.85), (0.5, 0.95), (0.2, 0.95)],
        ],
    },
    GlyphDef {
        ch: 'E',
        baseline: 0.85,
        aspect_ratio: 0.75,
        advance: 0.8,
        strokes: &[
            &[(0.2, 0.05), (0.2, 0.95)],
            &[(0.2, 0.05), (0.75, 0.05)],
            &[(0.2, 0.5), (0.65, 0.5)],
            &[(0.2, 0.95), (0.75, 0.95)],
        ],
    },
    GlyphDef {
        ch: 'γ',
        baseline: 0.7,
        aspect_ratio: 0.75,
        advance: 0.8,
        strokes: &[
            &[(0.2, 0.25), (0.4, 0.45), (0.5, 0.7), (0.4, 0.95), (0.3, 1.05)],
            &[(0.8, 0.25), (0.4, 0.45)],
        ],
    },
    GlyphDef {
        ch: 'δ',
        baseline: 0.85,
        aspect_ratio: 0.75,
        advance: 0.8,
        strokes: &[
            &[(0.25, 0.15), (0.6, 0.05), (0.75, 0.15), (0.7, 0.3), (0.5, 0.25), (0.3, 0.35), (0.2, 0.55), (0.25, 0.75), (0.45, 0.88), (0.65, 0.85), (0.8, 0.65), (0.75, 0.4), (0.6, 0.25)],
        ],
    },
    GlyphDef {
        ch: 'λ',
        baseline: 0.85,
        aspect_ratio: 0.8,
        advance: 0.85,
        strokes: &[
            &[(0.3, 0.05), (0.5, 0.95)],
            &[(0.8, 0.05), (0.15, 0.95)],
        ],
    },
    GlyphDef {
        ch: 'μ',
        baseline: 0.7,
        aspect_ratio: 0.8,
        advance: 0.85,
        strokes: &[
            &[(0.2, 0.25), (0.2, 1.0)],
            &[(0.2, 0.65), (0.25, 0.78), (0.4, 0.85), (0.6, 0.8), (0.75, 0.65), (0.75, 0.25)],
            &[(0.75, 0.55), (0.75, 0.95)],
        ],
    },
    GlyphDef {
        ch: 'σ',
        baseline: 0.7,
        aspect_ratio: 0.85,
        advance: 0.9,
        strokes: &[
            &[(0.15, 0.25), (0.5, 0.2), (0.75, 0.25)],
            &[(0.75, 0.25), (0.85, 0.35), (0.85, 0.55), (0.75, 0.75), (0.5, 0.85), (0.3, 0.8), (0.2, 0.6)],
        ],
    },
    GlyphDef {
        ch: 'ω',
        baseline: 0.7,
        aspect_ratio: 0.95,
        advance: 1.0,
        strokes: &[
            &[(0.15, 0.3), (0.2, 0.55), (0.3, 0.75), (0.4, 0.8), (0.5, 0.7), (0.6, 0.8), (0.7, 0.75), (0.8, 0.55), (0.85, 0.3)],
        ],
    },
    GlyphDef {
        ch: 'Δ',
        baseline: 0.85,
        aspect_ratio: 0.8,
        advance: 0.85,
        strokes: &[
            &[(0.15, 0.95), (0.5, 0.05)],
            &[(0.5, 0.05), (0.85, 0.95)],
            &[(0.85, 0.95), (0.15, 0.95)],
        ],
    },
    GlyphDef {
        ch: 'Σ',
        baseline: 0.85,
        aspect_ratio: 0.8,
        advance: 0.9,
        strokes: &[
            &[(0.85, 0.05), (0.25, 0.05), (0.6, 0.5), (0.25, 0.95), (0.85, 0.95)],
        ],
    },
    GlyphDef {
        ch: 'Π',
        baseline: 0.85,
        aspect_ratio: 0.8,
        advance: 0.85,
        strokes: &[
            &[(0.2, 0.05), (0.8, 0.05)],
            &[(0.2, 0.05), (0.2, 0.95)],
            &[(0.8, 0.05), (0.8, 0.95)],
        ],
    },
    GlyphDef {
        ch: '<',
        baseline: 0.5,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.75, 0.2), (0.25, 0.5), (0.75, 0.8)],
        ],
    },
    GlyphDef {
        ch: '>',
        baseline: 0.5,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.25, 0.2), (0.75, 0.5), (0.25, 0.8)],
        ],
    },
    GlyphDef {
        ch: '≤',
        baseline: 0.5,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.75, 0.15), (0.25, 0.45), (0.75, 0.7)],
            &[(0.25, 0.9), (0.75, 0.9)],
        ],
    },
    GlyphDef {
        ch: '≥',
        baseline: 0.5,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.25, 0.15), (0.75, 0.45), (0.25, 0.7)],
            &[(0.25, 0.9), (0.75, 0.9)],
        ],
    },
    GlyphDef {
        ch: '±',
        baseline: 0.5,
        aspect_ratio: 1.0,
        advance: 1.05,
        strokes: &[
            &[(0.5, 0.15), (0.5, 0.55)],
            &[(0.15, 0.35), (0.85, 0.35)],
            &[(0.15, 0.75), (0.85, 0.75)],
        ],
    },
    GlyphDef {
        ch: '·',
        baseline: 0.5,
        aspect_ratio: 0.5,
        advance: 0.55,
        strokes: &[
            &[(0.45, 0.45), (0.55, 0.45), (0.55, 0.55), (0.45, 0.55), (0.45, 0.45)],
        ],
    },
    GlyphDef {
        ch: '/',
        baseline: 0.85,
        aspect_ratio: 0.5,
        advance: 0.55,
        strokes: &[
            &[(0.2, 0.95), (0.8, 0.05)],
        ],
    },
    GlyphDef {
        ch: '\\',
        baseline: 0.85,
        aspect_ratio: 0.5,
        advance: 0.55,
        strokes: &[
            &[(0.2, 0.05), (0.8, 0.95)],
        ],
    },
    GlyphDef {
        ch: '!',
        baseline: 0.85,
        aspect_ratio: 0.4,
        advance: 0.45,
        strokes: &[
            &[(0.5, 0.05), (0.5, 0.6)],
            &[(0.5, 0.75), (0.5, 0.85)],
        ],
    },
    GlyphDef {
        ch: '?',
        baseline: 0.85,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.25, 0.2), (0.4, 0.08), (0.6, 0.08), (0.75, 0.2), (0.75, 0.35), (0.6, 0.5), (0.5, 0.6)],
            &[(0.5, 0.75), (0.5, 0.85)],
        ],
    },
    GlyphDef {
        ch: '.',
        baseline: 0.85,
        aspect_ratio: 0.4,
        advance: 0.45,
        strokes: &[
            &[(0.45, 0.8), (0.55, 0.8), (0.55, 0.9), (0.45, 0.9), (0.45, 0.8)],
        ],
    },
    GlyphDef {
        ch: ',',
        baseline: 0.85,
        aspect_ratio: 0.4,
        advance: 0.45,
        strokes: &[
            &[(0.5, 0.8), (0.45, 0.9), (0.35, 0.95)],
        ],
    },
    GlyphDef {
        ch: '{',
        baseline: 0.85,
        aspect_ratio: 0.5,
        advance: 0.55,
        strokes: &[
            &[(0.8, 0.05), (0.5, 0.1), (0.4, 0.2), (0.4, 0.4), (0.3, 0.5), (0.4, 0.6), (0.4, 0.8), (0.5, 0.9), (0.8, 0.95)],
        ],
    },
    GlyphDef {
        ch: '}',
        baseline: 0.85,
        aspect_ratio: 0.5,
        advance: 0.55,
        strokes: &[
            &[(0.2, 0.05), (0.5, 0.1), (0.6, 0.2), (0.6, 0.4), (0.7, 0.5), (0.6, 0.6), (0.6, 0.8), (0.5, 0.9), (0.2, 0.95)],
        ],
    },
    GlyphDef {
        ch: '∞',
        baseline: 0.5,
        aspect_ratio: 1.4,
        advance: 1.45,
        strokes: &[
            &[(0.3, 0.5), (0.15, 0.35), (0.15, 0.65), (0.3, 0.5), (0.5, 0.3), (0.7, 0.5), (0.85, 0.35), (0.85, 0.65), (0.7, 0.5), (0.5, 0.7), (0.3, 0.5)],
        ],
    },
    GlyphDef {
        ch: '∂',
        baseline: 0.85,
        aspect_ratio: 0.75,
        advance: 0.8,
        strokes: &[
            &[(0.25, 0.15), (0.6, 0.05), (0.75, 0.2), (0.75, 0.35), (0.6, 0.25), (0.3, 0.35), (0.2, 0.55), (0.25, 0.75), (0.45, 0.88), (0.65, 0.85), (0.8, 0.65), (0.75, 0.4)],
        ],
    },
    GlyphDef {
        ch: '∏',
        baseline: 0.85,
        aspect_ratio: 0.8,
        advance: 0.9,
        strokes: &[
            &[(0.1, 0.05), (0.9, 0.05)],
            &[(0.25, 0.05), (0.25, 0.95)],
            &[(0.75, 0.05), (0.75, 0.95)],
            &[(0.1, 0.95), (0.4, 0.95)],
            &[(0.6, 0.95), (0.9, 0.95)],
        ],
    },
    GlyphDef {
        ch: '|',
        baseline: 0.85,
        aspect_ratio: 0.3,
        advance: 0.35,
        strokes: &[&[(0.5, 0.0), (0.5, 1.0)]],
    },
    GlyphDef {
        ch: ':',
        baseline: 0.85,
        aspect_ratio: 0.3,
        advance: 0.35,
        strokes: &[&[(0.5, 0.35), (0.5, 0.4)], &[(0.5, 0.75), (0.5, 0.8)]],
    },
    GlyphDef {
        ch: '*',
        baseline: 0.5,
        aspect_ratio: 0.7,
        advance: 0.75,
        strokes: &[
            &[(0.5, 0.2), (0.5, 0.8)],
            &[(0.24, 0.35), (0.76, 0.65)],
            &[(0.76, 0.35), (0.24, 0.65)],
        ],
    },
];
