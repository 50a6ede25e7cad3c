//! Expression tree consumed by the layout engine.
//!
//! The tree is produced by an external parser (KaTeX-like notation front ends) and arrives either
//! as Rust values or as JSON tagged by `"type"`:
//!
//! ```json
//! { "type": "fraction",
//!   "numerator": { "type": "text", "value": "1" },
//!   "denominator": { "type": "text", "value": "x" } }
//! ```
//!
//! Tags outside the known vocabulary (e.g. `"matrix"`) deserialize to
//! [`ExpressionNode::Unknown`], and a missing required child defaults to `Unknown` as well, so
//! a partially understood tree still lays out whatever it can.

use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExpressionNode {
    Text(TextNode),
    Symbol(TextNode),
    Operator(TextNode),
    Fraction(FractionNode),
    Superscript(ScriptNode),
    Subscript(ScriptNode),
    Sqrt(SqrtNode),
    Integral(LargeOperatorNode),
    Sum(LargeOperatorNode),
    Product(LargeOperatorNode),
    Parenthesis(DelimiterNode),
    Bracket(DelimiterNode),
    Brace(DelimiterNode),
    Accent(AccentNode),
    Group(GroupNode),
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextNode {
    #[serde(default)]
    pub value: String,
    /// Font style hint from the parser (`"italic"`, `"normal"`, ...). Layout ignores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FractionNode {
    #[serde(default)]
    pub numerator: Box<ExpressionNode>,
    #[serde(default)]
    pub denominator: Box<ExpressionNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScriptNode {
    #[serde(default)]
    pub base: Box<ExpressionNode>,
    #[serde(default)]
    pub script: Box<ExpressionNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SqrtNode {
    #[serde(default)]
    pub content: Box<ExpressionNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<Box<ExpressionNode>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LargeOperatorNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<Box<ExpressionNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<Box<ExpressionNode>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelimiterNode {
    #[serde(default)]
    pub content: Box<ExpressionNode>,
    #[serde(default)]
    pub left: String,
    #[serde(default)]
    pub right: String,
    #[serde(default = "default_stretchy")]
    pub stretchy: bool,
}

fn default_stretchy() -> bool {
    true
}

impl Default for DelimiterNode {
    fn default() -> Self {
        Self {
            content: Box::default(),
            left: String::new(),
            right: String::new(),
            stretchy: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccentNode {
    #[serde(default)]
    pub base: Box<ExpressionNode>,
    /// Accent kind as emitted by the parser, e.g. `\hat` or `\bar`.
    #[serde(default)]
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupNode {
    #[serde(default)]
    pub children: Vec<ExpressionNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptKind {
    Superscript,
    Subscript,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LargeOperatorKind {
    Integral,
    Sum,
    Product,
}

impl LargeOperatorKind {
    pub fn symbol(self) -> char {
        match self {
            LargeOperatorKind::Integral => '∫',
            LargeOperatorKind::Sum => '∑',
            LargeOperatorKind::Product => '∏',
        }
    }
}

impl ExpressionNode {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(TextNode {
            value: value.into(),
            style: None,
        })
    }

    pub fn symbol(value: impl Into<String>) -> Self {
        Self::Symbol(TextNode {
            value: value.into(),
            style: None,
        })
    }

    pub fn operator(value: impl Into<String>) -> Self {
        Self::Operator(TextNode {
            value: value.into(),
            style: None,
        })
    }

    pub fn fraction(numerator: Self, denominator: Self) -> Self {
        Self::Fraction(FractionNode {
            numerator: Box::new(numerator),
            denominator: Box::new(denominator),
        })
    }

    pub fn script(kind: ScriptKind, base: Self, script: Self) -> Self {
        let node = ScriptNode {
            base: Box::new(base),
            script: Box::new(script),
        };
        match kind {
            ScriptKind::Superscript => Self::Superscript(node),
            ScriptKind::Subscript => Self::Subscript(node),
        }
    }

    pub fn superscript(base: Self, script: Self) -> Self {
        Self::script(ScriptKind::Superscript, base, script)
    }

    pub fn subscript(base: Self, script: Self) -> Self {
        Self::script(ScriptKind::Subscript, base, script)
    }

    pub fn sqrt(content: Self, index: Option<Self>) -> Self {
        Self::Sqrt(SqrtNode {
            content: Box::new(content),
            index: index.map(Box::new),
        })
    }

    pub fn large_operator(
        kind: LargeOperatorKind,
        lower: Option<Self>,
        upper: Option<Self>,
    ) -> Self {
        let node = LargeOperatorNode {
            lower: lower.map(Box::new),
            upper: upper.map(Box::new),
        };
        match kind {
            LargeOperatorKind::Integral => Self::Integral(node),
            LargeOperatorKind::Sum => Self::Sum(node),
            LargeOperatorKind::Product => Self::Product(node),
        }
    }

    /// Delimited content; the variant (parenthesis/bracket/brace) follows the left delimiter.
    pub fn delimited(content: Self, left: impl Into<String>, right: impl Into<String>) -> Self {
        let left = left.into();
        let variant: fn(DelimiterNode) -> Self = match left.trim_start_matches('\\') {
            "[" | "]" => Self::Bracket,
            "{" | "}" => Self::Brace,
            _ => Self::Parenthesis,
        };
        variant(DelimiterNode {
            content: Box::new(content),
            left,
            right: right.into(),
            stretchy: true,
        })
    }

    pub fn accent(base: Self, accent: impl Into<String>) -> Self {
        Self::Accent(AccentNode {
            base: Box::new(base),
            accent: accent.into(),
        })
    }

    pub fn group(children: Vec<Self>) -> Self {
        Self::Group(GroupNode { children })
    }

    /// The `"type"` tag this node serializes with.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Symbol(_) => "symbol",
            Self::Operator(_) => "operator",
            Self::Fraction(_) => "fraction",
            Self::Superscript(_) => "superscript",
            Self::Subscript(_) => "subscript",
            Self::Sqrt(_) => "sqrt",
            Self::Integral(_) => "integral",
            Self::Sum(_) => "sum",
            Self::Product(_) => "product",
            Self::Parenthesis(_) => "parenthesis",
            Self::Bracket(_) => "bracket",
            Self::Brace(_) => "brace",
            Self::Accent(_) => "accent",
            Self::Group(_) => "group",
            Self::Unknown => "unknown",
        }
    }

    pub fn script_kind(&self) -> Option<ScriptKind> {
        match self {
            Self::Superscript(_) => Some(ScriptKind::Superscript),
            Self::Subscript(_) => Some(ScriptKind::Subscript),
            _ => None,
        }
    }

    pub fn large_operator_kind(&self) -> Option<LargeOperatorKind> {
        match self {
            Self::Integral(_) => Some(LargeOperatorKind::Integral),
            Self::Sum(_) => Some(LargeOperatorKind::Sum),
            Self::Product(_) => Some(LargeOperatorKind::Product),
            _ => None,
        }
    }

    /// Concatenated leaf values in reading order; useful for logs and debugging.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Self::Text(n) | Self::Symbol(n) | Self::Operator(n) => out.push_str(&n.value),
            Self::Fraction(n) => {
                n.numerator.push_plain_text(out);
                out.push('/');
                n.denominator.push_plain_text(out);
            }
            Self::Superscript(n) | Self::Subscript(n) => {
                n.base.push_plain_text(out);
                n.script.push_plain_text(out);
            }
            Self::Sqrt(n) => {
                out.push('√');
                n.content.push_plain_text(out);
            }
            Self::Integral(n) | Self::Sum(n) | Self::Product(n) => {
                if let Some(kind) = self.large_operator_kind() {
                    out.push(kind.symbol());
                }
                if let Some(lower) = &n.lower {
                    lower.push_plain_text(out);
                }
                if let Some(upper) = &n.upper {
                    upper.push_plain_text(out);
                }
            }
            Self::Parenthesis(n) | Self::Bracket(n) | Self::Brace(n) => {
                out.push_str(n.left.trim_start_matches('\\'));
                n.content.push_plain_text(out);
                out.push_str(n.right.trim_start_matches('\\'));
            }
            Self::Accent(n) => n.base.push_plain_text(out),
            Self::Group(n) => {
                for child in &n.children {
                    child.push_plain_text(out);
                }
            }
            Self::Unknown => {}
        }
    }
}
