//! Renderer tree nodes carrying a `style` prop.
//!
//! The pipeline only ever reads and replaces `props.style`. Everything else
//! on a node (its type, other props, arbitrary extra fields) is kept in open
//! JSON maps so it survives a round trip untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StyleError;
use crate::value::{StyleInput, StyleRecord};

/// A node's `style` prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Style {
    /// An inline CSS string, e.g. `"flex: 1; color: red"`.
    Inline(String),
    /// A style prop that has not been converted yet.
    Raw(StyleInput),
}

impl Style {
    /// Whether this style counts as absent (`""` or a bare `null`).
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Inline(css) => css.is_empty(),
            Self::Raw(input) => input.is_null(),
        }
    }

    /// The inline CSS, if this style has been converted.
    #[must_use]
    pub fn as_inline(&self) -> Option<&str> {
        match self {
            Self::Inline(css) => Some(css.as_str()),
            Self::Raw(_) => None,
        }
    }
}

impl From<StyleInput> for Style {
    fn from(input: StyleInput) -> Self {
        Self::Raw(input)
    }
}

impl From<StyleRecord> for Style {
    fn from(record: StyleRecord) -> Self {
        Self::Raw(StyleInput::Record(record))
    }
}

impl From<Vec<StyleRecord>> for Style {
    fn from(records: Vec<StyleRecord>) -> Self {
        Self::Raw(records.into())
    }
}

/// The props of a [`Node`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Props {
    /// The style prop, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,

    /// Every other prop, in document order.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A child of a [`Node`]: nested text or another node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    /// A text child.
    Text(String),
    /// An element child.
    Node(Box<Node>),
}

/// A renderer tree node.
///
/// Shaped like a test-renderer JSON node: `{ "type": ..., "props": {...},
/// "children": [...] }`. Only `props` and `children` are typed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    /// The node's props, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,

    /// Child nodes and text, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Child>,

    /// Every other field (`type`, keys, renderer bookkeeping).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Node {
    /// Create an empty node with the given `type` field.
    #[must_use]
    pub fn new(node_type: &str) -> Self {
        let mut fields = Map::new();
        let _ = fields.insert("type".to_string(), Value::String(node_type.to_string()));
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Set `props.style`, creating the props if needed.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<Style>) -> Self {
        self.props.get_or_insert_with(Props::default).style = Some(style.into());
        self
    }

    /// Set another prop, creating the props if needed.
    #[must_use]
    pub fn with_prop(mut self, name: &str, value: Value) -> Self {
        let _ = self
            .props
            .get_or_insert_with(Props::default)
            .fields
            .insert(name.to_string(), value);
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(Child::Node(Box::new(child)));
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Child::Text(text.to_string()));
        self
    }

    /// The `style` prop, if present.
    #[must_use]
    pub fn style(&self) -> Option<&Style> {
        self.props.as_ref()?.style.as_ref()
    }
}

/// Parse a node from JSON.
///
/// A string `style` is read as already-inline CSS. The falsy scalars
/// `false` and `0` read as a bare `null` style, both at the top level and
/// inside lists. Truthy numbers and `true` are not valid styles and are
/// rejected.
///
/// # Errors
///
/// Returns [`StyleError::Json`] if `json` is not a node in the expected shape.
pub fn parse_node(json: &str) -> Result<Node, StyleError> {
    Ok(serde_json::from_str(json)?)
}
