//! Dialog descriptions and the responses the bridge reports for them.
//!
//! A description is render-only and rebuilt for every presentation. The
//! position of each element in `elements` is its stable index: the values in
//! an `Accepted` response line up with it one-to-one.

use serde::{Deserialize, Serialize};

// =============================================================================
// Description
// =============================================================================

/// One line of dialog body text. Color and emphasis codes are part of `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    pub text: String,
}

impl TextSegment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// An interactive element of a dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DialogElement {
    Button {
        label: String,
    },
    Input {
        label: String,
        #[serde(default)]
        placeholder: String,
        #[serde(default)]
        default: String,
    },
}

/// Everything the bridge needs to render one modal form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogDescription {
    pub title: String,
    #[serde(default)]
    pub body: Vec<TextSegment>,
    #[serde(default)]
    pub elements: Vec<DialogElement>,
}

impl DialogDescription {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Append a body line.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.body.push(TextSegment::new(text));
        self
    }

    /// Append a button; its index is the number of elements before it.
    pub fn button(mut self, label: impl Into<String>) -> Self {
        self.elements.push(DialogElement::Button {
            label: label.into(),
        });
        self
    }

    /// Append a labelled text input.
    pub fn input(
        mut self,
        label: impl Into<String>,
        placeholder: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        self.elements.push(DialogElement::Input {
            label: label.into(),
            placeholder: placeholder.into(),
            default: default.into(),
        });
        self
    }

    /// Body text joined with newlines, the way the bridge lays it out.
    pub fn body_text(&self) -> String {
        self.body
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn button_labels(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                DialogElement::Button { label } => Some(label.as_str()),
                DialogElement::Input { .. } => None,
            })
            .collect()
    }
}

// =============================================================================
// Response
// =============================================================================

/// Value reported for one interactive element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ResponseValue {
    /// The button the viewer pressed.
    Pressed,
    /// Text submitted for an input.
    Text(String),
    /// Button not pressed, or input left without a value.
    Empty,
}

/// Positional values aligned with a description's `elements`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseValues(Vec<ResponseValue>);

impl ResponseValues {
    pub fn new(values: Vec<ResponseValue>) -> Self {
        Self(values)
    }

    /// Values for a button form where button `index` of `count` was pressed.
    pub fn pressed(index: usize, count: usize) -> Self {
        Self(
            (0..count.max(index + 1))
                .map(|i| {
                    if i == index {
                        ResponseValue::Pressed
                    } else {
                        ResponseValue::Empty
                    }
                })
                .collect(),
        )
    }

    /// Index of the first pressed button, if any.
    pub fn clicked_button(&self) -> Option<usize> {
        self.0
            .iter()
            .position(|value| matches!(value, ResponseValue::Pressed))
    }

    /// Submitted text at `index`, if that position holds text.
    pub fn text(&self, index: usize) -> Option<&str> {
        match self.0.get(index) {
            Some(ResponseValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Outcome the bridge reports for one presented dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResponsePayload {
    /// The viewer submitted the form.
    Accepted { values: ResponseValues },
    /// The viewer dismissed the form without submitting.
    Closed,
    /// The bridge received a malformed submission.
    Invalid,
}

impl ResponsePayload {
    pub fn accepted(values: Vec<ResponseValue>) -> Self {
        Self::Accepted {
            values: ResponseValues::new(values),
        }
    }

    /// Shorthand for a button form response.
    pub fn button(index: usize) -> Self {
        Self::Accepted {
            values: ResponseValues::pressed(index, index + 1),
        }
    }

    /// Shorthand for a form with a single text input at index 0.
    pub fn text(text: impl Into<String>) -> Self {
        Self::accepted(vec![ResponseValue::Text(text.into())])
    }
}
