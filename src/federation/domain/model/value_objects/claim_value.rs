use serde_json::Value;

/// A single identity claim, either a scalar or a list of strings.
///
/// Claims arrive as loosely typed JSON; keeping the two shapes the flow
/// actually consumes explicit avoids runtime casts downstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClaimValue {
    Scalar(String),
    List(Vec<String>),
}

impl ClaimValue {
    /// `None` for JSON null; scalars are rendered through their display
    /// form, array elements likewise.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(scalar) => Some(Self::Scalar(scalar.clone())),
            Value::Bool(scalar) => Some(Self::Scalar(scalar.to_string())),
            Value::Number(scalar) => Some(Self::Scalar(scalar.to_string())),
            Value::Array(items) => Some(Self::List(items.iter().map(render_element).collect())),
            Value::Object(_) => Some(Self::Scalar(value.to_string())),
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            Self::List(_) => None,
        }
    }
}

fn render_element(value: &Value) -> String {
    match value {
        Value::String(scalar) => scalar.clone(),
        other => other.to_string(),
    }
}
