use serde_json::{Number, Value};

/// A value handed to one of the case converters.
///
/// Text and numbers are always accepted. `Absent` stands in for a missing
/// value and always converts to the empty string. Anything else lands in
/// `Other` and is either coerced to text or rejected, depending on
/// [`Options::strict`](crate::Options).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawInput {
    #[default]
    Absent,
    Text(String),
    Number(Number),
    Other(Value),
}

impl RawInput {
    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RawInput::Absent => "absent",
            RawInput::Text(_) => "text",
            RawInput::Number(_) => "number",
            RawInput::Other(value) => value_kind(value),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, RawInput::Absent | RawInput::Other(Value::Null))
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "absent",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        RawInput::Text(value)
    }
}

impl From<&String> for RawInput {
    fn from(value: &String) -> Self {
        RawInput::Text(value.clone())
    }
}

impl From<bool> for RawInput {
    fn from(value: bool) -> Self {
        RawInput::Other(Value::Bool(value))
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawInput {
                fn from(value: $ty) -> Self {
                    RawInput::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        // NaN and infinities have no JSON number form
        match Number::from_f64(value) {
            Some(number) => RawInput::Number(number),
            None => RawInput::Text(value.to_string()),
        }
    }
}

impl From<f32> for RawInput {
    fn from(value: f32) -> Self {
        RawInput::from(f64::from(value))
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawInput::Absent, Into::into)
    }
}

impl From<Value> for RawInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawInput::Absent,
            Value::String(s) => RawInput::Text(s),
            Value::Number(n) => RawInput::Number(n),
            other => RawInput::Other(other),
        }
    }
}
