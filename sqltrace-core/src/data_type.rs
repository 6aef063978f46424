use crate::Value;
use std::fmt::{self, Display};

/// Declared type of a bound parameter. It drives how the value is rendered
/// in the interpolated query, not only a hint for the driver.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Null,
    Bool,
    Int,
    #[default]
    Str,
    Lob,
}

impl DataType {
    /// Type of a value supplied without an explicit declaration.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => DataType::Null,
            Value::Boolean(..) => DataType::Bool,
            Value::Blob(..) => DataType::Lob,
            v if v.is_integer() => DataType::Int,
            _ => DataType::Str,
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataType::Null => "NULL",
            DataType::Bool => "BOOL",
            DataType::Int => "INT",
            DataType::Str => "STR",
            DataType::Lob => "LOB",
        })
    }
}
