use atoi::FromRadix10SignedChecked;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use std::{
    fmt::Write,
    sync::{Arc, PoisonError, RwLock},
};
use time::{Date, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Dynamically typed scalar bound to a statement parameter.
///
/// Every variant carries an `Option`: `None` is the typed NULL of that variant,
/// `Value::Null` is the untyped one.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int8(Option<i8>),
    Int16(Option<i16>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    UInt8(Option<u8>),
    UInt16(Option<u16>),
    UInt32(Option<u32>),
    UInt64(Option<u64>),
    Float32(Option<f32>),
    Float64(Option<f64>),
    Decimal(Option<Decimal>),
    Varchar(Option<String>),
    Blob(Option<Box<[u8]>>),
    Date(Option<Date>),
    Time(Option<Time>),
    Timestamp(Option<PrimitiveDateTime>),
    Uuid(Option<Uuid>),
}

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}
macro_rules! write_float {
    ($out:ident, $value:expr) => {{
        let value = $value;
        if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
            write_integer!($out, value as i64);
        } else {
            let mut buffer = ryu::Buffer::new();
            $out.push_str(buffer.format(value));
        }
    }};
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(
            self,
            Value::Null
                | Value::Boolean(None)
                | Value::Int8(None)
                | Value::Int16(None)
                | Value::Int32(None)
                | Value::Int64(None)
                | Value::UInt8(None)
                | Value::UInt16(None)
                | Value::UInt32(None)
                | Value::UInt64(None)
                | Value::Float32(None)
                | Value::Float64(None)
                | Value::Decimal(None)
                | Value::Varchar(None)
                | Value::Blob(None)
                | Value::Date(None)
                | Value::Time(None)
                | Value::Timestamp(None)
                | Value::Uuid(None)
        )
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Value::Int8(..)
                | Value::Int16(..)
                | Value::Int32(..)
                | Value::Int64(..)
                | Value::UInt8(..)
                | Value::UInt16(..)
                | Value::UInt32(..)
                | Value::UInt64(..)
        )
    }

    /// Textual form of the value, the raw input handed to a quoter. `None` for nulls.
    pub fn render_text(&self) -> Option<String> {
        let mut out = String::new();
        match self {
            Value::Boolean(Some(v)) => out.push(if *v { '1' } else { '0' }),
            Value::Int8(Some(v)) => write_integer!(out, *v),
            Value::Int16(Some(v)) => write_integer!(out, *v),
            Value::Int32(Some(v)) => write_integer!(out, *v),
            Value::Int64(Some(v)) => write_integer!(out, *v),
            Value::UInt8(Some(v)) => write_integer!(out, *v),
            Value::UInt16(Some(v)) => write_integer!(out, *v),
            Value::UInt32(Some(v)) => write_integer!(out, *v),
            Value::UInt64(Some(v)) => write_integer!(out, *v),
            Value::Float32(Some(v)) => write_float!(out, *v),
            Value::Float64(Some(v)) => write_float!(out, *v),
            Value::Decimal(Some(v)) => drop(write!(out, "{}", v)),
            Value::Varchar(Some(v)) => out.push_str(v),
            Value::Blob(Some(v)) => out.push_str(&String::from_utf8_lossy(v)),
            Value::Date(Some(v)) => write_date(&mut out, v),
            Value::Time(Some(v)) => write_time(&mut out, v),
            Value::Timestamp(Some(v)) => {
                write_date(&mut out, &v.date());
                out.push(' ');
                write_time(&mut out, &v.time());
            }
            Value::Uuid(Some(v)) => drop(write!(out, "{}", v)),
            _ => return None,
        }
        Some(out)
    }

    /// Integer form of the value, as a statement would see it when the parameter is declared integer.
    ///
    /// Floating point and decimal values are truncated toward zero and saturate at the `i64` bounds,
    /// booleans become `1` or `0`, textual values yield their leading signed digits (`0` when there
    /// are none).
    pub fn to_integer(&self) -> i64 {
        match self {
            Value::Boolean(Some(v)) => *v as i64,
            Value::Int8(Some(v)) => *v as i64,
            Value::Int16(Some(v)) => *v as i64,
            Value::Int32(Some(v)) => *v as i64,
            Value::Int64(Some(v)) => *v,
            Value::UInt8(Some(v)) => *v as i64,
            Value::UInt16(Some(v)) => *v as i64,
            Value::UInt32(Some(v)) => *v as i64,
            Value::UInt64(Some(v)) => i64::try_from(*v).unwrap_or(i64::MAX),
            Value::Float32(Some(v)) => *v as i64,
            Value::Float64(Some(v)) => *v as i64,
            Value::Decimal(Some(v)) => v.trunc().to_i64().unwrap_or(if v.is_sign_negative() {
                i64::MIN
            } else {
                i64::MAX
            }),
            Value::Blob(Some(v)) => leading_integer(v),
            _ => self
                .render_text()
                .map(|v| leading_integer(v.as_bytes()))
                .unwrap_or_default(),
        }
    }
}

fn leading_integer(input: &[u8]) -> i64 {
    let start = input
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(input.len());
    let input = &input[start..];
    let input = input.strip_prefix(b"+").unwrap_or(input);
    match i64::from_radix_10_signed_checked(input) {
        (Some(v), _) => v,
        (None, _) if input.starts_with(b"-") => i64::MIN,
        (None, _) => i64::MAX,
    }
}

fn write_date(out: &mut String, value: &Date) {
    let _ = write!(
        out,
        "{:04}-{:02}-{:02}",
        value.year(),
        value.month() as u8,
        value.day()
    );
}

fn write_time(out: &mut String, value: &Time) {
    let _ = write!(
        out,
        "{:02}:{:02}:{:02}",
        value.hour(),
        value.minute(),
        value.second()
    );
    let mut subsecond = value.nanosecond();
    if subsecond == 0 {
        return;
    }
    let mut width = 9;
    while subsecond % 10 == 0 {
        subsecond /= 10;
        width -= 1;
    }
    let _ = write!(out, ".{:0width$}", subsecond);
}

/// Shared handle to a value, for parameters bound by reference.
///
/// Cloning the handle aliases the same slot: a `set` through any clone is observed by every other
/// one. Interpolation reads the slot when it runs, not when the parameter was bound.
#[derive(Default, Debug, Clone)]
pub struct ValueRef(Arc<RwLock<Value>>);

impl ValueRef {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(Arc::new(RwLock::new(value.into())))
    }
    pub fn set(&self, value: impl Into<Value>) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = value.into();
    }
    pub fn get(&self) -> Value {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
    /// True if both handles alias the same slot.
    pub fn ptr_eq(&self, other: &ValueRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
