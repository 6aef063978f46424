use crate::{DataType, Value, ValueRef};
use std::{
    collections::{BTreeMap, btree_map},
    fmt::{self, Display},
};

/// Identifies a parameter: a 1-based position for `?` markers or a name for `:name` markers.
///
/// Names always carry the leading colon, whether or not the caller supplied it. Keys are totally
/// ordered: positions numerically, names lexically, positions before names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamKey {
    Index(u64),
    Name(String),
}

impl ParamKey {
    pub fn name(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        if name.starts_with(':') {
            ParamKey::Name(name.to_owned())
        } else {
            ParamKey::Name(format!(":{name}"))
        }
    }
    /// Marker text this key replaces in a query.
    pub fn marker(&self) -> &str {
        match self {
            ParamKey::Index(..) => "?",
            ParamKey::Name(name) => name,
        }
    }
}

impl From<u64> for ParamKey {
    fn from(value: u64) -> Self {
        ParamKey::Index(value)
    }
}

impl From<u32> for ParamKey {
    fn from(value: u32) -> Self {
        ParamKey::Index(value as u64)
    }
}

impl From<usize> for ParamKey {
    fn from(value: usize) -> Self {
        ParamKey::Index(value as u64)
    }
}

impl From<i32> for ParamKey {
    fn from(value: i32) -> Self {
        ParamKey::Index(value.max(0) as u64)
    }
}

/// Strings made of digits only are positions, anything else is a name.
impl From<&str> for ParamKey {
    fn from(value: &str) -> Self {
        if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = value.parse() {
                return ParamKey::Index(index);
            }
        }
        ParamKey::name(value)
    }
}

impl From<String> for ParamKey {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<&ParamKey> for ParamKey {
    fn from(value: &ParamKey) -> Self {
        value.clone()
    }
}

impl Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKey::Index(index) => write!(f, "{index}"),
            ParamKey::Name(name) => f.write_str(name),
        }
    }
}

/// How a parameter holds its value.
#[derive(Debug, Clone)]
pub enum Binding {
    /// Copied when bound.
    Value(Value),
    /// Read when used.
    Reference(ValueRef),
}

impl Binding {
    pub fn current(&self) -> Value {
        match self {
            Binding::Value(v) => v.clone(),
            Binding::Reference(v) => v.get(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BoundParameter {
    pub binding: Binding,
    pub data_type: DataType,
}

impl BoundParameter {
    pub fn new(binding: Binding, data_type: DataType) -> Self {
        Self { binding, data_type }
    }
    pub fn value(&self) -> Value {
        self.binding.current()
    }
}

/// Parameters of a statement, iterated in key order. Inserting an existing key replaces it.
#[derive(Default, Debug, Clone)]
pub struct ParameterSet(BTreeMap<ParamKey, BoundParameter>);

impl ParameterSet {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn insert(&mut self, key: ParamKey, parameter: BoundParameter) -> Option<BoundParameter> {
        self.0.insert(key, parameter)
    }
    pub fn get(&self, key: &ParamKey) -> Option<&BoundParameter> {
        self.0.get(key)
    }
    pub fn iter(&self) -> btree_map::Iter<'_, ParamKey, BoundParameter> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn clear(&mut self) {
        self.0.clear()
    }
    /// Next free position, one past the highest bound one.
    pub fn next_index(&self) -> u64 {
        self.0
            .keys()
            .filter_map(|k| match k {
                ParamKey::Index(i) => Some(*i),
                ParamKey::Name(..) => None,
            })
            .max()
            .map_or(1, |i| i + 1)
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = (&'a ParamKey, &'a BoundParameter);
    type IntoIter = btree_map::Iter<'a, ParamKey, BoundParameter>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parameters supplied directly to `interpolate` or `execute` instead of being bound.
#[derive(Debug, Clone, PartialEq)]
pub enum Params {
    /// Values for `?` markers, first value is position 1.
    Positional(Vec<Value>),
    /// Values for `:name` markers, with or without the leading colon. Names made of digits only
    /// are positions.
    Named(Vec<(String, Value)>),
}

impl Params {
    pub fn is_empty(&self) -> bool {
        match self {
            Params::Positional(v) => v.is_empty(),
            Params::Named(v) => v.is_empty(),
        }
    }
    pub fn len(&self) -> usize {
        match self {
            Params::Positional(v) => v.len(),
            Params::Named(v) => v.len(),
        }
    }
    /// Keyed parameters, each declared with the type inferred from its value.
    pub fn to_parameter_set(&self) -> ParameterSet {
        let parameter = |value: &Value| {
            BoundParameter::new(Binding::Value(value.clone()), DataType::of(value))
        };
        let mut result = ParameterSet::new();
        match self {
            Params::Positional(values) => {
                for (i, value) in values.iter().enumerate() {
                    result.insert(ParamKey::Index(i as u64 + 1), parameter(value));
                }
            }
            Params::Named(values) => {
                for (name, value) in values {
                    result.insert(ParamKey::from(name.as_str()), parameter(value));
                }
            }
        }
        result
    }
}

impl From<Vec<Value>> for Params {
    fn from(value: Vec<Value>) -> Self {
        Params::Positional(value)
    }
}

impl From<Vec<(String, Value)>> for Params {
    fn from(value: Vec<(String, Value)>) -> Self {
        Params::Named(value)
    }
}

/// Build [`Params`], positional from a list of values or named from `name => value` pairs.
///
/// ```rust
/// use sqltrace_core::{Params, params};
/// assert!(matches!(params![1, 1, "test string"], Params::Positional(..)));
/// assert!(matches!(params![":id" => 1, "name" => "Bob"], Params::Named(..)));
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::Positional(::std::vec::Vec::new())
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::Params::Named(::std::vec![$((
            ::std::string::String::from($name),
            $crate::Value::from($value),
        )),+])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Params::Positional(::std::vec![$($crate::Value::from($value)),+])
    };
}
