use crate::{
    Binding, BoundParameter, DataType, Logger, ParamKey, ParameterSet, Params, Quoter, Result,
    Statement, Value, ValueRef, fields, find_marker, splice, truncate_long, write_slashed,
};
use log::Level;
use std::{
    fmt::{self, Display},
    sync::Arc,
};

/// A statement that remembers what was bound to it and can render the query with those values in
/// place of the markers.
///
/// The interpolated query is a debugging aid only: execution always goes through the wrapped
/// statement with the original query and real parameter binding.
///
/// ```rust,ignore
/// let mut statement = Interpolated::new(prepared)
///     .with_quoter(Arc::new(PostgresQuoter))
///     .with_logger(Arc::new(LogLogger::new()));
/// statement.bind_value(":id", 123, DataType::Int)?;
/// statement.execute(None)?;
/// assert_eq!(statement.full_query(), Some("SELECT * FROM users WHERE id = 123"));
/// ```
pub struct Interpolated<S: Statement> {
    statement: S,
    quoter: Option<Arc<dyn Quoter>>,
    logger: Option<Arc<dyn Logger>>,
    parameters: ParameterSet,
    full_query: Option<String>,
}

impl<S: Statement> Interpolated<S> {
    pub fn new(statement: S) -> Self {
        Self {
            statement,
            quoter: None,
            logger: None,
            parameters: ParameterSet::new(),
            full_query: None,
        }
    }

    /// Quote values the way the database does. Without a quoter, values are backslash escaped.
    pub fn with_quoter(mut self, quoter: Arc<dyn Quoter>) -> Self {
        self.quoter = Some(quoter);
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn statement(&self) -> &S {
        &self.statement
    }

    pub fn statement_mut(&mut self) -> &mut S {
        &mut self.statement
    }

    pub fn into_inner(self) -> S {
        self.statement
    }

    pub fn query(&self) -> &str {
        self.statement.query()
    }

    /// Parameters captured from the bind calls.
    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    /// The query computed by the last interpolation.
    pub fn full_query(&self) -> Option<&str> {
        self.full_query.as_deref()
    }

    /// Bind a parameter by reference: the value is read when interpolating and executing.
    ///
    /// Nothing is captured when the statement rejects the bind.
    pub fn bind_param(
        &mut self,
        key: impl Into<ParamKey>,
        value: &ValueRef,
        data_type: DataType,
    ) -> Result<&mut Self> {
        self.bind_binding(key.into(), Binding::Reference(value.clone()), data_type, None)
    }

    /// Like `bind_param`, also passing the maximum length of the parameter to the statement.
    pub fn bind_param_with_length(
        &mut self,
        key: impl Into<ParamKey>,
        value: &ValueRef,
        data_type: DataType,
        length: usize,
    ) -> Result<&mut Self> {
        self.bind_binding(
            key.into(),
            Binding::Reference(value.clone()),
            data_type,
            Some(length),
        )
    }

    /// Bind a copy of the value.
    pub fn bind_value(
        &mut self,
        key: impl Into<ParamKey>,
        value: impl Into<Value>,
        data_type: DataType,
    ) -> Result<&mut Self> {
        self.bind_binding(key.into(), Binding::Value(value.into()), data_type, None)
    }

    /// Bind a copy of the value at the next position, with the type inferred from the value.
    pub fn bind(&mut self, value: impl Into<Value>) -> Result<&mut Self> {
        let value = value.into();
        let data_type = DataType::of(&value);
        let key = ParamKey::Index(self.parameters.next_index());
        self.bind_binding(key, Binding::Value(value), data_type, None)
    }

    /// A parameter is captured only once the statement accepted it.
    fn bind_binding(
        &mut self,
        key: ParamKey,
        binding: Binding,
        data_type: DataType,
        length: Option<usize>,
    ) -> Result<&mut Self> {
        self.statement.bind(&key, &binding, data_type, length)?;
        if let Some(logger) = &self.logger {
            let value = binding
                .current()
                .render_text()
                .unwrap_or_else(|| "NULL".into());
            logger.log(
                Level::Debug,
                "Bound parameter {param} as {datatype}: {value}",
                fields![param = key, datatype = data_type, value = value],
            );
        }
        self.parameters
            .insert(key, BoundParameter::new(binding, data_type));
        Ok(self)
    }

    /// Remove all the previously bound values, here and in the statement.
    pub fn clear_bindings(&mut self) -> Result<&mut Self> {
        self.parameters.clear();
        self.statement.clear_bindings()?;
        Ok(self)
    }

    /// Render the query with the values in place of the markers and remember it as the full query.
    ///
    /// Bound parameters take precedence, `params` is only used when nothing was bound. Parameters
    /// are substituted in key order, each one replacing the first free occurrence of its marker.
    /// Parameters without a marker and markers without a parameter are left alone. Without a
    /// quoter, a single warning names every parameter that was backslash escaped.
    pub fn interpolate(&mut self, params: Option<&Params>) -> String {
        let explicit = match params {
            Some(params) if self.parameters.is_empty() => params.to_parameter_set(),
            _ => ParameterSet::new(),
        };
        let parameters = if self.parameters.is_empty() {
            &explicit
        } else {
            &self.parameters
        };
        let result = self.substitute(parameters);
        self.full_query = Some(result.clone());
        result
    }

    fn substitute(&self, parameters: &ParameterSet) -> String {
        let query = self.statement.query();
        if parameters.is_empty() {
            return query.to_owned();
        }
        let mut consumed = Vec::with_capacity(parameters.len());
        let mut replacements = Vec::with_capacity(parameters.len());
        let mut slashed = Vec::new();
        for (key, parameter) in parameters {
            let Some(range) = find_marker(query, key.marker(), &consumed) else {
                continue;
            };
            let (value, fallback) = self.prepare_literal(&parameter.value(), parameter.data_type);
            if fallback {
                slashed.push(key.to_string());
            }
            consumed.push(range.clone());
            replacements.push((range, value));
        }
        if !slashed.is_empty() {
            self.warn_slashed(&slashed.join(", "));
        }
        splice(query, replacements)
    }

    /// Literal for `value` as it appears in the interpolated query.
    pub fn prepare(&self, key: &ParamKey, value: &Value, data_type: DataType) -> String {
        let (literal, fallback) = self.prepare_literal(value, data_type);
        if fallback {
            self.warn_slashed(key);
        }
        literal
    }

    /// The literal and whether it was backslash escaped for lack of a quoter.
    fn prepare_literal(&self, value: &Value, data_type: DataType) -> (String, bool) {
        let Some(text) = value.render_text().filter(|_| data_type != DataType::Null) else {
            return ("NULL".into(), false);
        };
        let Some(quoter) = &self.quoter else {
            let mut out = String::with_capacity(text.len() + 2);
            out.push('\'');
            write_slashed(&mut out, &text);
            out.push('\'');
            return (out, true);
        };
        let literal = match (data_type, value) {
            (DataType::Int, _) => {
                let mut buffer = itoa::Buffer::new();
                buffer.format(value.to_integer()).to_owned()
            }
            (DataType::Lob, Value::Blob(Some(v))) => quoter.quote_blob(v),
            _ => quoter.quote(&text),
        };
        (literal, false)
    }

    fn warn_slashed(&self, param: &dyn Display) {
        if let Some(logger) = &self.logger {
            logger.log(
                Level::Warn,
                "No quoter available, backslash escaped {param}: the query is for reading only",
                fields![param = param],
            );
        }
    }

    /// Interpolate the query, for logging, then execute the statement with its real bindings.
    ///
    /// An execution error is logged with the interpolated query and returned unchanged.
    pub fn execute(&mut self, params: Option<Params>) -> Result<S::Output> {
        let query = self.interpolate(params.as_ref());
        match self.statement.execute(params.as_ref()) {
            Ok(output) => {
                if let Some(logger) = &self.logger {
                    logger.log(
                        Level::Info,
                        "Executed query: {query}",
                        fields![query = truncate_long!(query)],
                    );
                }
                Ok(output)
            }
            Err(error) => {
                if let Some(logger) = &self.logger {
                    logger.log(
                        Level::Error,
                        "Query failed: {query}\n{exception}",
                        fields![
                            query = truncate_long!(query),
                            exception = format_args!("{:#}", error)
                        ],
                    );
                }
                Err(error)
            }
        }
    }
}

impl<S: Statement> Display for Interpolated<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = self.full_query().unwrap_or(self.statement.query());
        write!(f, "{}", truncate_long!(query))
    }
}
