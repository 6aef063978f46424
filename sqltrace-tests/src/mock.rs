use sqltrace_core::{Binding, DataType, Error, ParamKey, Params, Result, Statement, Value};
use std::collections::BTreeMap;

/// A bind call as the statement received it.
#[derive(Debug, Clone)]
pub struct BindCall {
    pub key: ParamKey,
    pub binding: Binding,
    pub data_type: DataType,
    pub length: Option<usize>,
}

/// Values the statement executed with, keyed like the markers they fill.
pub type Executed = BTreeMap<ParamKey, Value>;

/// In memory statement standing in for a driver.
///
/// Executing resolves the bindings at that moment (references are read, not the value they had
/// when bound) or takes the explicit parameters, and returns them. It can be scripted to fail.
#[derive(Default)]
pub struct MockStatement {
    query: String,
    binds: Vec<BindCall>,
    bound: BTreeMap<ParamKey, Binding>,
    executions: Vec<Option<Params>>,
    failure: Option<Box<dyn Fn() -> Error + Send + Sync>>,
    cleared: usize,
}

impl MockStatement {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
    /// Every execution fails with the error produced by `failure`.
    pub fn failing(
        query: impl Into<String>,
        failure: impl Fn() -> Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            failure: Some(Box::new(failure)),
            ..Self::new(query)
        }
    }
    pub fn binds(&self) -> &[BindCall] {
        &self.binds
    }
    pub fn executions(&self) -> &[Option<Params>] {
        &self.executions
    }
    pub fn cleared(&self) -> usize {
        self.cleared
    }
}

impl Statement for MockStatement {
    type Output = Executed;

    fn query(&self) -> &str {
        &self.query
    }

    fn bind(
        &mut self,
        key: &ParamKey,
        binding: &Binding,
        data_type: DataType,
        length: Option<usize>,
    ) -> Result<()> {
        self.binds.push(BindCall {
            key: key.clone(),
            binding: binding.clone(),
            data_type,
            length,
        });
        self.bound.insert(key.clone(), binding.clone());
        Ok(())
    }

    fn execute(&mut self, params: Option<&Params>) -> Result<Executed> {
        self.executions.push(params.cloned());
        if let Some(failure) = &self.failure {
            return Err(failure());
        }
        Ok(match params {
            Some(params) if self.bound.is_empty() => params
                .to_parameter_set()
                .iter()
                .map(|(k, v)| (k.clone(), v.value()))
                .collect(),
            _ => self
                .bound
                .iter()
                .map(|(k, v)| (k.clone(), v.current()))
                .collect(),
        })
    }

    fn clear_bindings(&mut self) -> Result<()> {
        self.bound.clear();
        self.cleared += 1;
        Ok(())
    }
}
