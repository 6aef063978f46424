use crate::{Binding, DataType, Interpolated, ParamKey, Params, Result};

/// The prepared statement of a driver, the one that actually runs against the database.
///
/// It owns the query text, receives every bind and executes with real parameter binding.
pub trait Statement {
    /// Whatever a successful execution produces (rows, affected counts...).
    type Output;

    /// The query exactly as it was prepared.
    fn query(&self) -> &str;

    /// Bind a parameter. A [`Binding::Reference`] must be read when the statement executes.
    fn bind(
        &mut self,
        key: &ParamKey,
        binding: &Binding,
        data_type: DataType,
        length: Option<usize>,
    ) -> Result<()>;

    /// Run with the bound parameters, or with `params` when given.
    fn execute(&mut self, params: Option<&Params>) -> Result<Self::Output>;

    /// Remove all the previously bound values.
    fn clear_bindings(&mut self) -> Result<()> {
        Ok(())
    }

    /// Wrap this statement so that its bindings can be interpolated into the query.
    fn interpolated(self) -> Interpolated<Self>
    where
        Self: Sized,
    {
        Interpolated::new(self)
    }
}

impl<S: Statement + ?Sized> Statement for &mut S {
    type Output = S::Output;

    fn query(&self) -> &str {
        (**self).query()
    }
    fn bind(
        &mut self,
        key: &ParamKey,
        binding: &Binding,
        data_type: DataType,
        length: Option<usize>,
    ) -> Result<()> {
        (**self).bind(key, binding, data_type, length)
    }
    fn execute(&mut self, params: Option<&Params>) -> Result<Self::Output> {
        (**self).execute(params)
    }
    fn clear_bindings(&mut self) -> Result<()> {
        (**self).clear_bindings()
    }
}
