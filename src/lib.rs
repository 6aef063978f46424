//! Render a prepared SQL statement and its bound parameters into the query an engineer can paste
//! into a database console.
//!
//! ```rust
//! use sqltrace::{DataType, GenericQuoter, Interpolated, Params, Statement, Result, ParamKey, Binding};
//! use std::sync::Arc;
//!
//! struct Prepared(&'static str);
//! impl Statement for Prepared {
//!     type Output = ();
//!     fn query(&self) -> &str {
//!         self.0
//!     }
//!     fn bind(&mut self, _: &ParamKey, _: &Binding, _: DataType, _: Option<usize>) -> Result<()> {
//!         Ok(())
//!     }
//!     fn execute(&mut self, _: Option<&Params>) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut statement = Interpolated::new(Prepared("SELECT * FROM users WHERE id = :id AND name = :name"))
//!     .with_quoter(Arc::new(GenericQuoter));
//! statement.bind_value("id", 7, DataType::Int).unwrap();
//! statement.bind_value(":name", "O'Brien", DataType::Str).unwrap();
//! assert_eq!(
//!     statement.interpolate(None),
//!     "SELECT * FROM users WHERE id = 7 AND name = 'O''Brien'"
//! );
//! ```
pub use sqltrace_core::*;
