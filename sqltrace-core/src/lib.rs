mod as_value;
mod data_type;
mod interpolated;
mod logger;
mod marker;
mod param;
mod quote;
mod statement;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use data_type::*;
pub use interpolated::*;
pub use logger::*;
pub use marker::*;
pub use param::*;
pub use quote::*;
pub use statement::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
