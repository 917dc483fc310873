mod base;
mod printer;

pub use base::BindError;
pub(crate) use base::Parser;
pub(crate) use printer::Printer;
