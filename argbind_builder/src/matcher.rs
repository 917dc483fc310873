mod core;
mod model;
mod tag;

pub(crate) use self::core::{Matched, Scanner, UnknownTokens};
pub(crate) use model::Definitions;
