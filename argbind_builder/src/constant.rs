pub(crate) const TAG_SEPARATOR: char = '|';
pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const SHORT_PREFIX: &str = "-";

pub(crate) const OPTIONAL_PREFIX: &str = "(Optional)";
pub(crate) const DEFAULT_DESCRIPTION: &str = "Available arguments:";
