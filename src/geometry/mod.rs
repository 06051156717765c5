pub(crate) mod heading;
pub(crate) mod path;
