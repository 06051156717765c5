pub(crate) mod drive;
pub(crate) mod replay;
pub(crate) mod script;
