pub(crate) mod car;
pub(crate) mod config;
pub(crate) mod display;
pub(crate) mod input;
