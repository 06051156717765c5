pub(crate) mod sprite;
