pub(crate) mod b;
pub(crate) mod escape;
