pub(crate) mod buffer;
pub(crate) mod convert;
pub(crate) mod format;
pub(crate) mod lock;
