pub(crate) mod header;
pub(crate) mod session;
pub(crate) mod spy;
pub(crate) mod viewport;
