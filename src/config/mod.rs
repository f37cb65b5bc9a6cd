pub(crate) mod load;
pub(crate) mod model;
pub(crate) mod settings;
pub(crate) mod validate;
