pub(crate) mod action;
pub(crate) mod derive;
