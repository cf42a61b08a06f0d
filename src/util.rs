pub(crate) mod str;
pub(crate) mod sync;
pub(crate) mod uri;
