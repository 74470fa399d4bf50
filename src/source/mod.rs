mod loader;

pub(crate) use loader::{DocumentPath, list_documents};
