pub(crate) mod args;
pub(crate) mod prompt;

pub(crate) use args::{Cli, ListingOrder};
pub(crate) use prompt::prompt_request;
