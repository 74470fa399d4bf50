mod counter;

pub(crate) use counter::TokenCounter;
