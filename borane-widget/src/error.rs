use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Response pool must contain at least one reply")]
    EmptyPool,

    #[error("Reply #{0} in the response pool is blank")]
    BlankReply(usize),
}
