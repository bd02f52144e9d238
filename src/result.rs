use crate::error::Mp3StegoError;

pub type Result<T> = std::result::Result<T, Mp3StegoError>;
