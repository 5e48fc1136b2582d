use crate::error::CloakError;

pub type Result<T> = std::result::Result<T, CloakError>;
