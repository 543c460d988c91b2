pub mod access_log;
pub mod headers;
pub mod identity;
