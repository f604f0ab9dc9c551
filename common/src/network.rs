pub mod endpoint;
pub mod host;
pub mod probe;
pub mod target;
