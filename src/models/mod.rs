//! Data models

pub mod outcome;
pub mod session;
pub mod response;

pub use outcome::*;
pub use session::*;
pub use response::*;
