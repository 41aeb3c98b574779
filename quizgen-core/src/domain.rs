pub mod difficulty;
pub mod question;
pub mod quiz_type;
pub mod request;
pub mod topic;

pub use difficulty::*;
pub use question::*;
pub use quiz_type::*;
pub use request::*;
pub use topic::*;
