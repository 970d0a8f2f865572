//! Domain entities - the records kept in the key-value store.

mod email;
mod rate_bucket;
mod signup;

pub use email::{is_valid_email, normalize_email};
pub use rate_bucket::RateBucket;
pub use signup::{SignupEvent, SignupRecord};
