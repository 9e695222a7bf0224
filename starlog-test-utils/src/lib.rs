pub mod error;
pub mod fixtures;
pub mod session;

pub use error::TestError;
pub use session::test_session;

pub mod prelude {
    pub use crate::{fixtures::spacex::factory, test_session, TestError};
}
