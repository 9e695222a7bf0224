pub mod auth;
pub mod launch;
pub mod navbar;
pub mod page;
pub mod starlog_title;

pub use navbar::Navbar;
pub use page::Page;
pub use starlog_title::StarlogTitleButton;
