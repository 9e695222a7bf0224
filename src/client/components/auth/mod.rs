pub mod layout;
pub mod navbar;

pub use layout::ProtectedLayout;
pub use navbar::AuthNavbar;
