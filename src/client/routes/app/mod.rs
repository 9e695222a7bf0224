pub mod launch_detail;
pub mod launches;

pub use launch_detail::LaunchDetail;
pub use launches::Launches;
