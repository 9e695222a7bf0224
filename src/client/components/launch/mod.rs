pub mod launchpad_card;
pub mod rocket_card;
pub mod status_badge;

pub use launchpad_card::LaunchpadCard;
pub use rocket_card::RocketCard;
pub use status_badge::StatusBadge;
