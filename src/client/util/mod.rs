pub mod api;
pub mod paging;
pub mod query;
