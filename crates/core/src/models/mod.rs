pub mod breakdown;
pub mod category;
pub mod filters;
pub mod period;
pub mod summary;
pub mod transaction;
pub mod wallet;
