pub mod house_card;
pub mod house_details;

// Re-exports for convenience
pub use house_card::{house_card, DetailsState, HouseCardVm};
pub use house_details::house_details;
