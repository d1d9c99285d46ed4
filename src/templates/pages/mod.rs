pub mod marketplace;
pub mod messages;
pub mod new_house;

pub use marketplace::marketplace_page;
pub use messages::messages_page;
pub use new_house::new_house_page;
