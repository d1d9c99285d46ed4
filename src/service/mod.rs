pub mod houses;
pub mod service_error;

pub use houses::HouseService;
pub use service_error::ServiceError;
