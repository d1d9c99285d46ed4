// service/houses.rs
use crate::domain::{House, NewHouse};
use crate::messages::MessageLog;
use crate::service::ServiceError;
use reqwest::blocking::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the remote listings API.
///
/// The `try_` methods surface failures as `ServiceError`; the plain
/// methods are the adapters views call, absorbing every failure into
/// a benign fallback (empty list / `None`) so rendering code never
/// carries error-handling logic. Every call reports its outcome to
/// the message log; failures additionally go to the console.
pub struct HouseService {
    client: Client,
    base_url: String,
    messages: MessageLog,
}

impl HouseService {
    pub fn new(base_url: impl Into<String>, messages: MessageLog) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            messages,
        })
    }

    /// GET `<base>/kits`. Nothing is cached; every call issues a
    /// fresh request.
    pub fn try_get_houses(&self) -> Result<Vec<House>, ServiceError> {
        let url = format!("{}/kits", self.base_url);
        let houses = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .json::<Vec<House>>()?;
        Ok(houses)
    }

    /// Fetch all listings, falling back to an empty list on failure.
    pub fn get_houses(&self) -> Vec<House> {
        match self.try_get_houses() {
            Ok(houses) => {
                self.log("fetched all houses");
                houses
            }
            Err(e) => {
                log::error!("{e}");
                self.log(format!("getHouses failed: {e}"));
                Vec::new()
            }
        }
    }

    /// POST `<base>/kits/create`. The returned record carries the
    /// server-assigned id.
    pub fn try_add_house(&self, house: &NewHouse) -> Result<House, ServiceError> {
        let url = format!("{}/kits/create", self.base_url);
        let created = self
            .client
            .post(url)
            .json(house)
            .send()?
            .error_for_status()?
            .json::<House>()?;
        Ok(created)
    }

    /// Create a listing, falling back to `None` on failure.
    pub fn add_house(&self, house: &NewHouse) -> Option<House> {
        match self.try_add_house(house) {
            Ok(created) => {
                self.log(format!("Added Kit: id={}", created.id));
                Some(created)
            }
            Err(e) => {
                log::error!("{e}");
                self.log(format!("addHoue failed: {e}")); // sic
                None
            }
        }
    }

    fn log(&self, message: impl AsRef<str>) {
        self.messages.add(format!("HouseService: {}", message.as_ref()));
    }
}
