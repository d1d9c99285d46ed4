use crate::domain::NewHouse;
use crate::errors::{ResultResp, ServerError};
use crate::messages::MessageLog;
use crate::responses::{html_response, see_other};
use crate::service::HouseService;
use crate::templates;
use crate::templates::components::{house_card, DetailsState, HouseCardVm};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

/// Everything a request handler can reach.
pub struct AppState {
    pub service: HouseService,
    pub messages: MessageLog,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let houses = state.service.get_houses();
            html_response(templates::pages::marketplace_page(&houses))
        }

        ("GET", "/houses/new") => html_response(templates::pages::new_house_page()),

        ("POST", "/houses") => {
            let form = parse_form(req)?;
            let house = new_house_from_form(&form)?;
            // Failure is absorbed by the service; either way the user
            // lands back on the marketplace.
            let _ = state.service.add_house(&house);
            see_other("/")
        }

        ("GET", "/messages") => {
            html_response(templates::pages::messages_page(&state.messages.entries()))
        }

        // htmx swap endpoint: re-render one card in the requested state.
        ("GET", p) if p.starts_with("/houses/") && p.ends_with("/card") => {
            let id = card_path_id(p).ok_or(ServerError::NotFound)?;
            let details = req
                .uri()
                .query()
                .and_then(query_details)
                .unwrap_or(DetailsState::Collapsed);

            let house = state
                .service
                .get_houses()
                .into_iter()
                .find(|h| h.id == id)
                .ok_or(ServerError::NotFound)?;

            html_response(house_card(&HouseCardVm { house, details }))
        }

        _ => Err(ServerError::NotFound),
    }
}

fn card_path_id(path: &str) -> Option<i64> {
    path.strip_prefix("/houses/")?
        .strip_suffix("/card")?
        .parse()
        .ok()
}

fn query_details(query: &str) -> Option<DetailsState> {
    parse_query(query)
        .get("details")
        .and_then(|v| DetailsState::from_query(v))
}

fn parse_query(query: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

fn parse_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    let mut body = req.into_body();
    body.reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

    Ok(url::form_urlencoded::parse(&buf).into_owned().collect())
}

fn new_house_from_form(form: &HashMap<String, String>) -> Result<NewHouse, ServerError> {
    let text = |key: &str| -> Result<String, ServerError> {
        form.get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ServerError::BadRequest(format!("missing field: {key}")))
    };
    let int = |key: &str| -> Result<i64, ServerError> {
        text(key)?
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("{key} must be a whole number")))
    };
    let money = |key: &str| -> Result<f64, ServerError> {
        text(key)?
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("{key} must be a number")))
    };

    // Tags arrive as one comma-separated input.
    let tags = form
        .get("tags")
        .map(|raw| {
            raw.split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Ok(NewHouse {
        address: text("address")?,
        zipcode: int("zipcode")?,
        city: text("city")?,
        property_value: money("property_value")?,
        money_raised: money("money_raised")?,
        asking_price: money("asking_price")?,
        tags,
    })
}
