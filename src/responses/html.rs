use crate::errors::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::new(markup.into_string()))
        .unwrap();

    Ok(resp)
}

/// 303 redirect, used after form submissions.
pub fn see_other(location: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::new(""))
        .unwrap();

    Ok(resp)
}
