use http::request::Parts;

use crate::app::{now_unix, App};
use crate::errors::ResultResp;
use crate::responses::html_response;
use crate::routes::read_session;
use crate::templates::pages::home_page;

pub fn show(app: &App, parts: &Parts) -> ResultResp {
    let session = read_session(app, parts, now_unix())?;
    html_response(home_page(session.user()))
}
