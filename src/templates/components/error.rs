use astra::{Body, Response, ResponseBuilder};
use maud::html;

use crate::errors::ServerError;
use crate::templates::desktop_layout;

pub fn error_status(err: &ServerError) -> u16 {
    match err {
        ServerError::NotFound => 404,
        ServerError::BadRequest(_) => 400,
        ServerError::Unauthorized(_) => 401,
        ServerError::MailError(_) => 502,
        ServerError::DbError(_) | ServerError::InternalError => 500,
    }
}

/// Convert a ServerError into an HTML error page.
/// Store and mail details stay in the log, not on the page.
pub fn html_error_response(err: &ServerError) -> Response {
    let status = error_status(err);
    let message = match err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) | ServerError::Unauthorized(msg) => msg.clone(),
        ServerError::MailError(_) => "We couldn't send your sign-in email. Please try again.".to_string(),
        ServerError::DbError(_) | ServerError::InternalError => "Internal Server Error".to_string(),
    };

    let page = desktop_layout(
        &format!("Error {status}"),
        None,
        html! {
            main {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn db_details_are_not_leaked() {
        let resp = html_error_response(&ServerError::DbError("no such table: secrets".into()));
        assert_eq!(resp.status(), 500);

        let mut body = String::new();
        resp.into_body().reader().read_to_string(&mut body).unwrap();
        assert!(!body.contains("secrets"));
    }

    #[test]
    fn statuses() {
        assert_eq!(error_status(&ServerError::NotFound), 404);
        assert_eq!(error_status(&ServerError::BadRequest("x".into())), 400);
        assert_eq!(error_status(&ServerError::Unauthorized("x".into())), 401);
        assert_eq!(error_status(&ServerError::MailError("x".into())), 502);
    }
}
