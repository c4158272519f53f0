use astra::Server;
use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};

use crate::app::App;
use crate::config::Config;
use crate::db::connection::init_db;
use crate::router::handle;
use crate::templates::components::error::error_status;

mod app;
mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod mailer;
mod responses;
mod router;
mod routes;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let cfg = Config::parse();
    let addr = cfg.addr;
    let max_workers = cfg.max_workers;
    let app = App::new(cfg);

    if let Err(e) = init_db(&app.db) {
        error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    info!("starting server at {} ({} workers)", app.cfg.base_url, max_workers);

    let server = Server::bind(&addr).max_workers(max_workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();
        match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                if error_status(&err) >= 500 {
                    error!("{method} {path}: {err}");
                } else {
                    warn!("{method} {path}: {err}");
                }
                templates::html_error_response(&err)
            }
        }
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    info!("server shut down");
}
