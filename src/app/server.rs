// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use tokio::net::TcpListener;

use crate::app::home;
use crate::app::preview;
use crate::app::routine;
use crate::app::rules;
use crate::app::screen::Screen;
use crate::app::state::MutableState;
use crate::app::state::ServerState;
use crate::config::Config;
use crate::error::Fallible;
use crate::forecast::countdown::COUNTDOWN_PERIOD;
use crate::forecast::countdown::Countdown;
use crate::types::personality::Personality;

pub async fn start_server(config: Config) -> Fallible<()> {
    let addr: SocketAddr = config.bind.parse()?;

    let state = ServerState {
        theme: config.theme,
        weather: config.weather.clone(),
        mutable: Arc::new(Mutex::new(MutableState::new(Personality::default()))),
    };

    // Until the forecast arrives the panel shows a loading state. A failed
    // fetch is retried when a screen showing the panel is opened again.
    state.spawn_forecast();

    let countdown_state = state.mutable.clone();
    let countdown = Countdown::spawn(COUNTDOWN_PERIOD, move |hours| {
        countdown_state.lock().unwrap().hours_until_wake = hours;
    });

    let app = router(state);
    let listener = TcpListener::bind(addr).await?;
    let url = format!("http://{addr}/");
    log::info!("Serving on {url}");
    if config.open_browser {
        if let Err(e) = open::that(&url) {
            log::warn!("Could not open a browser: {e}");
        }
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    countdown.cancel().await;
    log::debug!("Server stopped.");
    Ok(())
}

fn router(state: ServerState) -> Router {
    let mut app = Router::new();
    for screen in Screen::ALL {
        let path = screen.path();
        app = match screen {
            Screen::Home => app.route(path, get(home::get_handler).post(home::post_handler)),
            Screen::Routine => {
                app.route(path, get(routine::get_handler).post(routine::post_handler))
            }
            Screen::Rules => app.route(path, get(rules::get_handler).post(rules::post_handler)),
            Screen::Preview => {
                app.route(path, get(preview::get_handler).post(preview::post_handler))
            }
        };
    }
    app.route("/script.js", get(script))
        .route("/style.css", get(stylesheet))
        .fallback(not_found_handler)
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    log::debug!("Shutting down.");
}

async fn script() -> (StatusCode, [(HeaderName, &'static str); 1], &'static str) {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/javascript")],
        include_str!("script.js"),
    )
}

async fn stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}
