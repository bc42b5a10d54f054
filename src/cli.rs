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

use clap::Parser;

use crate::app::server::start_server;
use crate::cmd::check::check_config;
use crate::cmd::forecast::ForecastFormat;
use crate::cmd::forecast::print_forecast;
use crate::config::Config;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the companion UI.
    Serve {
        /// Path to the config file. Defaults to `mornova.toml` if present.
        #[arg(long)]
        config: Option<String>,
        /// Don't open the UI in a browser.
        #[arg(long)]
        no_browser: bool,
    },
    /// Print tomorrow's 7 AM forecast.
    Forecast {
        /// Path to the config file.
        #[arg(long)]
        config: Option<String>,
        /// Output format.
        #[arg(long, default_value_t = ForecastFormat::Text)]
        format: ForecastFormat,
    },
    /// Check the config file for errors.
    Check {
        /// Path to the config file.
        #[arg(long)]
        config: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve { config, no_browser } => {
            let mut config = Config::load(config)?;
            if no_browser {
                config.open_browser = false;
            }
            start_server(config).await
        }
        Command::Forecast { config, format } => {
            let config = Config::load(config)?;
            print_forecast(&config, format).await
        }
        Command::Check { config } => check_config(config),
    }
}
