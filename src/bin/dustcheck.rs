// Dustcheck - Check_MK datasource program for luftdaten.info fine dust sensors
//
// Copyright 2022 Nick Pillitteri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use dustcheck::client::SensorClient;
use dustcheck::config::{self, Config};
use dustcheck::output;
use hyper::Client;
use std::{env, io, process};
use tracing::{Instrument, Level};

const DEFAULT_LOG_LEVEL: Level = Level::WARN;
const ARGUMENT_ERROR_STATUS: i32 = 2;

/// Datasource program to get data from a luftdaten.info fine dust sensor for Check_MK
///
/// Fetch the JSON status document of a fine dust sensor and print it in the
/// Check_MK agent format. Output will be printed in the <<<local>>> section,
/// one service per value the sensor reports.
///
/// Latitude and longitude are used to link to the sensor on the luftdaten.info
/// map and must be provided together. The opensense ID is used to link to the
/// sensor on opensensemap.org.
#[derive(Debug, Parser)]
#[command(name = "dustcheck", version = clap::crate_version!())]
struct DustcheckApplication {
    /// Address or IP of the sensor
    #[arg(short = 'H', long)]
    host: String,

    /// Opensense ID of the sensor
    #[arg(long = "opensenseid")]
    opensense_id: Option<String>,

    /// GPS latitude of the sensor
    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<String>,

    /// GPS longitude of the sensor
    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<String>,

    /// Print parameters and URLs before fetching sensor data
    #[arg(short = 'v')]
    verbose: bool,

    /// Logging verbosity, written to stderr. Allowed values are 'trace', 'debug',
    /// 'info', 'warn', and 'error' (case insensitive)
    #[arg(long, default_value_t = DEFAULT_LOG_LEVEL)]
    log_level: Level,
}

fn print_usage() {
    println!("{}", DustcheckApplication::command().render_help());
}

fn parse_args(args: &[String]) -> DustcheckApplication {
    if args.len() < 2 {
        println!("No arguments given!\n");
        print_usage();
        process::exit(ARGUMENT_ERROR_STATUS);
    }

    DustcheckApplication::try_parse_from(args).unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            print!("{}", e);
            process::exit(ARGUMENT_ERROR_STATUS)
        }
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args: Vec<String> = env::args_os().map(|a| a.to_string_lossy().into_owned()).collect();
    let opts = parse_args(&args);

    // Check_MK parses stdout so logs must go somewhere else
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(opts.log_level)
            .with_writer(io::stderr)
            .finish(),
    )
    .expect("failed to set tracing subscriber");

    if opts.verbose {
        config::write_debug_args(&args[1..], &mut io::stdout().lock())?;
    }

    let config = Config::new(
        opts.host,
        opts.opensense_id,
        opts.latitude,
        opts.longitude,
        opts.verbose,
    )
    .unwrap_or_else(|e| {
        println!("{}\n", e);
        print_usage();
        process::exit(ARGUMENT_ERROR_STATUS)
    });

    if config.verbose() {
        config.write_debug(&mut io::stdout().lock())?;
    }

    let client = SensorClient::new(Client::new(), &config).unwrap_or_else(|e| {
        tracing::error!(message = "invalid sensor address", host = config.host(), error = %e);
        process::exit(1)
    });

    let payload = client
        .fetch()
        .instrument(tracing::span!(Level::DEBUG, "sensor_fetch"))
        .await
        .unwrap_or_else(|e| {
            tracing::error!(
                message = "failed to fetch sensor data",
                url = %client.url(),
                kind = e.kind().as_label(),
                error = %e,
            );
            process::exit(1)
        });

    tracing::debug!(
        message = "fetched sensor data",
        values = payload.sensordatavalues.len(),
        software_version = %payload.software_version,
    );

    output::render(&config, &payload, clap::crate_version!(), io::stdout().lock())?;
    Ok(())
}
