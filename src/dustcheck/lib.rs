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

//! Check_MK datasource program for luftdaten.info fine dust sensors.
//!
//! ## Features
//!
//! Dustcheck reads the JSON status document served by a [luftdaten.info](https://luftdaten.info/en/construction-manual/)
//! fine dust sensor at `http://$HOST/data.json` and prints it in the `<<<local>>>` section
//! format understood by [Check_MK](https://checkmk.com/). It is meant to be run by Check_MK
//! as an "individual program call instead of agent access", once per check interval.
//!
//! The following services are produced:
//!
//! * `Links` - Links to the sensor on the luftdaten.info map, opensensemap.org, and its own web interface.
//! * `Age` - Seconds since the sensor last took a measurement.
//! * `Software_Version` - Firmware version of the sensor.
//! * One service per value reported by the sensor, e.g. `SDS_P1`, `SDS_P2`, `BME280_temperature`,
//!   `signal`. PM10 and PM2.5 concentrations warn above `50` ug/m3.
//!
//! ## Build
//!
//! `dustcheck` is a Rust program and must be built from source using a [Rust toolchain](https://rustup.rs/).
//!
//! ```text
//! cargo build --release
//! ```
//!
//! ## Install
//!
//! Copy the resulting binary to the `local/bin` directory of your Check_MK site.
//!
//! ```text
//! cp target/release/dustcheck /omd/sites/$SITE/local/bin/dustcheck
//! ```
//!
//! ### Check_MK
//!
//! Under WATO, create a rule for "Datasource Programs" -> "Individual program call instead of
//! agent access" with a command line like the one below. The latitude, longitude, and opensense
//! ID are optional and only used to build the links service. Latitude and longitude must be given
//! together. If you store them as host attributes, enable "Add as custom macro" for each.
//!
//! ```text
//! dustcheck --host $HOSTADDRESS$ --opensenseid $_HOSTOPENSENSE$ --latitude $_HOSTLAT$ --longitude $_HOSTLONG$
//! ```
//!

pub mod client;
pub mod config;
pub mod fields;
pub mod output;
pub mod payload;
