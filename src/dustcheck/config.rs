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

use std::error::Error;
use std::fmt::{self, Formatter};
use std::io::{self, Write};

const MAP_BASE_URL: &str = "https://duesseldorf.maps.luftdaten.info/";
const MAP_ZOOM: u8 = 15;
const OPENSENSEMAP_BASE_URL: &str = "https://opensensemap.org/";

/// Error validating the parameters a datasource program was invoked with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    PartialLocation,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::PartialLocation => f.write_str("Latitude and longitude must be provided together!"),
        }
    }
}

impl Error for ConfigError {}

/// GPS position of a sensor. Values are passed through to URLs as given
/// without any numeric validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub latitude: String,
    pub longitude: String,
}

/// Validated parameters for a single run against one sensor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    host: String,
    opensense_id: Option<String>,
    location: Option<Location>,
    verbose: bool,
}

impl Config {
    /// Build a new `Config`, returning an error if only one of latitude or
    /// longitude was given.
    pub fn new(
        host: String,
        opensense_id: Option<String>,
        latitude: Option<String>,
        longitude: Option<String>,
        verbose: bool,
    ) -> Result<Self, ConfigError> {
        let location = match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Location { latitude, longitude }),
            (None, None) => None,
            _ => return Err(ConfigError::PartialLocation),
        };

        Ok(Config {
            host,
            opensense_id,
            location,
            verbose,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn opensense_id(&self) -> Option<&str> {
        self.opensense_id.as_deref()
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Root of the web interface served by the sensor itself
    pub fn local_url(&self) -> String {
        format!("http://{}/", self.host)
    }

    /// JSON status document served by the sensor firmware
    pub fn data_url(&self) -> String {
        format!("{}data.json", self.local_url())
    }

    /// Link to the sensor position on the luftdaten.info map, or to the map
    /// itself if no location was given.
    pub fn map_url(&self) -> String {
        match &self.location {
            Some(loc) => format!("{}#{}/{}/{}", MAP_BASE_URL, MAP_ZOOM, loc.latitude, loc.longitude),
            None => MAP_BASE_URL.to_owned(),
        }
    }

    /// Link to the sensor on opensensemap.org, or to the site itself if no ID
    /// was given.
    pub fn opensensemap_url(&self) -> String {
        match &self.opensense_id {
            Some(id) => format!("{}explore/{}", OPENSENSEMAP_BASE_URL, id),
            None => OPENSENSEMAP_BASE_URL.to_owned(),
        }
    }

    /// Write the parameters and every URL derived from them in a human readable
    /// block, used for `-v` output.
    pub fn write_debug<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let none = "None";
        let (latitude, longitude) = match &self.location {
            Some(loc) => (loc.latitude.as_str(), loc.longitude.as_str()),
            None => (none, none),
        };

        writeln!(out)?;
        writeln!(out, "Host         : {}", self.host)?;
        writeln!(out, "local_url    : {}", self.local_url())?;
        writeln!(out, "url          : {}", self.data_url())?;
        writeln!(out, "opensense id : {}", self.opensense_id().unwrap_or(none))?;
        writeln!(out, "osm_url      : {}", self.opensensemap_url())?;
        writeln!(out, "latitude     : {}", latitude)?;
        writeln!(out, "longitude    : {}", longitude)?;
        writeln!(out, "fd_url       : {}", self.map_url())?;
        writeln!(out)
    }
}

/// Write the raw command line arguments, used for `-v` output before they
/// are validated.
pub fn write_debug_args<W: Write>(args: &[String], out: &mut W) -> io::Result<()> {
    writeln!(out, "{:?}", args)
}

#[cfg(test)]
mod tests {
    use super::{write_debug_args, Config, ConfigError, Location};

    fn config(opensense_id: Option<&str>, latitude: Option<&str>, longitude: Option<&str>) -> Result<Config, ConfigError> {
        Config::new(
            "192.168.1.50".to_owned(),
            opensense_id.map(str::to_owned),
            latitude.map(str::to_owned),
            longitude.map(str::to_owned),
            false,
        )
    }

    #[test]
    fn test_config_location_both() {
        let cfg = config(None, Some("51.2"), Some("6.78")).unwrap();
        assert_eq!(
            Some(&Location {
                latitude: "51.2".to_owned(),
                longitude: "6.78".to_owned(),
            }),
            cfg.location()
        );
        assert_eq!("https://duesseldorf.maps.luftdaten.info/#15/51.2/6.78", cfg.map_url());
    }

    #[test]
    fn test_config_location_neither() {
        let cfg = config(None, None, None).unwrap();
        assert_eq!(None, cfg.location());
        assert_eq!("https://duesseldorf.maps.luftdaten.info/", cfg.map_url());
    }

    #[test]
    fn test_config_location_latitude_only() {
        let res = config(None, Some("51.2"), None);
        assert_eq!(Err(ConfigError::PartialLocation), res);
    }

    #[test]
    fn test_config_location_longitude_only() {
        let res = config(None, None, Some("6.78"));
        assert_eq!(Err(ConfigError::PartialLocation), res);
    }

    #[test]
    fn test_config_location_not_validated() {
        let cfg = config(None, Some("north"), Some("")).unwrap();
        assert_eq!("https://duesseldorf.maps.luftdaten.info/#15/north/", cfg.map_url());
    }

    #[test]
    fn test_config_partial_location_message() {
        assert_eq!(
            "Latitude and longitude must be provided together!",
            ConfigError::PartialLocation.to_string()
        );
    }

    #[test]
    fn test_config_opensensemap_url() {
        let with_id = config(Some("5acd37ce223bd800191aef7b"), None, None).unwrap();
        let without_id = config(None, None, None).unwrap();

        assert_eq!(
            "https://opensensemap.org/explore/5acd37ce223bd800191aef7b",
            with_id.opensensemap_url()
        );
        assert_eq!("https://opensensemap.org/", without_id.opensensemap_url());
    }

    #[test]
    fn test_config_sensor_urls() {
        let cfg = config(None, None, None).unwrap();
        assert_eq!("http://192.168.1.50/", cfg.local_url());
        assert_eq!("http://192.168.1.50/data.json", cfg.data_url());
    }

    #[test]
    fn test_config_write_debug() {
        let cfg = config(Some("abc"), None, None).unwrap();
        let mut buf = Vec::new();
        cfg.write_debug(&mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.starts_with("\nHost         : 192.168.1.50\n"));
        assert!(out.contains("url          : http://192.168.1.50/data.json\n"));
        assert!(out.contains("opensense id : abc\n"));
        assert!(out.contains("latitude     : None\n"));
        assert!(out.ends_with("fd_url       : https://duesseldorf.maps.luftdaten.info/\n\n"));
    }

    #[test]
    fn test_write_debug_args() {
        let args = vec!["-H".to_owned(), "192.168.1.50".to_owned()];
        let mut buf = Vec::new();
        write_debug_args(&args, &mut buf).unwrap();

        assert_eq!("[\"-H\", \"192.168.1.50\"]\n", String::from_utf8(buf).unwrap());
    }
}
