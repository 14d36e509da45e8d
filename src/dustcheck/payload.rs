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

use serde::Deserialize;
use serde_json::{Number, Value};
use std::fmt::{self, Formatter};

/// Status document served by the sensor firmware at `/data.json`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorPayload {
    /// Seconds since the last measurement
    pub age: Scalar,
    pub software_version: String,
    pub sensordatavalues: Vec<SensorValue>,
}

/// A single measurement, in the order the firmware reported it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorValue {
    pub value_type: String,
    pub value: Scalar,
}

/// JSON value the firmware may send either quoted or bare. It is only ever
/// displayed, never interpreted, so numbers keep the exact text the sensor
/// sent (`12.0` stays `12.0`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum Scalar {
    Number(Number),
    Text(String),
}

impl TryFrom<Value> for Scalar {
    type Error = String;

    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::Number(n) => Ok(Scalar::Number(n)),
            Value::String(s) => Ok(Scalar::Text(s)),
            other => Err(format!("expected a string or number, got {}", other)),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(v) => fmt::Display::fmt(v, f),
            Scalar::Text(v) => f.write_str(v),
        }
    }
}
