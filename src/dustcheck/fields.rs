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

/// How a single sensor value type is presented in a Check_MK local check line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    /// Unit shown after the value, possibly empty
    pub unit: &'static str,
    /// Name of the performance data metric
    pub perf_label: &'static str,
    /// Description shown after the unit, possibly empty
    pub info_text: &'static str,
    /// Threshold suffix appended to the performance data, e.g. `;50`
    pub warn: &'static str,
}

impl FieldInfo {
    /// Presentation of any value type the sensor firmware reports that we don't know about.
    pub const UNKNOWN: FieldInfo = FieldInfo::new("", "value", "", "");

    const fn new(unit: &'static str, perf_label: &'static str, info_text: &'static str, warn: &'static str) -> Self {
        FieldInfo {
            unit,
            perf_label,
            info_text,
            warn,
        }
    }

    /// Look up the presentation of a value type reported by the sensor firmware.
    pub fn for_value_type(value_type: &str) -> FieldInfo {
        match value_type {
            // SDS011
            "SDS_P2" => FieldInfo::new("ug/m3", "finedust", "finedust PM2.5 concentration", ";50"),
            "SDS_P1" => FieldInfo::new("ug/m3", "finedust", "finedust PM10 concentration", ";50"),
            // BME280
            "BME280_temperature" => FieldInfo::new("C", "temp", "temp", ""),
            "BME280_humidity" => FieldInfo::new("%", "humidity", "humidity", ""),
            "BME280_pressure" => FieldInfo::new("hPa", "airpressure", "airpressure", ""),
            // DHT22
            "temperature" => FieldInfo::new("C", "temp", "temp", ""),
            "humidity" => FieldInfo::new("%", "humidity", "humidity", ""),
            // Firmware internals
            "samples" => FieldInfo::new("", "samples", "samples", ""),
            "min_micro" => FieldInfo::new("", "min_micro", "min_micro", ""),
            "max_micro" => FieldInfo::new("", "max_micro", "max_micro", ""),
            // WiFi
            "signal" => FieldInfo::new("dBm", "signal", "signal", ""),
            _ => FieldInfo::UNKNOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FieldInfo;

    #[test]
    fn test_field_info_finedust() {
        let pm25 = FieldInfo::for_value_type("SDS_P2");
        let pm10 = FieldInfo::for_value_type("SDS_P1");

        assert_eq!("ug/m3", pm25.unit);
        assert_eq!("finedust", pm25.perf_label);
        assert_eq!("finedust PM2.5 concentration", pm25.info_text);
        assert_eq!(";50", pm25.warn);

        assert_eq!("finedust PM10 concentration", pm10.info_text);
        assert_eq!(";50", pm10.warn);
    }

    #[test]
    fn test_field_info_bme280() {
        assert_eq!(
            FieldInfo::new("C", "temp", "temp", ""),
            FieldInfo::for_value_type("BME280_temperature")
        );
        assert_eq!(
            FieldInfo::new("hPa", "airpressure", "airpressure", ""),
            FieldInfo::for_value_type("BME280_pressure")
        );
    }

    #[test]
    fn test_field_info_signal() {
        assert_eq!(
            FieldInfo::new("dBm", "signal", "signal", ""),
            FieldInfo::for_value_type("signal")
        );
    }

    #[test]
    fn test_field_info_no_unit() {
        let samples = FieldInfo::for_value_type("samples");
        assert_eq!("", samples.unit);
        assert_eq!("samples", samples.perf_label);
    }

    #[test]
    fn test_field_info_only_finedust_has_thresholds() {
        for value_type in [
            "BME280_temperature",
            "BME280_humidity",
            "BME280_pressure",
            "temperature",
            "humidity",
            "samples",
            "min_micro",
            "max_micro",
            "signal",
        ] {
            assert_eq!("", FieldInfo::for_value_type(value_type).warn, "{}", value_type);
        }
    }

    #[test]
    fn test_field_info_unknown() {
        let info = FieldInfo::for_value_type("SPS30_P0");
        assert_eq!(FieldInfo::UNKNOWN, info);
        assert_eq!("value", info.perf_label);
        assert_eq!("", info.unit);
        assert_eq!("", info.info_text);
        assert_eq!("", info.warn);
    }

    #[test]
    fn test_field_info_case_sensitive() {
        assert_eq!(FieldInfo::UNKNOWN, FieldInfo::for_value_type("sds_p2"));
    }
}
