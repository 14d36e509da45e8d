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

use crate::config::Config;
use crate::fields::FieldInfo;
use crate::payload::{Scalar, SensorPayload, SensorValue};
use std::io::{self, Write};

const AGENT_OS: &str = "arduino";

/// Writer for the agent section and `<<<local>>>` section of Check_MK datasource
/// output. Each line is flushed as soon as it is written.
pub struct LocalSection<W: Write> {
    out: W,
}

impl<W: Write> LocalSection<W> {
    pub fn new(out: W) -> Self {
        LocalSection { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Agent identification block followed by the start of the local section
    pub fn header(&mut self, version: &str) -> io::Result<()> {
        self.line(format_args!("<<<check_mk>>>"))?;
        self.line(format_args!("Version: {}", version))?;
        self.line(format_args!("AgentOS: {}", AGENT_OS))?;
        self.line(format_args!("<<<local>>>"))
    }

    pub fn links(&mut self, config: &Config) -> io::Result<()> {
        self.line(format_args!(
            "0 Links - <a href='{}' target='_blank'>Luftdaten</a> <a href='{}' target='_blank'>Opensenemap</a> <a href='{}' target='_blank'>Local</a>",
            config.map_url(),
            config.opensensemap_url(),
            config.local_url(),
        ))
    }

    pub fn age(&mut self, age: &Scalar) -> io::Result<()> {
        self.line(format_args!("0 Age - {} sec", age))
    }

    pub fn software_version(&mut self, version: &str) -> io::Result<()> {
        self.line(format_args!("0 Software_Version - {}", version))
    }

    /// Performance data line for one measurement. Fields are positional and
    /// separated by single spaces even when unit or description are empty.
    pub fn measurement(&mut self, value: &SensorValue) -> io::Result<()> {
        let info = FieldInfo::for_value_type(&value.value_type);
        self.line(format_args!(
            "P {} {}={}{} {} {} {}",
            value.value_type, info.perf_label, value.value, info.warn, value.value, info.unit, info.info_text,
        ))
    }

    pub fn footer(&mut self) -> io::Result<()> {
        self.line(format_args!("<<<>>>"))
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) -> io::Result<()> {
        self.out.write_fmt(args)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

/// Write the complete datasource output for a sensor reading.
pub fn render<W: Write>(config: &Config, payload: &SensorPayload, version: &str, out: W) -> io::Result<W> {
    let mut section = LocalSection::new(out);
    section.header(version)?;
    section.links(config)?;
    section.age(&payload.age)?;
    section.software_version(&payload.software_version)?;

    for value in &payload.sensordatavalues {
        section.measurement(value)?;
    }

    section.footer()?;
    Ok(section.into_inner())
}
