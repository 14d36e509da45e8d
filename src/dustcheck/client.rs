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
use crate::payload::SensorPayload;
use hyper::client::HttpConnector;
use hyper::{Client, StatusCode, Uri};
use std::error::Error;
use std::fmt::{self, Formatter};

/// Potential kinds of errors that can be encountered fetching sensor data
#[derive(PartialEq, Eq, Debug, Hash, Clone, Copy)]
pub enum ClientErrorKind {
    Request,
    Status,
    Body,
    Parse,
}

impl ClientErrorKind {
    pub fn as_label(&self) -> &'static str {
        match self {
            ClientErrorKind::Request => "request",
            ClientErrorKind::Status => "status",
            ClientErrorKind::Body => "body",
            ClientErrorKind::Parse => "parse",
        }
    }
}

/// Error making a request to the sensor or interpreting its response
#[derive(Debug)]
pub enum ClientError {
    Status(StatusCode),
    KindMsgCause(ClientErrorKind, &'static str, Box<dyn Error + Send + Sync>),
}

impl ClientError {
    pub fn kind(&self) -> ClientErrorKind {
        match self {
            ClientError::Status(_) => ClientErrorKind::Status,
            ClientError::KindMsgCause(kind, _, _) => *kind,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Status(code) => write!(f, "unexpected response status: {}", code),
            ClientError::KindMsgCause(_, msg, ref e) => write!(f, "{}: {}", msg, e),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClientError::KindMsgCause(_, _, ref e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/// Client for the JSON status document served by a luftdaten.info sensor.
///
/// Exactly one request is made per call to `fetch`. There is no timeout and
/// no retry: a sensor that doesn't answer blocks the caller until the
/// connection fails.
#[derive(Debug)]
pub struct SensorClient {
    client: Client<HttpConnector>,
    url: Uri,
}

impl SensorClient {
    pub fn new(client: Client<HttpConnector>, config: &Config) -> Result<Self, ClientError> {
        let url = config.data_url().parse::<Uri>().map_err(|e| {
            ClientError::KindMsgCause(ClientErrorKind::Request, "invalid sensor address", Box::new(e))
        })?;

        Ok(SensorClient { client, url })
    }

    pub fn url(&self) -> &Uri {
        &self.url
    }

    pub async fn fetch(&self) -> Result<SensorPayload, ClientError> {
        let res = self.client.get(self.url.clone()).await.map_err(|e| {
            ClientError::KindMsgCause(ClientErrorKind::Request, "unable to make request to sensor", Box::new(e))
        })?;

        let status = res.status();
        tracing::debug!(message = "received sensor response", url = %self.url, status = %status);

        if status != StatusCode::OK {
            return Err(ClientError::Status(status));
        }

        let body = hyper::body::to_bytes(res.into_body()).await.map_err(|e| {
            ClientError::KindMsgCause(ClientErrorKind::Body, "unable to read sensor response", Box::new(e))
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            ClientError::KindMsgCause(ClientErrorKind::Parse, "unable to parse sensor response", Box::new(e))
        })
    }
}
