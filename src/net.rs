// src/net.rs
//
// HTTP access to the spots API.
//
//   GET  /api/v1/spots  → {"status":"OK","response":[Spot…]} | {"status":…,"message":…}
//   POST /api/v1/spots  → {"status":"Created"}
//
// One attempt per call; callers decide when to call again.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::config::consts::{STATUS_CREATED, STATUS_OK, USER_AGENT};
use crate::config::options::ApiOptions;
use crate::error::{CreateError, FetchError};
use crate::model::Spot;

/// The backend as seen by the rest of the app. `ApiClient` talks HTTP;
/// tests and benches plug in-memory implementations in here.
pub trait SpotApi: Send + Sync {
    fn load_spots(&self) -> Result<Vec<Spot>, FetchError>;
    fn create_spot(&self, spot: &Spot) -> Result<(), CreateError>;
}

/// `{status, response|message}` wrapper used by every endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub response: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    fn message_or_default(&self) -> String {
        self.message.clone().unwrap_or_else(|| s!("no message"))
    }
}

impl Envelope<Vec<Spot>> {
    /// `OK` → rows (a missing `response` counts as no rows).
    pub fn into_spots(self) -> Result<Vec<Spot>, FetchError> {
        if self.status == STATUS_OK {
            Ok(self.response.unwrap_or_default())
        } else {
            Err(FetchError::Status { message: self.message_or_default(), status: self.status })
        }
    }
}

/// Decode a GET body. A non-2xx reply that still carries an envelope is
/// reported with the server's message; otherwise by HTTP code.
pub fn decode_spots(http_status: u16, body: &str) -> Result<Vec<Spot>, FetchError> {
    match serde_json::from_str::<Envelope<Vec<Spot>>>(body) {
        Ok(env) => env.into_spots(),
        Err(_) if !is_success(http_status) => Err(FetchError::Http(http_status)),
        Err(e) => Err(FetchError::Decode(e)),
    }
}

/// Decode a POST body; only `Created` is success.
pub fn decode_created(http_status: u16, body: &str) -> Result<(), CreateError> {
    match serde_json::from_str::<Envelope<serde_json::Value>>(body) {
        Ok(env) if env.status == STATUS_CREATED => Ok(()),
        Ok(env) => Err(CreateError::Status { message: env.message_or_default(), status: env.status }),
        Err(_) if !is_success(http_status) => Err(CreateError::Http(http_status)),
        Err(e) => Err(CreateError::Decode(e)),
    }
}

fn is_success(code: u16) -> bool {
    (200..300).contains(&code)
}

/// Blocking HTTP client. Cheap to clone; share it behind an `Arc` across
/// worker threads.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    spots_url: String,
}

impl ApiClient {
    pub fn new(opts: &ApiOptions) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(opts.timeout())
            .build()?;
        Ok(Self { http, spots_url: opts.spots_url() })
    }

    pub fn spots_url(&self) -> &str {
        &self.spots_url
    }
}

impl SpotApi for ApiClient {
    fn load_spots(&self) -> Result<Vec<Spot>, FetchError> {
        logd!("Net: GET {}", self.spots_url);
        let resp = self.http.get(&self.spots_url).header(ACCEPT, "application/json").send()?;
        let code = resp.status().as_u16();
        let body = resp.text()?;
        let res = decode_spots(code, &body);
        match &res {
            Ok(rows) => logd!("Net: GET {} → {} rows", code, rows.len()),
            Err(e) => logw!("Net: GET {} failed: {}", code, e),
        }
        res
    }

    fn create_spot(&self, spot: &Spot) -> Result<(), CreateError> {
        logd!("Net: POST {} title={:?}", self.spots_url, spot.title);
        let resp = self.http.post(&self.spots_url).header(ACCEPT, "application/json").json(spot).send()?;
        let code = resp.status().as_u16();
        let body = resp.text()?;
        let res = decode_created(code, &body);
        if let Err(e) = &res {
            logw!("Net: POST {} failed: {}", code, e);
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str = r#"{"Naslov":"A","Redatelj":"R","Label":"L","Datum":"2020-01-01",
        "Trajanje_sekunde":180,"Zanr":"Pop","pregledi":1,"komentari":2,"lajkovi":3,
        "izvodaci":["Ana"]}"#;

    #[test]
    fn ok_envelope_yields_rows() {
        let body = format!(r#"{{"status":"OK","response":[{ROW}]}}"#);
        let rows = decode_spots(200, &body).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].performers, vec![s!("Ana")]);
    }

    #[test]
    fn error_envelope_carries_server_message() {
        let err = decode_spots(500, r#"{"status":"Error","message":"db down"}"#).unwrap_err();
        match err {
            FetchError::Status { status, message } => {
                assert_eq!(status, "Error");
                assert_eq!(message, "db down");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn non_envelope_bodies() {
        assert!(matches!(decode_spots(502, "<html>bad gateway</html>"), Err(FetchError::Http(502))));
        assert!(matches!(decode_spots(200, "[1,2"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn created_status_is_the_only_success() {
        assert!(decode_created(201, r#"{"status":"Created"}"#).is_ok());
        assert!(matches!(
            decode_created(200, r#"{"status":"OK"}"#),
            Err(CreateError::Status { status, .. }) if status == "OK"
        ));
        assert!(matches!(decode_created(404, "nope"), Err(CreateError::Http(404))));
    }
}
