// tests/common/mod.rs
//
// Shared fixtures: spot builders, an in-memory SpotApi and a one-shot HTTP stub.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use spot_viewer::error::{CreateError, FetchError};
use spot_viewer::model::Spot;
use spot_viewer::net::SpotApi;

pub fn spot(title: &str) -> Spot {
    Spot {
        title: title.to_string(),
        director: format!("{title} director"),
        label: "Menart".into(),
        date: "2019-04-12".into(),
        duration_secs: 200,
        genre: "Pop".into(),
        views: 1000,
        comments: 10,
        likes: 100,
        performers: vec![format!("{title} singer")],
    }
}

pub fn catalog() -> Vec<Spot> {
    vec![
        Spot {
            title: "Ljubav".into(),
            director: "Sanja Bistričić".into(),
            label: "Croatia Records".into(),
            date: "2020-02-14".into(),
            duration_secs: 231,
            genre: "Pop".into(),
            views: 1_540_000,
            comments: 820,
            likes: 21_000,
            performers: vec!["Ana".into(), "Marko".into()],
        },
        Spot {
            title: "Noć".into(),
            director: "Dario Radusin".into(),
            label: "Dallas".into(),
            date: "2018-11-02".into(),
            duration_secs: 198,
            genre: "Rock".into(),
            views: 88_000,
            comments: 41,
            likes: 1_900,
            performers: vec!["Prljavo kazalište".into()],
        },
        Spot {
            title: "Say \"Hi\", Zagreb".into(),
            director: "Ivan Kovač".into(),
            label: "Menart".into(),
            date: "2021-07-30".into(),
            duration_secs: 175,
            genre: "Hip-hop".into(),
            views: 402_113,
            comments: 300,
            likes: 9_999,
            performers: vec![],
        },
    ]
}

/// Holds a scripted fetch: the worker reports on `started` once it has taken
/// its response, then blocks until `release` fires.
pub struct Gate {
    started: Sender<()>,
    release: Receiver<()>,
}

/// Test-side handles for a `Gate`.
pub struct GateHandle {
    pub started: Receiver<()>,
    pub release: Sender<()>,
}

pub fn gate() -> (Gate, GateHandle) {
    let (started_tx, started_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    (
        Gate { started: started_tx, release: release_rx },
        GateHandle { started: started_rx, release: release_tx },
    )
}

/// In-memory backend. Scripted fetch responses (optional gate, rows) are
/// served first; after that fetches return the current `rows`.
#[derive(Default)]
pub struct FakeApi {
    pub rows: Mutex<Vec<Spot>>,
    pub scripted: Mutex<VecDeque<(Option<Gate>, Vec<Spot>)>>,
    pub fail_fetch: Mutex<Option<String>>,
    pub fail_create: Mutex<Option<String>>,
}

impl FakeApi {
    pub fn with_rows(rows: Vec<Spot>) -> Self {
        Self { rows: Mutex::new(rows), ..Self::default() }
    }
}

impl SpotApi for FakeApi {
    fn load_spots(&self) -> Result<Vec<Spot>, FetchError> {
        if let Some(msg) = self.fail_fetch.lock().unwrap().clone() {
            return Err(FetchError::Status { status: "Error".into(), message: msg });
        }
        let scripted = self.scripted.lock().unwrap().pop_front();
        if let Some((gate, rows)) = scripted {
            if let Some(gate) = gate {
                let _ = gate.started.send(());
                let _ = gate.release.recv();
            }
            return Ok(rows);
        }
        Ok(self.rows.lock().unwrap().clone())
    }

    fn create_spot(&self, spot: &Spot) -> Result<(), CreateError> {
        if let Some(msg) = self.fail_create.lock().unwrap().clone() {
            return Err(CreateError::Status { status: "Error".into(), message: msg });
        }
        self.rows.lock().unwrap().push(spot.clone());
        Ok(())
    }
}

/// Serve exactly one HTTP response on a random local port.
/// Returns the base URL and a handle yielding the raw request text.
pub fn serve_once(status: u16, body: String) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        let resp = format!(
            "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(resp.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });
    (format!("http://{addr}"), handle)
}

fn read_request(stream: &mut impl Read) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..pos]).to_ascii_lowercase();
            let len = head
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= pos + 4 + len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
