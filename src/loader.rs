// src/loader.rs
//
// Runs API calls off the UI thread and hands results back through a channel.
//
// - Each fetch gets a generation number; a result from an older generation
//   than the latest request is dropped, so a slow response can never
//   overwrite newer data.
// - A successful create triggers a refetch.
// - No cancellation: superseded requests run to completion and are ignored.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{CreateError, FetchError};
use crate::model::Spot;
use crate::net::SpotApi;

/// Called from worker threads after a result is queued (e.g. egui repaint).
pub type Waker = Arc<dyn Fn() + Send + Sync>;

enum Message {
    Loaded { generation: u64, result: Result<Vec<Spot>, FetchError> },
    Created { title: String, result: Result<(), CreateError> },
}

/// What the UI should act on.
#[derive(Debug)]
pub enum Update {
    /// Fresh rows from the latest fetch; rebind the table.
    Spots(Vec<Spot>),
    FetchFailed(FetchError),
    /// A create succeeded; a refetch is already in flight.
    Created { title: String },
    CreateFailed { title: String, error: CreateError },
}

pub struct Loader {
    api: Arc<dyn SpotApi>,
    tx: Sender<Message>,
    rx: Receiver<Message>,
    waker: Option<Waker>,
    /// Generation of the most recent fetch request
    latest: u64,
    pending_fetches: usize,
    pending_creates: usize,
}

impl Loader {
    pub fn new(api: Arc<dyn SpotApi>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { api, tx, rx, waker: None, latest: 0, pending_fetches: 0, pending_creates: 0 }
    }

    pub fn with_waker(mut self, waker: Waker) -> Self {
        self.waker = Some(waker);
        self
    }

    /// True while any request is in flight.
    pub fn busy(&self) -> bool {
        self.pending_fetches > 0 || self.pending_creates > 0
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest
    }

    /// Start a fetch. Returns its generation.
    pub fn request_fetch(&mut self) -> u64 {
        self.latest += 1;
        self.pending_fetches += 1;
        let generation = self.latest;
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let waker = self.waker.clone();

        logd!("Loader: fetch #{} started", generation);
        thread::spawn(move || {
            let result = api.load_spots();
            // Receiver gone = app shutting down
            let _ = tx.send(Message::Loaded { generation, result });
            if let Some(w) = waker { w(); }
        });
        generation
    }

    /// Start a create; a success schedules a refetch when it is polled.
    pub fn request_create(&mut self, spot: Spot) {
        self.pending_creates += 1;
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let waker = self.waker.clone();

        logd!("Loader: create {:?} started", spot.title);
        thread::spawn(move || {
            let result = api.create_spot(&spot);
            let _ = tx.send(Message::Created { title: spot.title, result });
            if let Some(w) = waker { w(); }
        });
    }

    /// Drain finished requests without blocking (once per frame).
    pub fn poll(&mut self) -> Vec<Update> {
        let mut out = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(msg) => {
                    if let Some(u) = self.handle(msg) { out.push(u); }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }

    /// Block until the next update or `timeout` (CLI / tests).
    /// Stale results are swallowed and do not count as an update.
    pub fn wait(&mut self, timeout: Duration) -> Option<Update> {
        let deadline = Instant::now() + timeout;
        loop {
            let left = deadline.checked_duration_since(Instant::now())?;
            match self.rx.recv_timeout(left) {
                Ok(msg) => {
                    if let Some(u) = self.handle(msg) { return Some(u); }
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    fn handle(&mut self, msg: Message) -> Option<Update> {
        match msg {
            Message::Loaded { generation, result } => {
                self.pending_fetches = self.pending_fetches.saturating_sub(1);
                if generation < self.latest {
                    logd!("Loader: dropping stale fetch #{} (latest #{})", generation, self.latest);
                    return None;
                }
                Some(match result {
                    Ok(rows) => {
                        logf!("Loader: fetch #{} OK rows={}", generation, rows.len());
                        Update::Spots(rows)
                    }
                    Err(e) => {
                        loge!("Loader: fetch #{} failed: {}", generation, e);
                        Update::FetchFailed(e)
                    }
                })
            }
            Message::Created { title, result } => {
                self.pending_creates = self.pending_creates.saturating_sub(1);
                Some(match result {
                    Ok(()) => {
                        logf!("Loader: created {:?}, refetching", title);
                        self.request_fetch();
                        Update::Created { title }
                    }
                    Err(error) => {
                        loge!("Loader: create {:?} failed: {}", title, error);
                        Update::CreateFailed { title, error }
                    }
                })
            }
        }
    }
}
