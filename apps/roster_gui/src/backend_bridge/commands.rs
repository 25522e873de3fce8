//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    LoadRoster { request_id: u64 },
}
