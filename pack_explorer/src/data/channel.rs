use std::path::PathBuf;

use crossbeam_channel::Receiver;

use crate::data::{read_result, LoadError, PackingResult};

/// Result of one import: the file that was requested and what came of it.
#[derive(Debug)]
pub struct ImportOutcome {
    pub path: PathBuf,
    pub result: Result<PackingResult, LoadError>,
}

/// Bevy resource holding the receiver of the import in flight, if any.
/// Systems poll this once per frame.
#[derive(bevy::prelude::Resource, Default)]
pub struct ImportChannel(Option<Receiver<ImportOutcome>>);

impl ImportChannel {
    /// Start reading `path`, superseding any import still in flight.
    pub fn start(&mut self, path: PathBuf) {
        self.0 = Some(spawn_import(path));
    }

    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }

    /// Take the outcome if the reader thread has finished.
    pub fn try_take(&mut self) -> Option<ImportOutcome> {
        let outcome = self.0.as_ref()?.try_recv().ok()?;
        self.0 = None;
        Some(outcome)
    }
}

/// Read and parse `path` on a dedicated thread. Exactly one outcome is sent;
/// if the receiver was dropped in the meantime the outcome is discarded.
pub fn spawn_import(path: PathBuf) -> Receiver<ImportOutcome> {
    let (tx, rx) = crossbeam_channel::bounded(1);
    std::thread::spawn(move || {
        let result = read_result(&path);
        let _ = tx.send(ImportOutcome { path, result });
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("pack_explorer_{}_{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn import_thread_delivers_parsed_result() {
        let path = temp_file(
            "ok.json",
            r#"{"packings":[{"container":{"name":"A","depth":1,"height":1,"width":1},
                "packed_blocks":[]}]}"#,
        );

        let outcome = spawn_import(path.clone())
            .recv_timeout(Duration::from_secs(5))
            .expect("import thread should answer");

        assert_eq!(outcome.path, path);
        assert_eq!(outcome.result.unwrap().packings.len(), 1);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn channel_is_cleared_after_outcome_is_taken() {
        let path = temp_file("bad.json", "not json");
        let mut channel = ImportChannel::default();
        channel.start(path.clone());
        assert!(channel.is_pending());

        let mut outcome = None;
        for _ in 0..500 {
            outcome = channel.try_take();
            if outcome.is_some() {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        let outcome = outcome.expect("import thread should answer");
        assert!(matches!(outcome.result, Err(LoadError::Parse(_))));
        assert!(!channel.is_pending());
        std::fs::remove_file(path).ok();
    }
}
