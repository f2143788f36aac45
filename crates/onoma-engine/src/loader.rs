use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use onoma_types::Record;

use crate::Result;
use crate::parser::parse_dataset;

/// Read and parse the dataset file, returning the admitted records.
///
/// This is the single load boundary: every failure mode (missing file,
/// unreadable content, malformed CSV, zero admitted rows) is converted to
/// the engine `Error` taxonomy here and nothing past this point can fail.
pub fn load_dataset(path: &Path) -> Result<Vec<Record>> {
    let raw = std::fs::read_to_string(path)?;
    let report = parse_dataset(&raw)?;
    Ok(report.records)
}

/// Run `load_dataset` on a background thread and deliver the single
/// result over a channel.
///
/// The interactive UI polls the receiver while drawing its loading frame.
/// One thread, one send; a second load can never be in flight.
pub fn spawn_load(path: PathBuf) -> Receiver<Result<Vec<Record>>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        // Receiver may be gone if the UI quit before the load finished
        let _ = tx.send(load_dataset(&path));
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_dataset(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("names.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_admitted_records_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, "name,length\nRam,3\n,5\nShyam,5\n");

        let records = load_dataset(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Ram");
        assert_eq!(records[1].name, "Shyam");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nowhere.csv");

        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().starts_with("failed to read dataset"));
    }

    #[test]
    fn header_only_file_is_empty_dataset() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, "name,length,syllables_est\n");

        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, Error::EmptyDataset));
    }

    #[test]
    fn spawn_load_delivers_exactly_one_result() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, "name\nDev\n");

        let rx = spawn_load(path);
        let outcome = rx.recv().unwrap();
        assert_eq!(outcome.unwrap().len(), 1);

        // sender is dropped after the single send
        assert!(rx.recv().is_err());
    }
}
