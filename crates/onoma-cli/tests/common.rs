//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A dataset with the full header, one blank-name row, and one row with
/// missing trailing cells. Four admissible names: Aarav, Arjun, Dev, Isha.
pub const SAMPLE_DATASET: &str = "\
name,length,syllables_est,vowel_ratio,starts_with,ending,endswith_a,endswith_i,endswith_y
Aarav,5,2,0.6,A,av,0,0,0
Arjun,5,2,0.4,A,un,0,0,0
Dev,3,1,0.33,D,ev,0,0,0
,4,2,0.5,X,xx,0,0,0
Isha,4
";

pub struct TestFixture {
    _temp_dir: TempDir,
    dataset_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dataset_path = temp_dir.path().join("names.csv");

        Self {
            _temp_dir: temp_dir,
            dataset_path,
        }
    }

    pub fn with_sample_dataset() -> Self {
        let fixture = Self::new();
        fixture.write_dataset(SAMPLE_DATASET);
        fixture
    }

    pub fn dataset_path(&self) -> &PathBuf {
        &self.dataset_path
    }

    pub fn write_dataset(&self, content: &str) {
        fs::write(&self.dataset_path, content).expect("Failed to write dataset");
    }

    /// Command with the fixture dataset preselected via --data.
    pub fn command(&self) -> Command {
        let mut cmd = self.bare_command();
        cmd.arg("--data").arg(&self.dataset_path);
        cmd
    }

    /// Command without --data, for exercising env/config resolution.
    pub fn bare_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("onoma").expect("Failed to find onoma binary");
        cmd.env_remove("ONOMA_DATASET");
        cmd
    }
}
