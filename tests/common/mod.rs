use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use data_encoding::HEXLOWER;

use csv_id_sort::event::EventSink;
use csv_id_sort::record::Record;

pub fn setup() {
    let results_dir_path = PathBuf::from_str("./target/results/").unwrap();

    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    }
}

#[allow(dead_code)]
pub fn read_lines(path: &Path) -> Result<Vec<String>, anyhow::Error> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().map(|x| x.unwrap()).collect();
    Ok(lines)
}

#[allow(dead_code)]
pub fn temp_file_name(dir: &str) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result
}

/// Event sink that records every event for later assertions. Cloning shares the
/// underlying buffers, so a test can keep one handle and hand the other to the job.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub invalid: Arc<Mutex<Vec<(String, Vec<String>)>>>,
    pub rewritten: Arc<Mutex<Vec<PathBuf>>>,
    pub empty: Arc<Mutex<Vec<PathBuf>>>,
}

impl EventSink for RecordingSink {
    fn invalid_identifier(&self, raw: &str, record: &Record) {
        self.invalid
            .lock()
            .unwrap()
            .push((raw.to_string(), record.fields().to_vec()));
    }

    fn file_rewritten(&self, path: &Path) {
        self.rewritten.lock().unwrap().push(path.to_path_buf());
    }

    fn empty_source(&self, path: &Path) {
        self.empty.lock().unwrap().push(path.to_path_buf());
    }
}
