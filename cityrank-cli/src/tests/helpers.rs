//! Test helpers for writing CSV city tables to disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const HEADER: &str =
    ",City,Walkable Park Access,Park Units,Walk Score,Transit Score,Bike Score,Dog Parks";

/// Three cities; Boston leads a neutral ranking and Seattle leads on dog parks.
pub(super) const ROWS: [&str; 3] = [
    "0,Seattle,95,480,74,60,70,30",
    "1,Austin,60,300,40,35,55,9",
    "2,Boston,100,500,83,72,69,2",
];

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(path, contents).expect("write fixture");
}

/// Temporary directory holding `cities.csv`.
pub(super) struct TableFixture {
    _dir: TempDir,
    root: Utf8PathBuf,
    path: Utf8PathBuf,
}

impl TableFixture {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let path = root.join("cities.csv");
        let mut contents = [HEADER].into_iter().chain(ROWS).collect::<Vec<_>>().join("\n");
        contents.push('\n');
        write_utf8(&path, contents.as_bytes());
        Self {
            _dir: dir,
            root,
            path,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }
}
