use log::debug;
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::models::archive::IssueLocation;

const PDF_DIR: &str = "pdfs";

/// Read-only view over `{storage_root}/pdfs/{year}/{month}/{pdf_file_name}`.
#[derive(Debug, Clone)]
pub struct PdfRepository {
    storage_root: PathBuf,
    pdf_file_name: String,
}

impl PdfRepository {
    pub fn new(storage_root: impl Into<PathBuf>, pdf_file_name: impl Into<String>) -> Self {
        Self {
            storage_root: storage_root.into(),
            pdf_file_name: pdf_file_name.into(),
        }
    }

    pub fn pdf_dir(&self) -> PathBuf {
        self.storage_root.join(PDF_DIR)
    }

    /// `None` when the month token is not a single plain directory name.
    pub fn resolve(&self, year: i32, month: &str) -> Option<PathBuf> {
        if !is_plain_segment(month) {
            return None;
        }
        Some(
            self.pdf_dir()
                .join(year.to_string())
                .join(month)
                .join(&self.pdf_file_name),
        )
    }

    /// Resolves the coordinate and checks that a regular file sits there.
    /// `Ok(None)` means absent.
    pub fn locate(&self, year: i32, month: &str) -> io::Result<Option<PathBuf>> {
        match self.resolve(year, month) {
            Some(path) if is_file(&path)? => Ok(Some(path)),
            _ => Ok(None),
        }
    }

    pub fn exists(&self, year: i32, month: &str) -> io::Result<bool> {
        Ok(self.locate(year, month)?.is_some())
    }

    /// Walks `pdfs/{year}/{month}` and returns every coordinate holding the
    /// PDF. Years come newest first; months within a year are ordered by
    /// descending directory name, not by calendar.
    pub fn scan(&self) -> io::Result<Vec<IssueLocation>> {
        let pdf_dir = self.pdf_dir();
        let mut years = match list_subdirs(&pdf_dir) {
            Ok(names) => names
                .into_iter()
                .filter_map(|name| canonical_year(&name).map(|year| (year, name)))
                .collect::<Vec<_>>(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No pdf directory at {:?}, archive is empty", pdf_dir);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };
        years.sort_by(|a, b| descending(a, b));

        let mut locations = Vec::new();
        for (year, year_name) in years {
            let year_dir = pdf_dir.join(&year_name);
            let mut months = list_subdirs(&year_dir)?;
            months.sort_by(|a, b| b.cmp(a));

            for month in months {
                let pdf_path = year_dir.join(&month).join(&self.pdf_file_name);
                if is_file(&pdf_path)? {
                    locations.push(IssueLocation::new(year, month));
                } else {
                    debug!("Skipping {:?}: no {}", pdf_path.parent(), self.pdf_file_name);
                }
            }
        }

        Ok(locations)
    }
}

/// Only names that `resolve` would rebuild verbatim count as years, so
/// `02025` or `+2025` never shadow `2025`.
fn canonical_year(name: &str) -> Option<i32> {
    name.parse::<i32>()
        .ok()
        .filter(|year| year.to_string() == name)
}

fn descending(a: &(i32, String), b: &(i32, String)) -> Ordering {
    b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1))
}

/// Names of the immediate subdirectories of `dir`. Entries whose names are
/// not valid UTF-8 are skipped.
fn list_subdirs(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // Follows symlinks; a dangling link is skipped, any other stat
        // failure aborts the listing.
        let is_dir = match fs::metadata(entry.path()) {
            Ok(meta) => meta.is_dir(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => return Err(e),
        };
        if !is_dir {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    Ok(names)
}

fn is_file(path: &Path) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

fn is_plain_segment(segment: &str) -> bool {
    if segment.is_empty() || segment.contains('\0') {
        return false;
    }
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == segment
    )
}
