//! Birthday file repository
//!
//! The birthday file is line oriented, one record per line:
//!
//! ```text
//! <year>\t<month>\t<day>\t<name>
//! ```
//!
//! Everything from `#` to the end of a line is a comment and blank lines are
//! ignored. Records are appended in place; removal rewrites the whole file
//! through a temporary file in the same directory and renames it over the
//! original.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{BdError, BdResult};
use crate::models::birth_date::parse_digits;
use crate::models::{names_match, BirthDate};

/// A record as read from the birthday file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub birth: BirthDate,
    pub name: String,
    /// 1-based line number in the file
    pub line: usize,
}

/// Repository for the flat birthday file
#[derive(Debug, Clone)]
pub struct BirthdayFile {
    path: PathBuf,
}

impl BirthdayFile {
    /// Create a repository for the file at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the path to the birthday file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record, validating ranges against `max_year`
    ///
    /// Any bad line aborts the whole load.
    pub fn read_all(&self, max_year: i32) -> BdResult<Vec<Record>> {
        let file = File::open(&self.path).map_err(|e| {
            BdError::config_io(&self.path, format!("Unable to open configuration file ({})", e))
        })?;

        let mut records = Vec::new();

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|e| {
                BdError::config_io(&self.path, format!("Failed to read line {}: {}", line_no, e))
            })?;

            let Some(fields) = record_fields(&line, line_no)? else {
                continue;
            };

            let birth = parse_birth(&fields, line_no)?;
            if !birth.in_range(max_year) {
                return Err(BdError::InvalidDate { line: line_no });
            }

            records.push(Record {
                birth,
                name: fields[3].to_string(),
                line: line_no,
            });
        }

        Ok(records)
    }

    /// Append a record, creating the file if needed
    pub fn append(&self, birth: &BirthDate, name: &str) -> BdResult<()> {
        let name = validate_name(name)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                BdError::config_io(
                    &self.path,
                    format!("Unable to open configuration file for writing ({})", e),
                )
            })?;

        writeln!(file, "{}\t{}\t{}\t{}", birth.year, birth.month, birth.day, name)
            .and_then(|_| file.flush())
            .map_err(|e| {
                BdError::config_io(&self.path, format!("Failed to write record ({})", e))
            })?;

        Ok(())
    }

    /// Remove the first record whose name matches case-insensitively
    ///
    /// All other lines, comments and blank lines included, are copied
    /// verbatim. The file is only replaced when a match was found; otherwise
    /// it is left untouched and `NotFound` is returned.
    pub fn remove(&self, name: &str) -> BdResult<Record> {
        let file = File::open(&self.path).map_err(|e| {
            BdError::config_io(
                &self.path,
                format!("Unable to open configuration file for reading ({})", e),
            )
        })?;

        let mut temp = NamedTempFile::new_in(parent_dir(&self.path)).map_err(|e| {
            BdError::config_io(&self.path, format!("Unable to create temporary file ({})", e))
        })?;

        let mut removed = None;
        {
            let mut writer = BufWriter::new(&mut temp);

            for (index, line) in BufReader::new(file).lines().enumerate() {
                let line_no = index + 1;
                let line = line.map_err(|e| {
                    BdError::config_io(&self.path, format!("Failed to read line {}: {}", line_no, e))
                })?;

                if removed.is_none() {
                    if let Some(fields) = record_fields(&line, line_no)? {
                        if names_match(fields[3], name) {
                            removed = Some(Record {
                                birth: parse_birth(&fields, line_no)?,
                                name: fields[3].to_string(),
                                line: line_no,
                            });
                            continue;
                        }
                    }
                } else {
                    record_fields(&line, line_no)?;
                }

                writeln!(writer, "{}", line).map_err(|e| {
                    BdError::config_io(&self.path, format!("Failed to write temporary file ({})", e))
                })?;
            }

            writer.flush().map_err(|e| {
                BdError::config_io(&self.path, format!("Failed to write temporary file ({})", e))
            })?;
        }

        // Dropping `temp` deletes it
        let removed = removed.ok_or_else(|| BdError::NotFound(name.to_string()))?;

        temp.as_file().sync_all().map_err(|e| {
            BdError::config_io(&self.path, format!("Failed to sync temporary file ({})", e))
        })?;

        temp.persist(&self.path).map_err(|e| {
            BdError::config_io(
                &self.path,
                format!("Unable to replace configuration file ({})", e.error),
            )
        })?;

        restrict_permissions(&self.path)?;

        Ok(removed)
    }
}

/// Check a name can be stored and read back unchanged
///
/// Returns the name with surrounding whitespace trimmed.
pub fn validate_name(name: &str) -> BdResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BdError::Argument("Name can't be blank".into()));
    }
    if name.contains(['\t', '\r', '\n', '#']) {
        return Err(BdError::Argument(format!(
            "Name can't contain tabs, line breaks or '#': {}",
            name
        )));
    }
    Ok(name)
}

/// Split a line into its four record fields
///
/// Returns `None` for comment-only and blank lines. Consecutive tabs count
/// as one separator and fields past the fourth are ignored.
fn record_fields(line: &str, line_no: usize) -> BdResult<Option<[&str; 4]>> {
    let content = match line.find('#') {
        Some(index) => &line[..index],
        None => line,
    };
    let content = content.trim_end_matches(['\r', '\n']);

    if content.trim().is_empty() {
        return Ok(None);
    }

    let mut fields = content.split('\t').filter(|f| !f.is_empty());
    let mut next = || fields.next().ok_or(BdError::MalformedConfig { line: line_no });

    let year = next()?;
    let month = next()?;
    let day = next()?;
    let name = next()?.trim_end();

    if name.is_empty() {
        return Err(BdError::MalformedConfig { line: line_no });
    }

    Ok(Some([year, month, day, name]))
}

fn parse_birth(fields: &[&str; 4], line_no: usize) -> BdResult<BirthDate> {
    let invalid = || BdError::InvalidDate { line: line_no };

    Ok(BirthDate::new(
        parse_digits(fields[0].trim()).ok_or_else(invalid)?,
        parse_digits(fields[1].trim()).ok_or_else(invalid)?,
        parse_digits(fields[2].trim()).ok_or_else(invalid)?,
    ))
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> BdResult<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700)).map_err(|e| {
        BdError::config_io(path, format!("Failed to set permissions ({})", e))
    })
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> BdResult<()> {
    Ok(())
}
