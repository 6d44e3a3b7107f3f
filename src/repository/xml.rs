//! Record source reading the XML dataset file.
//!
//! The dataset is a flat `<root>` of `<row>` elements. Rows are decoded one at
//! a time, so a scan that stops early never reads the rest of the file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::domain::user::User;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{RecordCursor, RecordSource};

const ROOT: &[u8] = b"root";
const ROW: &[u8] = b"row";

/// XML dataset on disk. Every [`RecordSource::open`] reopens the file.
#[derive(Clone, Debug)]
pub struct XmlFileSource {
    path: PathBuf,
}

impl XmlFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for XmlFileSource {
    fn open(&self) -> RepositoryResult<Box<dyn RecordCursor>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(XmlRecordCursor::new(BufReader::new(file))))
    }
}

/// Streaming decoder over any buffered XML input.
pub struct XmlRecordCursor<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> XmlRecordCursor<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: Reader::from_reader(inner),
            buf: Vec::new(),
            done: false,
        }
    }

    fn decode_row(&mut self) -> RepositoryResult<User> {
        let mut row = RawRow::default();
        let mut field: Option<String> = None;
        let mut text = String::new();

        loop {
            self.buf.clear();
            let step = match self.reader.read_event_into(&mut self.buf).map_err(decode_error)? {
                Event::Start(e) => {
                    RowStep::Open(String::from_utf8_lossy(e.name().as_ref()).into_owned())
                }
                Event::Text(t) => RowStep::Text(t.unescape().map_err(decode_error)?.into_owned()),
                Event::CData(c) => RowStep::Text(String::from_utf8_lossy(&c).into_owned()),
                Event::End(e) if e.name().as_ref() == ROW => RowStep::CloseRow,
                Event::End(_) => RowStep::Close,
                Event::Eof => RowStep::Eof,
                _ => RowStep::Skip,
            };

            match step {
                RowStep::Open(name) => {
                    field = Some(name);
                    text.clear();
                }
                RowStep::Text(chunk) => {
                    if field.is_some() {
                        text.push_str(&chunk);
                    }
                }
                RowStep::Close => {
                    if let Some(name) = field.take() {
                        row.set(&name, std::mem::take(&mut text));
                    }
                }
                RowStep::CloseRow => return row.into_user(),
                RowStep::Eof => {
                    return Err(RepositoryError::Decode(
                        "unexpected end of data inside <row>".to_string(),
                    ));
                }
                RowStep::Skip => {}
            }
        }
    }
}

impl<R: BufRead + Send> RecordCursor for XmlRecordCursor<R> {
    fn next_record(&mut self) -> RepositoryResult<Option<User>> {
        if self.done {
            return Ok(None);
        }

        loop {
            self.buf.clear();
            let step = match self.reader.read_event_into(&mut self.buf).map_err(decode_error)? {
                Event::Start(e) if e.name().as_ref() == ROW => Step::Row,
                Event::End(e) if e.name().as_ref() == ROOT => Step::Done,
                Event::Eof => Step::Done,
                _ => Step::Skip,
            };

            match step {
                Step::Row => return self.decode_row().map(Some),
                Step::Done => {
                    self.done = true;
                    return Ok(None);
                }
                Step::Skip => {}
            }
        }
    }
}

enum Step {
    Row,
    Done,
    Skip,
}

enum RowStep {
    Open(String),
    Text(String),
    Close,
    CloseRow,
    Eof,
    Skip,
}

#[derive(Default)]
struct RawRow {
    id: Option<String>,
    age: Option<String>,
    first_name: String,
    last_name: String,
    about: String,
    gender: String,
}

impl RawRow {
    fn set(&mut self, field: &str, value: String) {
        match field {
            "id" => self.id = Some(value),
            "age" => self.age = Some(value),
            "first_name" => self.first_name = value,
            "last_name" => self.last_name = value,
            "about" => self.about = value,
            "gender" => self.gender = value,
            _ => {}
        }
    }

    fn into_user(self) -> RepositoryResult<User> {
        let id = parse_number("id", self.id.as_deref())?;
        let age = parse_number("age", self.age.as_deref())?;

        Ok(User::from_parts(
            id,
            &self.first_name,
            &self.last_name,
            age,
            self.about,
            self.gender,
        ))
    }
}

fn parse_number(field: &str, value: Option<&str>) -> RepositoryResult<i32> {
    let value =
        value.ok_or_else(|| RepositoryError::Decode(format!("row is missing <{field}>")))?;
    value
        .trim()
        .parse()
        .map_err(|_| RepositoryError::Decode(format!("<{field}> is not an integer: {value:?}")))
}

fn decode_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Decode(err.to_string())
}
