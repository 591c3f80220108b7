//! The song file.
//!
//! One song per line, four comma-separated fields: title, artist, year and
//! a single learned/unlearned marker character. There is no header row, and
//! fields containing a comma or quote are quoted.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Read, Write};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::list::SongList;
use crate::model::Song;

const FIELDS_PER_RECORD: usize = 4;

/// Reads and writes a [`SongList`] using the file and markers in a [`Config`].
#[derive(Debug, Clone)]
pub struct SongStore {
    config: Config,
}

impl SongStore {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Load the song file.
    ///
    /// Returns `Ok(None)` when the file does not exist. A record with the
    /// wrong number of fields or a non-numeric year is an error; no records
    /// are skipped.
    pub fn load(&self) -> Result<Option<SongList>> {
        let path = &self.config.songs_file;
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No song file at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let songs = self.read_from(BufReader::new(file))?;
        log::info!("Loaded {} songs from {}", songs.len(), path.display());
        Ok(Some(songs))
    }

    /// Overwrite the song file with the list in its current order.
    ///
    /// Returns the number of songs written.
    pub fn save(&self, songs: &SongList) -> Result<usize> {
        let path = &self.config.songs_file;
        let file = File::create(path)?;
        self.write_to(file, songs.songs())?;
        log::info!("Saved {} songs to {}", songs.len(), path.display());
        Ok(songs.len())
    }

    /// Parse songs from any reader in song file format.
    ///
    /// A blank line is a record with no fields, so it fails like any other
    /// short record.
    pub fn read_from(&self, mut reader: impl Read) -> Result<SongList> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes.as_slice());

        let mut songs = SongList::new();
        let mut record = csv::StringRecord::new();
        let mut consumed = 0;
        loop {
            let has_record = csv_reader.read_record(&mut record)?;
            let end = if has_record {
                usize::try_from(csv_reader.position().byte()).unwrap_or(bytes.len())
            } else {
                bytes.len()
            };

            // The csv reader drops empty lines, so look at what it skipped.
            let span = bytes.get(consumed..end).unwrap_or_default();
            let skipped = span.iter().take_while(|b| matches!(b, b'\r' | b'\n')).count();
            let after_cr = consumed.checked_sub(1).and_then(|i| bytes.get(i)) == Some(&b'\r');
            if let Some(offset) = first_blank_row(&span[..skipped], after_cr) {
                return Err(Error::MalformedRecord {
                    line: line_at(&bytes, consumed + offset),
                    fields: 0,
                });
            }
            if !has_record {
                break;
            }

            let line = line_at(&bytes, consumed + skipped);
            consumed = end;

            if record.len() != FIELDS_PER_RECORD {
                return Err(Error::MalformedRecord {
                    line,
                    fields: record.len(),
                });
            }

            let row: SongRow = record.deserialize(None)?;
            let year = row.year.trim().parse().map_err(|_| Error::InvalidYear {
                line,
                value: row.year.clone(),
            })?;

            songs.push(Song {
                learned: self.config.is_learned_marker(&row.learned),
                title: row.title,
                artist: row.artist,
                year,
            });
        }

        Ok(songs)
    }

    /// Write songs to any writer in song file format.
    pub fn write_to(&self, writer: impl Write, songs: &[Song]) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        for song in songs {
            csv_writer.serialize(SongRowRef {
                title: &song.title,
                artist: &song.artist,
                year: song.year,
                learned: self.config.marker_for(song.learned),
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

/// One record as read, fields in file order.
#[derive(Debug, Deserialize)]
struct SongRow {
    title: String,
    artist: String,
    year: String,
    learned: String,
}

/// One record as written, fields in file order.
#[derive(Debug, Serialize)]
struct SongRowRef<'a> {
    title: &'a str,
    artist: &'a str,
    year: i64,
    learned: char,
}

/// Offset of the first blank row in a run of line-ending bytes.
///
/// A leading `\n` that completes the previous record's `\r\n` is not a row.
fn first_blank_row(run: &[u8], after_cr: bool) -> Option<usize> {
    let start = usize::from(after_cr && run.first() == Some(&b'\n'));
    (start < run.len()).then_some(start)
}

/// 1-based line number of a byte offset.
fn line_at(bytes: &[u8], offset: usize) -> u64 {
    let newlines = bytes[..offset.min(bytes.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count();
    newlines as u64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SongStore {
        SongStore::new(Config::default())
    }

    fn write(songs: &[Song]) -> String {
        let mut out = Vec::new();
        store().write_to(&mut out, songs).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_single_song() {
        let songs = vec![Song::new("Yesterday", "Beatles", 1965)];
        assert_eq!(write(&songs), "Yesterday,Beatles,1965,u\n");
    }

    #[test]
    fn test_write_markers_and_quoting() {
        let songs = vec![
            Song::new("Hello, Goodbye", "Beatles", 1967).learned(),
            Song::new("Say \"Hi\"", "Someone", 2001),
        ];
        assert_eq!(
            write(&songs),
            "\"Hello, Goodbye\",Beatles,1967,l\n\"Say \"\"Hi\"\"\",Someone,2001,u\n"
        );
    }

    #[test]
    fn test_read_markers() {
        let input = "Blackbird,Beatles,1968,l\nHelp!,Beatles,1965,u\nOdd,X,1999,x\n";
        let songs = store().read_from(input.as_bytes()).unwrap();

        let learned: Vec<bool> = songs.songs().iter().map(|s| s.learned).collect();
        assert_eq!(learned, vec![true, false, false]);
        assert_eq!(songs.songs()[0].year, 1968);
    }

    #[test]
    fn test_read_quoted_fields() {
        let input = "\"Hello, Goodbye\",Beatles,1967,l\n";
        let songs = store().read_from(input.as_bytes()).unwrap();
        assert_eq!(songs.songs()[0].title, "Hello, Goodbye");
    }

    #[test]
    fn test_read_preserves_file_order() {
        let input = "B,x,2000,u\nA,y,1990,u\n";
        let songs = store().read_from(input.as_bytes()).unwrap();
        let titles: Vec<&str> = songs.songs().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_read_accepts_crlf() {
        let input = "Yesterday,Beatles,1965,u\r\n";
        let songs = store().read_from(input.as_bytes()).unwrap();
        assert_eq!(songs.songs(), &[Song::new("Yesterday", "Beatles", 1965)]);
    }

    #[test]
    fn test_read_wrong_field_count_is_error() {
        let input = "Yesterday,Beatles,1965,u\nHelp!,Beatles,1965\n";
        let err = store().read_from(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 2, fields: 3 }));
    }

    #[test]
    fn test_read_bad_year_is_error() {
        let input = "Yesterday,Beatles,soon,u\n";
        let err = store().read_from(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidYear { line: 1, ref value } if value == "soon"));
    }

    #[test]
    fn test_read_accepts_any_integer_year() {
        let input = "Old,X,-5,u\nFar,X,5000000000,u\nZero,X,0,l\n";
        let songs = store().read_from(input.as_bytes()).unwrap();

        let years: Vec<i64> = songs.songs().iter().map(|s| s.year).collect();
        assert_eq!(years, vec![-5, 5_000_000_000, 0]);
    }

    #[test]
    fn test_write_any_integer_year() {
        let songs = vec![Song::new("Old", "X", -5)];
        assert_eq!(write(&songs), "Old,X,-5,u\n");
    }

    #[test]
    fn test_read_blank_line_is_error() {
        let input = "A,y,1990,u\n\nB,x,2000,u\n";
        let err = store().read_from(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 2, fields: 0 }));
    }

    #[test]
    fn test_read_blank_line_with_crlf_is_error() {
        let input = "A,y,1990,u\r\n\r\nB,x,2000,u\r\n";
        let err = store().read_from(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 2, fields: 0 }));
    }

    #[test]
    fn test_read_leading_blank_line_is_error() {
        let input = "\nA,y,1990,u\n";
        let err = store().read_from(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 1, fields: 0 }));
    }

    #[test]
    fn test_read_trailing_blank_line_is_error() {
        let input = "A,y,1990,u\n\n";
        let err = store().read_from(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 2, fields: 0 }));
    }

    #[test]
    fn test_read_crlf_records_without_blank_lines() {
        let input = "A,y,1990,u\r\nB,x,2000,l\r\n";
        let songs = store().read_from(input.as_bytes()).unwrap();
        assert_eq!(songs.len(), 2);
        assert!(songs.songs()[1].learned);
    }

    #[test]
    fn test_read_quoted_newlines_are_not_blank_rows() {
        let input = "\"Verse\n\nChorus\",x,1990,u\nB,x,2000,u\n";
        let songs = store().read_from(input.as_bytes()).unwrap();
        assert_eq!(songs.songs()[0].title, "Verse\n\nChorus");
        assert_eq!(songs.len(), 2);
    }

    #[test]
    fn test_line_numbers_count_quoted_newlines() {
        let input = "\"Two\nLines\",x,1990,u\nShort,x\n";
        let err = store().read_from(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 3, fields: 2 }));
    }

    #[test]
    fn test_empty_input() {
        let songs = store().read_from("".as_bytes()).unwrap();
        assert!(songs.is_empty());
    }

    #[test]
    fn test_custom_markers() {
        let config = Config {
            learned_marker: 'y',
            unlearned_marker: 'n',
            ..Config::default()
        };
        let store = SongStore::new(config);

        let mut out = Vec::new();
        store
            .write_to(&mut out, &[Song::new("A", "B", 2000).learned()])
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A,B,2000,y\n");

        let songs = store.read_from("A,B,2000,l\n".as_bytes()).unwrap();
        assert!(!songs.songs()[0].learned);
    }
}
