use crate::error::{Error, Result};
use crate::stats::{Stats, Table};
use memchr::memchr;

/// Byte separating the station name from the measurement on each line.
pub const DELIMITER: u8 = b';';

/// Aggregates every record in one line-aligned chunk into a private table.
///
/// `base` is the chunk's absolute offset in the file; it only positions parse
/// errors in the whole file rather than within the chunk. The planner
/// guarantees the slice starts and ends on line boundaries, so there is no
/// truncated first or last line to special-case. The final line of the file
/// may lack its terminator; a preceding carriage return is tolerated.
///
/// Any malformed line fails the whole chunk. There is no skip-and-continue:
/// silently dropping records would change the report.
pub fn process_chunk(chunk: &[u8], base: usize) -> Result<Table> {
    let mut table = Table::new();
    let mut pos = 0;
    while pos < chunk.len() {
        let rest = &chunk[pos..];
        let line_len = memchr(b'\n', rest).unwrap_or(rest.len());
        let mut line = &rest[..line_len];
        if let Some(stripped) = line.strip_suffix(b"\r") {
            line = stripped;
        }

        let split = memchr(DELIMITER, line).ok_or_else(|| Error::MissingDelimiter {
            offset: base + pos,
            line: String::from_utf8_lossy(line).into_owned(),
        })?;
        let (station, measurement) = (&line[..split], &line[split + 1..]);
        let value: f64 =
            lexical_core::parse(measurement).map_err(|_| Error::InvalidMeasurement {
                offset: base + pos,
                text: String::from_utf8_lossy(measurement).into_owned(),
            })?;

        // The station bytes are copied only on first occurrence in the chunk.
        match table.get_mut(station) {
            Some(stats) => stats.record(value),
            None => {
                table.insert(station.to_vec(), Stats::new(value));
            }
        }
        pos += line_len + 1;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregates_repeated_stations() {
        let table = process_chunk(b"A;1.0\nB;-2.5\nA;3.0\n", 0).unwrap();
        assert_eq!(table.len(), 2);

        let a = &table[b"A".as_slice()];
        assert_eq!((a.min, a.max, a.sum, a.count), (1.0, 3.0, 4.0, 2));

        let b = &table[b"B".as_slice()];
        assert_eq!((b.min, b.max, b.sum, b.count), (-2.5, -2.5, -2.5, 1));
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let table = process_chunk(b"A;1.5\r\nA;2.5\r\n", 0).unwrap();
        let a = &table[b"A".as_slice()];
        assert_eq!((a.sum, a.count), (4.0, 2));
    }

    #[test]
    fn parses_an_unterminated_final_line() {
        let table = process_chunk(b"A;1.0\nA;2.0", 0).unwrap();
        assert_eq!(table[b"A".as_slice()].count, 2);
    }

    #[test]
    fn splits_on_the_first_delimiter() {
        // The value field runs from the first delimiter to end-of-line, so a
        // stray delimiter inside it is an invalid measurement, not a new key.
        let err = process_chunk(b"A;B;1.0\n", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidMeasurement { .. }));
    }

    #[test]
    fn missing_delimiter_is_fatal_with_absolute_offset() {
        let err = process_chunk(b"A;1.0\nnodelim\n", 100).unwrap_err();
        match err {
            Error::MissingDelimiter { offset, line } => {
                assert_eq!(offset, 106);
                assert_eq!(line, "nodelim");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_line_is_a_missing_delimiter() {
        let err = process_chunk(b"A;1.0\n\nB;2.0\n", 0).unwrap_err();
        assert!(matches!(err, Error::MissingDelimiter { offset: 6, .. }));
    }

    #[test]
    fn invalid_measurement_is_fatal() {
        let err = process_chunk(b"A;1.0\nB;warm\n", 0).unwrap_err();
        match err {
            Error::InvalidMeasurement { offset, text } => {
                assert_eq!(offset, 6);
                assert_eq!(text, "warm");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_measurement_is_fatal() {
        let err = process_chunk(b"A;\n", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidMeasurement { .. }));
    }
}
