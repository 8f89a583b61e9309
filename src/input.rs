//! Thin reader for the index-expansion input format. Only batch IO.
//!
//! A file holds a base string, then one expansion index per line, then a
//! second base string and its indices. Each index doubles the current
//! string by inserting a full copy of it right after that position, so a
//! short file describes an exponentially long test pair.
use std::io::{BufRead, BufReader, Error, ErrorKind};
use std::path::Path;

/// Apply the doubling expansion: for each index `i`, the current string
/// becomes `s[..=i] + s + s[i+1..]`. `None` if an index falls outside the
/// current string.
pub fn expand(base: &[u8], indices: &[usize]) -> Option<Vec<u8>> {
    let mut seq = base.to_vec();
    for &idx in indices {
        if seq.len() <= idx {
            return None;
        }
        let mut doubled = Vec::with_capacity(seq.len() * 2);
        doubled.extend_from_slice(&seq[..=idx]);
        doubled.extend_from_slice(&seq);
        doubled.extend_from_slice(&seq[idx + 1..]);
        seq = doubled;
    }
    Some(seq)
}

/// Read a file and return the two fully expanded sequences, uppercased.
/// Blank lines are skipped; symbol validation is left to the solvers.
pub fn read_input<P: AsRef<Path>>(path: P) -> std::io::Result<(Vec<u8>, Vec<u8>)> {
    let reader = std::fs::File::open(path).map(BufReader::new)?;
    let mut lines = vec![];
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_ascii_uppercase());
        }
    }
    parse_lines(&lines)
}

fn parse_lines(lines: &[String]) -> std::io::Result<(Vec<u8>, Vec<u8>)> {
    let mut cursor = 0;
    let (first_base, first_indices) = take_record(lines, &mut cursor)?;
    let (second_base, second_indices) = take_record(lines, &mut cursor)?;
    if cursor != lines.len() {
        return Err(invalid("trailing lines after the second record"));
    }
    let first = expand(&first_base, &first_indices)
        .ok_or_else(|| invalid("expansion index out of range in the first record"))?;
    let second = expand(&second_base, &second_indices)
        .ok_or_else(|| invalid("expansion index out of range in the second record"))?;
    Ok((first, second))
}

// One base string and its run of index lines.
fn take_record(lines: &[String], cursor: &mut usize) -> std::io::Result<(Vec<u8>, Vec<usize>)> {
    let base = lines
        .get(*cursor)
        .ok_or_else(|| invalid("missing base sequence"))?;
    *cursor += 1;
    let mut indices = vec![];
    while let Some(line) = lines.get(*cursor) {
        match line.parse::<usize>() {
            Ok(idx) => {
                indices.push(idx);
                *cursor += 1;
            }
            Err(_) => break,
        }
    }
    Ok((base.as_bytes().to_vec(), indices))
}

fn invalid(message: &str) -> Error {
    Error::new(ErrorKind::InvalidData, message.to_string())
}
