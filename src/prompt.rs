//! Interactive directory prompting.
//!
//! Used when the input directories are not given as flags. Paths dragged
//! into a terminal arrive wrapped in quotes or with shell-escaped spaces
//! (`Mis\ Escaneos`), so the raw line is normalized before validation.
//! An invalid path is explained and the question is asked again; the
//! prompt never gives up on its own.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Ask for a directory until an existing one is given.
pub fn ask_directory(message: &str) -> io::Result<PathBuf> {
    let stdin = io::stdin();
    let mut lines = stdin.lock();
    let mut out = io::stdout();
    loop {
        write!(out, "{message}")?;
        out.flush()?;

        let mut line = String::new();
        if lines.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a directory was given",
            ));
        }

        let candidate = normalize_input(&line);
        let path = PathBuf::from(&candidate);
        if path.is_dir() {
            return Ok(path);
        }
        writeln!(
            out,
            "  Error: '{candidate}' is not a valid directory. Try again."
        )?;
    }
}

/// Strip whitespace, surrounding quotes, and shell escapes from a pasted path.
pub fn normalize_input(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .replace("\\ ", " ")
}
