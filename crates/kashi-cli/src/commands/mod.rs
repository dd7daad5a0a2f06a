use std::fs;
use std::io::{self, Read};

use crate::CliError;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod lexicon_ops;
pub mod lyrics_ops;

pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Input {
        path: path.to_string(),
        source,
    })
}

/// Read `file`, or stdin when no file is given.
pub(crate) fn read_input(file: Option<&str>) -> Result<String, CliError> {
    match file {
        Some(path) => read_file(path),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Input {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}
