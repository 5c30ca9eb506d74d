//! Elevation profile loader.
//!
//! One `distance,height` pair per line, no header. Blank lines are skipped; 
//! anything else that does not parse as two numbers is an error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::profile::errors::ProfileError;
use crate::sampling::SampleSeries;


pub fn load_csv(path: impl AsRef<Path>) -> Result<SampleSeries, ProfileError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let series = parse_csv(BufReader::new(file)).map_err(|e| match e {
        ProfileError::Io { source, .. } => ProfileError::Io { path: path.to_path_buf(), source },
        other => other,
    })?;
    debug!(path = %path.display(), samples = series.len(), "loaded profile");
    Ok(series)
}


pub fn parse_csv<R: BufRead>(reader: R) -> Result<SampleSeries, ProfileError> {
    let mut x = Vec::new();
    let mut y = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| ProfileError::Io { path: Default::default(), source })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(',').map(str::trim);
        let (Some(d), Some(h), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(ProfileError::Parse {
                line: line_no,
                reason: format!("expected 2 columns in {line:?}"),
            });
        };

        x.push(parse_field(d, line_no)?);
        y.push(parse_field(h, line_no)?);
    }

    Ok(SampleSeries::new(x, y)?)
}


fn parse_field(field: &str, line: usize) -> Result<f64, ProfileError> {
    let v: f64 = field.parse().map_err(|_| ProfileError::Parse {
        line,
        reason: format!("{field:?} is not a number"),
    })?;
    if !v.is_finite() {
        return Err(ProfileError::Parse { line, reason: format!("{field:?} is not finite") });
    }
    Ok(v)
}
