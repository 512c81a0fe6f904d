#[cfg(test)]
#[path = "../../tests/unit/statistics/output_test.rs"]
mod output_test;

use super::StatisticsConfig;
use crate::utils::GenericResult;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

/// A sink for statistics lines: values are written in order, separated by a single space, and
/// every line is terminated explicitly.
pub struct StatisticsLog {
    writer: LogWriter,
}

enum LogWriter {
    Plain(Box<dyn Write + Send>),
    Compressed(GzEncoder<BufWriter<File>>),
}

impl LogWriter {
    fn as_write(&mut self) -> &mut dyn Write {
        match self {
            LogWriter::Plain(writer) => writer.as_mut(),
            LogWriter::Compressed(encoder) => encoder,
        }
    }
}

impl StatisticsLog {
    /// Creates a log which writes to standard output.
    pub fn stdout() -> Self {
        Self::from_writer(Box::new(stdout()))
    }

    /// Creates a log which writes to given writer.
    pub fn from_writer(writer: Box<dyn Write + Send>) -> Self {
        Self { writer: LogWriter::Plain(writer) }
    }

    /// Creates a log file at given path. When `gzip` is set, the output is compressed and `.gz`
    /// suffix is appended to the path.
    pub fn create(path: &Path, gzip: bool) -> GenericResult<Self> {
        let path = if gzip { gzip_path(path) } else { path.to_path_buf() };

        let file = File::create(path.as_path())
            .map_err(|err| format!("cannot create statistics log '{}': '{err}'", path.display()))?;
        let writer = BufWriter::new(file);

        Ok(if gzip {
            Self { writer: LogWriter::Compressed(GzEncoder::new(writer, Compression::default())) }
        } else {
            Self::from_writer(Box::new(writer))
        })
    }

    /// Creates a log using statistics configuration.
    pub fn from_config(config: &StatisticsConfig) -> GenericResult<Self> {
        match &config.file {
            Some(path) => Self::create(path.as_path(), config.gzip),
            None => Ok(Self::stdout()),
        }
    }

    /// Writes a value followed by a separator.
    pub fn print(&mut self, value: impl Display) -> GenericResult<()> {
        write!(self.writer.as_write(), "{value} ")?;
        Ok(())
    }

    /// Terminates the current line.
    pub fn println(&mut self) -> GenericResult<()> {
        let writer = self.writer.as_write();
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Completes the output: writes the gzip trailer if the log is compressed and flushes the
    /// destination. Nothing should be printed afterwards.
    pub fn finish(&mut self) -> GenericResult<()> {
        match &mut self.writer {
            LogWriter::Plain(writer) => writer.flush()?,
            LogWriter::Compressed(encoder) => {
                encoder.try_finish().map_err(|err| format!("cannot complete compressed statistics log: '{err}'"))?;
                encoder.get_mut().flush()?;
            }
        }

        Ok(())
    }
}

fn gzip_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".gz");

    PathBuf::from(name)
}
