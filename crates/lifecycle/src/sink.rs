//! Destinations for fetched result pages.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use sumo_client::ResultBatch;

/// Receives each page as soon as it is fetched.
pub trait BatchSink {
    fn emit(&mut self, batch: &ResultBatch) -> io::Result<()>;
}

impl BatchSink for Vec<ResultBatch> {
    fn emit(&mut self, batch: &ResultBatch) -> io::Result<()> {
        self.push(batch.clone());
        Ok(())
    }
}

/// Writes each page body as pretty JSON (4-space indent), one block per page.
#[derive(Debug)]
pub struct JsonPageWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonPageWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> BatchSink for JsonPageWriter<W> {
    fn emit(&mut self, batch: &ResultBatch) -> io::Result<()> {
        let mut ser =
            serde_json::Serializer::with_formatter(&mut self.writer, PrettyFormatter::with_indent(b"    "));
        batch.body.serialize(&mut ser).map_err(io::Error::other)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}
