// ABOUTME: Output module delivering rendered templates to stdout or a file
// ABOUTME: Resolves the -o destination and picks the matching writer

pub mod error;
pub mod writer;

pub use error::{OutputError, Result};
pub use writer::{Destination, FileWriter, OutputWriter, StdoutWriter};

/// Write `content` to `destination` with the matching writer.
pub async fn write_output(content: &str, destination: &Destination) -> Result<()> {
    writer_for(destination).write(content).await
}

pub fn writer_for(destination: &Destination) -> Box<dyn OutputWriter> {
    match destination {
        Destination::Stdout => Box::new(StdoutWriter::new()),
        Destination::File(path) => Box::new(FileWriter::new(path.clone())),
    }
}
