use std::io;

/// Failures while opening or decoding the extract.
#[derive(Debug)]
pub enum CodecError {
    Io(io::Error),
    Pbf(osmpbf::Error),
}

impl From<io::Error> for CodecError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<osmpbf::Error> for CodecError {
    fn from(value: osmpbf::Error) -> Self {
        Self::Pbf(value)
    }
}
