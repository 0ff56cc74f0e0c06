//! Provides `Operand`, an open input file ready to be read line by line.
//! UTF-16 files with a Byte Order Mark are translated to UTF-8 on the fly.
use anyhow::{Context, Result};
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// An input file: `reader` decodes its contents, and `path_display` is its
/// path formatted for use in error messages. The file is closed when the
/// `Operand` is dropped, whichever way the caller exits.
///
/// * `T` - The type of the data being read
pub struct Operand<T: Read> {
    /// The path, formatted for error messages
    pub path_display: String,
    /// A buffered, decoding reader over the contents
    pub reader: BufReader<DecodeReaderBytes<T, Vec<u8>>>,
}

impl Operand<File> {
    /// Open the file at `path`
    pub fn open(path: &Path) -> Result<Operand<File>> {
        let path_display = format!("{}", path.display());
        let file = File::open(path).with_context(|| format!("Can't open file: {path_display}"))?;
        Ok(Operand::new(path_display, file))
    }
}

impl<T: Read> Operand<T> {
    /// Wrap `source`, which `path_display` names.
    pub fn new(path_display: String, source: T) -> Self {
        // This double-buffers: `DecodeReaderBytes` keeps a buffer of its own
        // inside the `BufReader`.
        let reader = BufReader::new(
            DecodeReaderBytesBuilder::new()
                .bom_sniffing(true) // Look at the BOM to detect UTF-16 files and convert to UTF-8
                .strip_bom(true) // Remove the BOM before sending data to us
                .utf8_passthru(true) // Don't enforce UTF-8 (BOM or no BOM)
                .build(source),
        );
        Operand { path_display, reader }
    }
}
