//! zlib compression of serialized tiles

use std::io::Read;

use flate2::read::ZlibDecoder;
use flate2::{Compress, Compression, FlushCompress, Status};
use tracing::debug;

use crate::error::TileError;

/// Compress `input` into a zlib stream
///
/// The output buffer starts at `input.len() / 2 + 1024` bytes and doubles
/// whenever the compressor fills it, until the stream is finished.
pub fn compress(input: &[u8], level: u32) -> Result<Vec<u8>, TileError> {
    let mut deflater = Compress::new(Compression::new(level), true);
    let mut output = Vec::new();
    let mut chunk = input.len() / 2 + 1024;

    loop {
        let consumed = deflater.total_in() as usize;
        let written = deflater.total_out() as usize;
        output.resize(written + chunk, 0);

        let status = deflater.compress(
            &input[consumed..],
            &mut output[written..],
            FlushCompress::Finish,
        )?;

        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError => {
                chunk *= 2;
                debug!(
                    "compress: output full at {} bytes, growing by {}",
                    deflater.total_out(),
                    chunk
                );
            }
        }
    }

    output.truncate(deflater.total_out() as usize);
    Ok(output)
}

/// Inflate a zlib stream produced by [`compress`]
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, TileError> {
    let mut decoder = ZlibDecoder::new(input);
    let mut output = Vec::new();
    decoder.read_to_end(&mut output)?;
    Ok(output)
}
