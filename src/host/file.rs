//! Byte streams as packets.
//!
//! Each byte becomes one 8-bit packet, most significant bit first. Files
//! are read through a [`BufReader`] one byte at a time so inputs of any
//! size can be streamed without loading them whole.

use crate::binary::Packet;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};
use log::debug;
use thiserror::Error;

/// Width of a packet produced from one byte.
pub const BYTE_WIDTH: usize = 8;

/// Convert a single byte to an 8-bit packet (MSB first).
pub fn byte_to_packet(byte: u8) -> Packet {
    let bits = (0..BYTE_WIDTH)
        .map(|i| byte & (0x80 >> i) != 0)
        .collect();
    Packet::new(bits)
}

/// Convert a byte slice to one packet per byte.
pub fn bytes_to_packets(bytes: &[u8]) -> Vec<Packet> {
    bytes.iter().map(|&b| byte_to_packet(b)).collect()
}

/// Streaming reader that yields one packet per input byte.
pub struct PacketReader<R: Read> {
    inner: BufReader<R>,
    offset: u64,
    done: bool,
}

impl<R: Read> PacketReader<R> {
    /// Wrap any byte source.
    pub fn new(source: R) -> Self {
        Self {
            inner: BufReader::new(source),
            offset: 0,
            done: false,
        }
    }

    /// Number of bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl<R: Read> Iterator for PacketReader<R> {
    type Item = Result<Packet, HostError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {
                    self.offset += 1;
                    return Some(Ok(byte_to_packet(byte[0])));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(HostError::IoError(format!(
                        "read failed at byte {}: {}",
                        self.offset, e
                    ))));
                }
            }
        }
    }
}

/// Open a file on the host and stream it as packets.
pub fn open_packets<P: AsRef<Path>>(path: P) -> Result<PacketReader<File>, HostError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| HostError::IoError(format!("{}: {}", path.display(), e)))?;
    debug!("streaming packets from {}", path.display());
    Ok(PacketReader::new(file))
}

/// Resolve a path relative to the current working directory.
pub fn current_dir_join<P: AsRef<Path>>(suffix: P) -> Result<PathBuf, HostError> {
    let cwd = std::env::current_dir()
        .map_err(|e| HostError::IoError(format!("cannot read working directory: {}", e)))?;
    Ok(cwd.join(suffix))
}

/// Errors that can occur while reading host data.
#[derive(Debug, Clone, Error)]
pub enum HostError {
    #[error("I/O error: {0}")]
    IoError(String),
}
