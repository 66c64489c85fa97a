//! Host-side access to raw data.
//!
//! This module streams bytes from files on the host machine and turns them
//! into 8-bit [`Packet`](crate::binary::Packet)s ready for the ALU.

pub mod file;

pub use file::{bytes_to_packets, byte_to_packet, open_packets, current_dir_join, PacketReader, HostError};
