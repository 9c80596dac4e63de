/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::Formatter;

/// Errors that may occur when reading from a bytestream
pub enum ZByteIoError {
    /// Not enough bytes to satisfy a read.
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes requested
    /// - 2nd argument is the number of bytes actually left
    NotEnoughBytes(usize, usize),
    /// Generic error message
    Generic(&'static str)
}

impl core::fmt::Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl From<&'static str> for ZByteIoError {
    fn from(value: &'static str) -> Self {
        ZByteIoError::Generic(value)
    }
}

/// Encapsulates a simple byte reader with support
/// for endian aware reads over an in-memory buffer
pub struct ZByteReader<'a> {
    buffer:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    /// Create a new reader for the stream
    pub const fn new(buffer: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader { buffer, position: 0 }
    }

    /// Check if the stream can support the following
    /// number of reads without going out of bounds
    ///
    /// # Example
    /// ```
    /// use scif_core::bytestream::ZByteReader;
    /// let stream = ZByteReader::new(&[0; 5]);
    /// assert!(stream.has(5));
    /// assert!(!stream.has(6));
    /// ```
    pub const fn has(&self, bytes: usize) -> bool {
        self.position.saturating_add(bytes) <= self.buffer.len()
    }

    /// Return the current position of the stream
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Return the number of unread bytes in the stream
    pub const fn bytes_left(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Skip `num` bytes ahead of the stream, saturating
    /// at the end of the buffer
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.buffer.len());
    }

    /// Read a single byte from the stream or return 0
    /// if the stream has been fully consumed
    ///
    /// Should be combined with [`has`](Self::has)
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        match self.buffer.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    /// Read a single byte from the stream, erroring out
    /// if the stream has been fully consumed
    #[inline]
    pub fn get_u8_err(&mut self) -> Result<u8, ZByteIoError> {
        match self.buffer.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ZByteIoError::NotEnoughBytes(1, 0))
        }
    }

    /// Read `u16` as a big endian integer, returning 0 if the
    /// stream does not have enough bytes for a `u16` read
    ///
    /// Should be combined with [`has`](Self::has)
    #[inline(always)]
    pub fn get_u16_be(&mut self) -> u16 {
        u16::from_be_bytes(self.get_fixed_bytes_or_zero::<2>())
    }

    /// Read `u16` as a big endian integer, returning an error
    /// if the stream cannot support a `u16` read
    #[inline]
    pub fn get_u16_be_err(&mut self) -> Result<u16, ZByteIoError> {
        let bytes = self.read_fixed_bytes_or_error::<2>()?;
        Ok(u16::from_be_bytes(bytes))
    }

    /// Read a fixed number of bytes from the stream, erroring out
    /// if the stream cannot satisfy the read
    #[inline]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ZByteIoError> {
        match self.buffer.get(self.position..self.position + N) {
            Some(bytes) => {
                self.position += N;
                let mut byte_store = [0; N];
                byte_store.copy_from_slice(bytes);
                Ok(byte_store)
            }
            None => Err(ZByteIoError::NotEnoughBytes(N, self.bytes_left()))
        }
    }

    /// Read a fixed number of bytes from the stream, returning
    /// zeroes if the stream cannot satisfy the read
    ///
    /// Should be combined with [`has`](Self::has)
    #[inline]
    pub fn get_fixed_bytes_or_zero<const N: usize>(&mut self) -> [u8; N] {
        match self.read_fixed_bytes_or_error::<N>() {
            Ok(bytes) => bytes,
            Err(_) => {
                self.position = self.buffer.len();
                [0; N]
            }
        }
    }

    /// Return all unread bytes in the stream and advance
    /// the position to the end of the buffer
    ///
    /// # Example
    /// ```
    /// use scif_core::bytestream::ZByteReader;
    /// let mut stream = ZByteReader::new(&[1, 2, 3]);
    /// stream.get_u8();
    /// assert_eq!(stream.remaining(), &[2, 3]);
    /// ```
    pub fn remaining(&mut self) -> &'a [u8] {
        let bytes = &self.buffer[self.position..];
        self.position = self.buffer.len();
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::ZByteReader;

    #[test]
    fn be_reads_match_layout() {
        let mut stream = ZByteReader::new(&[0x00, 0x64, 0x00, 0x32, 0x01]);

        assert_eq!(stream.get_u16_be(), 100);
        assert_eq!(stream.get_u16_be(), 50);
        assert_eq!(stream.get_u8(), 1);
        assert!(!stream.has(1));
    }

    #[test]
    fn short_reads_error() {
        let mut stream = ZByteReader::new(&[0x01]);

        assert!(stream.get_u16_be_err().is_err());
    }
}
