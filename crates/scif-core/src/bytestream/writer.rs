/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

static ERROR_MSG: &str = "No more space";

/// Encapsulates a simple byte writer with
/// support for endian aware writes
pub struct ZByteWriter<'a> {
    buffer:   &'a mut [u8],
    position: usize
}

impl<'a> ZByteWriter<'a> {
    /// Create a new writer for the stream
    pub fn new(data: &'a mut [u8]) -> ZByteWriter<'a> {
        ZByteWriter { buffer: data, position: 0 }
    }

    /// Return the number of unwritten bytes in this stream
    ///
    /// # Example
    /// ```
    /// use scif_core::bytestream::ZByteWriter;
    /// let mut storage = [0; 10];
    ///
    /// let writer = ZByteWriter::new(&mut storage);
    /// assert_eq!(writer.bytes_left(), 10); // no bytes were written
    /// ```
    pub const fn bytes_left(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Return the number of bytes the writer has written
    pub const fn bytes_written(&self) -> usize {
        self.position
    }

    /// Check if the byte writer can support
    /// the following write
    ///
    /// # Example
    /// ```
    /// use scif_core::bytestream::ZByteWriter;
    /// let mut data = [0; 10];
    /// let mut stream = ZByteWriter::new(&mut data);
    /// assert!(stream.has(5));
    /// assert!(!stream.has(100));
    /// ```
    pub const fn has(&self, bytes: usize) -> bool {
        self.position.saturating_add(bytes) <= self.buffer.len()
    }

    /// Write a single byte into the bytestream or error out
    /// if there is not enough space
    pub fn write_u8_err(&mut self, byte: u8) -> Result<(), &'static str> {
        match self.buffer.get_mut(self.position) {
            Some(m_byte) => {
                self.position += 1;
                *m_byte = byte;

                Ok(())
            }
            None => Err(ERROR_MSG)
        }
    }

    /// Write a single byte in the stream or don't write
    /// anything if the buffer is full and cannot support the write
    ///
    /// Should be combined with [`has`](Self::has)
    pub fn write_u8(&mut self, byte: u8) {
        if let Some(m_byte) = self.buffer.get_mut(self.position) {
            self.position += 1;
            *m_byte = byte;
        }
    }

    /// Write `u16` as a big endian integer, erroring out if the
    /// underlying buffer cannot support a `u16` write
    #[inline]
    pub fn write_u16_be_err(&mut self, value: u16) -> Result<(), &'static str> {
        self.write_const_bytes(&value.to_be_bytes())
    }

    /// Write a fixed number of bytes into the bytestream, erroring
    /// out if the buffer cannot support the write
    #[inline]
    pub fn write_const_bytes(&mut self, bytes: &[u8]) -> Result<(), &'static str> {
        match self
            .buffer
            .get_mut(self.position..self.position + bytes.len())
        {
            Some(m_bytes) => {
                self.position += bytes.len();
                m_bytes.copy_from_slice(bytes);

                Ok(())
            }
            None => Err(ERROR_MSG)
        }
    }
}
