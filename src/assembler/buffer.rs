//! Fixed-capacity output image.
use super::error::{Error, Result};

/// Size of the whole CHIP-8 address space.
pub const CAPACITY: usize = 4096;

pub struct OpcodeBuffer {
    bytes: Vec<u8>,
    len: usize,
}

impl OpcodeBuffer {
    pub fn new() -> Self {
        OpcodeBuffer { bytes: vec![0; CAPACITY], len: 0 }
    }

    pub fn byte_length(&self) -> usize {
        self.len
    }

    /// The bytes written so far.
    pub fn save(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn put_byte(&mut self, value: u8) -> Result<()> {
        self.reserve(1)?;
        self.bytes[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Writes an instruction word, high byte first.
    pub fn put(&mut self, value: u16) -> Result<()> {
        self.reserve(2)?;
        self.bytes[self.len..self.len + 2].copy_from_slice(&value.to_be_bytes());
        self.len += 2;
        Ok(())
    }

    fn reserve(&self, n: usize) -> Result<()> {
        if self.len + n > CAPACITY {
            return Err(Error::BufferOverflow { capacity: CAPACITY });
        }
        Ok(())
    }
}

impl Default for OpcodeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_put() {
        let mut buffer = OpcodeBuffer::new();
        buffer.put(0x00E0).unwrap();
        buffer.put_byte(0xF0).unwrap();
        buffer.put(0xA2F0).unwrap();

        assert_eq!(buffer.byte_length(), 5);
        assert_eq!(buffer.save(), &[0x00, 0xE0, 0xF0, 0xA2, 0xF0]);
    }

    #[test]
    fn test_overflow() {
        let mut buffer = OpcodeBuffer::new();
        for _ in 0..CAPACITY / 2 {
            buffer.put(0x1234).unwrap();
        }
        assert_eq!(buffer.byte_length(), CAPACITY);
        assert!(matches!(buffer.put_byte(0), Err(Error::BufferOverflow { capacity: CAPACITY })));
        assert!(matches!(buffer.put(0), Err(Error::BufferOverflow { .. })));
    }

    #[test]
    fn test_word_does_not_straddle_the_end() {
        let mut buffer = OpcodeBuffer::new();
        for _ in 0..CAPACITY - 1 {
            buffer.put_byte(0xFF).unwrap();
        }
        assert!(buffer.put(0x00E0).is_err());
        assert_eq!(buffer.byte_length(), CAPACITY - 1);
        buffer.put_byte(0x00).unwrap();
    }
}
