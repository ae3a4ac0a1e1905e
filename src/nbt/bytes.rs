use std::io::{self, Read, Write};

use crate::nbt::{NbtError, Result};

/// Largest string payload expressible by the 16-bit length prefix.
pub const MAX_STRING_LEN: usize = u16::MAX as usize;

/// Upper bound on up-front allocation for length-prefixed payloads.
///
/// Larger payloads still decode, the buffer just grows as bytes actually arrive.
const PREALLOC_LIMIT: usize = 64 * 1024;

/// Big-endian primitive reader over a byte stream.
///
/// Tracks the absolute number of bytes consumed so failures can report an offset.
pub struct Reader<R> {
	inner: R,
	pos: u64,
}

impl<R: Read> Reader<R> {
	/// Wrap a stream, starting the offset counter at 0.
	pub fn new(inner: R) -> Self {
		Self { inner, pos: 0 }
	}

	/// Return bytes consumed so far.
	pub fn pos(&self) -> u64 {
		self.pos
	}

	/// Unwrap the underlying stream.
	pub fn into_inner(self) -> R {
		self.inner
	}

	fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
		match self.inner.read_exact(buf) {
			Ok(()) => {
				self.pos += buf.len() as u64;
				Ok(())
			}
			Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Err(NbtError::UnexpectedEnd {
				at: self.pos,
				need: buf.len(),
			}),
			Err(err) => Err(err.into()),
		}
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let mut buf = [0_u8; N];
		self.fill(&mut buf)?;
		Ok(buf)
	}

	/// Read exactly `len` raw bytes.
	pub fn read_vec(&mut self, len: usize) -> Result<Vec<u8>> {
		let mut out = Vec::with_capacity(len.min(PREALLOC_LIMIT));
		let got = self.inner.by_ref().take(len as u64).read_to_end(&mut out)?;
		if got < len {
			return Err(NbtError::UnexpectedEnd { at: self.pos, need: len });
		}

		self.pos += len as u64;
		Ok(out)
	}

	/// Read one unsigned byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		let [byte] = self.read_array::<1>()?;
		Ok(byte)
	}

	/// Read a big-endian `i16`.
	pub fn read_i16(&mut self) -> Result<i16> {
		Ok(i16::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `u16`.
	pub fn read_u16(&mut self) -> Result<u16> {
		Ok(u16::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		Ok(i32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i64`.
	pub fn read_i64(&mut self) -> Result<i64> {
		Ok(i64::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian IEEE-754 binary32 bit pattern.
	pub fn read_f32(&mut self) -> Result<f32> {
		Ok(f32::from_bits(u32::from_be_bytes(self.read_array()?)))
	}

	/// Read a big-endian IEEE-754 binary64 bit pattern.
	pub fn read_f64(&mut self) -> Result<f64> {
		Ok(f64::from_bits(u64::from_be_bytes(self.read_array()?)))
	}

	/// Read a `u16`-length-prefixed UTF-8 string.
	pub fn read_string(&mut self) -> Result<String> {
		let len = usize::from(self.read_u16()?);
		if len == 0 {
			return Ok(String::new());
		}

		let at = self.pos;
		let bytes = self.read_vec(len)?;
		String::from_utf8(bytes).map_err(|_| NbtError::InvalidUtf8 { at })
	}

	/// Read an `i32`-length-prefixed byte payload.
	pub fn read_bytes(&mut self) -> Result<Vec<u8>> {
		let len = self.read_len_i32()?;
		if len == 0 {
			return Ok(Vec::new());
		}
		self.read_vec(len)
	}

	/// Read an `i32`-length-prefixed sequence of big-endian `i32` values.
	pub fn read_int_array(&mut self) -> Result<Vec<i32>> {
		let len = self.read_len_i32()?;
		let mut out = Vec::with_capacity(len.min(PREALLOC_LIMIT / 4));
		for _ in 0..len {
			out.push(self.read_i32()?);
		}
		Ok(out)
	}

	/// Read an `i64`-length-prefixed sequence of big-endian `i64` values.
	pub fn read_long_array(&mut self) -> Result<Vec<i64>> {
		let len = self.read_i64()?;
		if len < 0 {
			return Err(NbtError::NegativeLength { len });
		}

		let len = len as u64;
		let mut out = Vec::with_capacity(len.min((PREALLOC_LIMIT / 8) as u64) as usize);
		for _ in 0..len {
			out.push(self.read_i64()?);
		}
		Ok(out)
	}

	/// Read a signed 32-bit length or count prefix, rejecting negatives.
	pub fn read_len_i32(&mut self) -> Result<usize> {
		let len = self.read_i32()?;
		usize::try_from(len).map_err(|_| NbtError::NegativeLength { len: i64::from(len) })
	}
}

/// Big-endian primitive writer over a byte stream.
pub struct Writer<W> {
	inner: W,
}

impl<W: Write> Writer<W> {
	/// Wrap a stream.
	pub fn new(inner: W) -> Self {
		Self { inner }
	}

	/// Unwrap the underlying stream.
	pub fn into_inner(self) -> W {
		self.inner
	}

	/// Write one unsigned byte.
	pub fn write_u8(&mut self, value: u8) -> Result<()> {
		self.inner.write_all(&[value])?;
		Ok(())
	}

	/// Write a big-endian `i16`.
	pub fn write_i16(&mut self, value: i16) -> Result<()> {
		self.inner.write_all(&value.to_be_bytes())?;
		Ok(())
	}

	/// Write a big-endian `i32`.
	pub fn write_i32(&mut self, value: i32) -> Result<()> {
		self.inner.write_all(&value.to_be_bytes())?;
		Ok(())
	}

	/// Write a big-endian `i64`.
	pub fn write_i64(&mut self, value: i64) -> Result<()> {
		self.inner.write_all(&value.to_be_bytes())?;
		Ok(())
	}

	/// Write an `f32` as its big-endian bit pattern.
	pub fn write_f32(&mut self, value: f32) -> Result<()> {
		self.inner.write_all(&value.to_bits().to_be_bytes())?;
		Ok(())
	}

	/// Write an `f64` as its big-endian bit pattern.
	pub fn write_f64(&mut self, value: f64) -> Result<()> {
		self.inner.write_all(&value.to_bits().to_be_bytes())?;
		Ok(())
	}

	/// Write a `u16`-length-prefixed UTF-8 string.
	pub fn write_string(&mut self, value: &str) -> Result<()> {
		let len = u16::try_from(value.len()).map_err(|_| NbtError::StringTooLong { len: value.len() })?;
		self.inner.write_all(&len.to_be_bytes())?;
		self.inner.write_all(value.as_bytes())?;
		Ok(())
	}

	/// Write an `i32`-length-prefixed byte payload.
	pub fn write_bytes(&mut self, value: &[u8]) -> Result<()> {
		self.write_len_i32(value.len())?;
		self.inner.write_all(value)?;
		Ok(())
	}

	/// Write an `i32`-length-prefixed sequence of `i32` values.
	pub fn write_int_array(&mut self, values: &[i32]) -> Result<()> {
		self.write_len_i32(values.len())?;
		for value in values {
			self.write_i32(*value)?;
		}
		Ok(())
	}

	/// Write an `i64`-length-prefixed sequence of `i64` values.
	pub fn write_long_array(&mut self, values: &[i64]) -> Result<()> {
		let len = i64::try_from(values.len()).map_err(|_| NbtError::LengthOverflow { len: values.len() })?;
		self.write_i64(len)?;
		for value in values {
			self.write_i64(*value)?;
		}
		Ok(())
	}

	/// Write a signed 32-bit length or count prefix.
	pub fn write_len_i32(&mut self, len: usize) -> Result<()> {
		let len = i32::try_from(len).map_err(|_| NbtError::LengthOverflow { len })?;
		self.write_i32(len)
	}
}
