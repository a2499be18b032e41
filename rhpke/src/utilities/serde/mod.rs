//! Fixed-width big-endian codec for the identifiers carried on the wire.

#[cfg(test)]
mod serde_test;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::utilities::error::{Error, Result};

pub fn deserialize_u16<B: Buf>(buf: &mut B) -> Result<u16> {
    if buf.remaining() < 2 {
        return Err(Error::BufferTooSmall);
    }
    Ok(buf.get_u16())
}

pub fn serialize_u16<B: BufMut>(v: u16, buf: &mut B) -> Result<()> {
    if buf.remaining_mut() < 2 {
        return Err(Error::BufferTooSmall);
    }
    buf.put_u16(v);
    Ok(())
}

pub trait Deserializer {
    fn deserialize<B>(buf: &mut B) -> Result<Self>
    where
        Self: Sized,
        B: Buf;

    fn deserialize_exact(data: &[u8]) -> Result<Self>
    where
        Self: Sized,
    {
        let mut buf = Bytes::copy_from_slice(data);
        let v = Self::deserialize(&mut buf)?;
        if buf.has_remaining() {
            return Err(Error::Other(format!(
                "input contains {} excess bytes",
                buf.remaining()
            )));
        }
        Ok(v)
    }
}

pub trait Serializer {
    fn serialize<B>(&self, buf: &mut B) -> Result<()>
    where
        Self: Sized,
        B: BufMut;

    fn serialize_detached(&self) -> Result<Bytes>
    where
        Self: Sized,
    {
        let mut buf = BytesMut::new();
        self.serialize(&mut buf)?;
        Ok(buf.freeze())
    }
}
