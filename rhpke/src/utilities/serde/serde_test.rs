use bytes::{Buf, Bytes, BytesMut};

use super::*;
use crate::crypto::identifier::{AeadId, KdfId, KemId};

#[test]
fn test_u16() -> Result<()> {
    let mut buf = BytesMut::new();
    serialize_u16(0x0020, &mut buf)?;
    serialize_u16(0xfffe, &mut buf)?;
    assert_eq!(buf.as_ref(), &[0x00, 0x20, 0xff, 0xfe]);

    let mut buf = buf.freeze();
    assert_eq!(deserialize_u16(&mut buf)?, 0x0020);
    assert_eq!(deserialize_u16(&mut buf)?, 0xfffe);
    assert!(!buf.has_remaining());
    assert!(matches!(deserialize_u16(&mut buf), Err(Error::BufferTooSmall)));

    let mut buf = Bytes::from_static(&[0x01]);
    assert!(matches!(deserialize_u16(&mut buf), Err(Error::BufferTooSmall)));

    let mut out = [0u8; 1];
    assert!(matches!(
        serialize_u16(1, &mut &mut out[..]),
        Err(Error::BufferTooSmall)
    ));
    Ok(())
}

#[test]
fn test_identifiers() -> Result<()> {
    let mut buf = BytesMut::new();
    KemId::X25519_HKDF_SHA256.serialize(&mut buf)?;
    KdfId::HKDF_SHA256.serialize(&mut buf)?;
    AeadId::AES_256_GCM.serialize(&mut buf)?;
    assert_eq!(buf.as_ref(), &[0x00, 0x20, 0x00, 0x01, 0x00, 0x02]);

    let mut buf = buf.freeze();
    assert_eq!(KemId::deserialize(&mut buf)?, KemId::X25519_HKDF_SHA256);
    assert_eq!(KdfId::deserialize(&mut buf)?, KdfId::HKDF_SHA256);
    assert_eq!(AeadId::deserialize(&mut buf)?, AeadId::AES_256_GCM);

    assert_eq!(
        AeadId::AES_128_GCM.serialize_detached()?.as_ref(),
        AeadId::AES_128_GCM.as_bytes()
    );
    assert_eq!(AeadId::deserialize_exact(&[0x00, 0x01])?, AeadId::AES_128_GCM);
    assert!(matches!(
        AeadId::deserialize_exact(&[0x00, 0x01, 0x00]),
        Err(Error::Other(_))
    ));
    assert!(matches!(
        KemId::deserialize_exact(&[]),
        Err(Error::BufferTooSmall)
    ));
    Ok(())
}
