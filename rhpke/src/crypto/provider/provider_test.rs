use super::*;
use crate::crypto::params::{HpkeAead, HpkeKem};
use crate::crypto::resolver::*;

use serde::{Deserialize, Serialize};

const PLAINTEXT: &[u8] = b"38a6b327573639d654b5b729336cf74d01728cf4fa9af81a0ef1814ffc1d492f";

// https://www.rfc-editor.org/rfc/rfc5869#appendix-A test cases 1 and 3
const HKDF_SHA256_TESTS: &str = r#"[
  {
    "ikm": "0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b",
    "salt": "000102030405060708090a0b0c",
    "info": "f0f1f2f3f4f5f6f7f8f9",
    "length": 42,
    "prk": "077709362c2e32df0ddc3f0dc47bba6390b6c73bb50f9c3122ec844ad7c2b3e5",
    "okm": "3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf34007208d5b887185865"
  },
  {
    "ikm": "0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b",
    "salt": "",
    "info": "",
    "length": 42,
    "prk": "19ef24a32c717b167f33a91d6f648bdf96596776afdb6377ac434c1c293ccb04",
    "okm": "8da4e775a563c18f715f802a063c5a31b8a11f5c5ee1879ec3454e5f3c738d2d9d201395faa4b61a96c8"
  }
]"#;

// McGrew & Viega GCM specification test cases 1, 2, 13 and 14
const AES_GCM_TESTS: &str = r#"[
  {
    "aead_id": 1,
    "key": "00000000000000000000000000000000",
    "nonce": "000000000000000000000000",
    "plaintext": "",
    "ciphertext": "58e2fccefa7e3061367f1d57a4e7455a"
  },
  {
    "aead_id": 1,
    "key": "00000000000000000000000000000000",
    "nonce": "000000000000000000000000",
    "plaintext": "00000000000000000000000000000000",
    "ciphertext": "0388dace60b6a392f328c2b971b2fe78ab6e47d42cec13bdf53a67b21257bddf"
  },
  {
    "aead_id": 2,
    "key": "0000000000000000000000000000000000000000000000000000000000000000",
    "nonce": "000000000000000000000000",
    "plaintext": "",
    "ciphertext": "530f8afbc74536b9a963b4f1c4cb738b"
  },
  {
    "aead_id": 2,
    "key": "0000000000000000000000000000000000000000000000000000000000000000",
    "nonce": "000000000000000000000000",
    "plaintext": "00000000000000000000000000000000",
    "ciphertext": "cea7403d4d606b6e074ec5d3baf39d18d0d1c8a799996bf0265b98b5d48ab919"
  }
]"#;

// DHKEM(X25519, HKDF-SHA256) DeriveKeyPair and Decap computed per RFC9180 Sec.4.1 and Sec.7.1.3
const X25519_HKDF_SHA256_TEST: &str = r#"{
  "ikm": "0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20",
  "sk": "7357bc70e6c39c9fb33488b6378c36a628fd5beef3c8b8d9d6e3f35e5f6bb624",
  "pk": "49e4874e25fe389ed3c9fa2fd09d077907ecc5809c8619e2127128b6a72c7c7a",
  "enc": "f893919dde3fb177273c07b0702c80b4efd07c883d328ef349e025aeced6150e",
  "shared_secret": "b9c823771bdc64de556a4a49527c1b575c23c16f926dabc4dfe9e7456a9d758f"
}"#;

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
struct HkdfTest {
    #[serde(with = "hex")]
    ikm: Vec<u8>,
    #[serde(with = "hex")]
    salt: Vec<u8>,
    #[serde(with = "hex")]
    info: Vec<u8>,
    length: usize,
    #[serde(with = "hex")]
    prk: Vec<u8>,
    #[serde(with = "hex")]
    okm: Vec<u8>,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
struct AeadTest {
    aead_id: u16,
    #[serde(with = "hex")]
    key: Vec<u8>,
    #[serde(with = "hex")]
    nonce: Vec<u8>,
    #[serde(with = "hex")]
    plaintext: Vec<u8>,
    #[serde(with = "hex")]
    ciphertext: Vec<u8>,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
struct KemTest {
    #[serde(with = "hex")]
    ikm: Vec<u8>,
    #[serde(with = "hex")]
    sk: Vec<u8>,
    #[serde(with = "hex")]
    pk: Vec<u8>,
    #[serde(with = "hex")]
    enc: Vec<u8>,
    #[serde(with = "hex")]
    shared_secret: Vec<u8>,
}

#[cfg(feature = "RustCryptoProvider")]
#[test]
fn test_hkdf_sha256() -> Result<()> {
    let tests: Vec<HkdfTest> = serde_json::from_str(HKDF_SHA256_TESTS)?;
    let kdf = kdf_from_id(KdfId::HKDF_SHA256)?;

    for tc in &tests {
        let prk = kdf.extract(&tc.salt, &tc.ikm)?;
        assert_eq!(prk.as_ref(), &tc.prk);
        let okm = kdf.expand(&prk, &tc.info, tc.length)?;
        assert_eq!(okm.as_ref(), &tc.okm);
        let okm = kdf.extract_and_expand(&tc.salt, &tc.ikm, &tc.info, tc.length)?;
        assert_eq!(okm.as_ref(), &tc.okm);
    }

    Ok(())
}

#[cfg(feature = "RustCryptoProvider")]
#[test]
fn test_hkdf_labeled() -> Result<()> {
    let kdf = kdf_from_id(KdfId::HKDF_SHA256)?;
    let suite_id = b"HPKE\x00\x20\x00\x01\x00\x01";

    let prk = kdf.labeled_extract(b"salt", b"psk_id_hash", b"ikm", suite_id)?;
    let expected = kdf.extract(b"salt", b"HPKE-v1HPKE\x00\x20\x00\x01\x00\x01psk_id_hashikm")?;
    assert_eq!(prk, expected);
    assert_eq!(prk.len(), kdf.mac_length());

    let okm = kdf.labeled_expand(&prk, b"key", b"context", 16, suite_id)?;
    let expected = kdf.expand(
        &prk,
        b"\x00\x10HPKE-v1HPKE\x00\x20\x00\x01\x00\x01keycontext",
        16,
    )?;
    assert_eq!(okm, expected);

    // HKDF cannot produce more than 255 * Nh bytes
    assert!(matches!(
        kdf.expand(&prk, b"", 255 * 32 + 1),
        Err(Error::RustCryptoError(_))
    ));
    // a pseudorandom key shorter than Nh is rejected
    assert!(kdf.expand(&prk[..16], b"", 32).is_err());

    Ok(())
}

#[cfg(feature = "RustCryptoProvider")]
#[test]
fn test_aes_gcm() -> Result<()> {
    let tests: Vec<AeadTest> = serde_json::from_str(AES_GCM_TESTS)?;

    for tc in &tests {
        let aead = aead_from_id(AeadId::from_u16(tc.aead_id))?;
        assert_eq!(aead.key_size(), tc.key.len());

        let ciphertext = aead.seal(&tc.key, &tc.nonce, &tc.plaintext, &[])?;
        assert_eq!(ciphertext.as_ref(), &tc.ciphertext);
        assert_eq!(ciphertext.len(), tc.plaintext.len() + aead.tag_size());

        let plaintext = aead.open(&tc.key, &tc.nonce, &tc.ciphertext, &[])?;
        assert_eq!(plaintext.as_ref(), &tc.plaintext);
    }

    Ok(())
}

fn test_aead_seal_open_with(aead: &dyn Aead) -> Result<()> {
    let key = vec![0x5au8; aead.key_size()];
    let nonce = vec![0xa5u8; aead.nonce_size()];
    let aad = b"associated data";

    let ciphertext = aead.seal(&key, &nonce, PLAINTEXT, aad)?;
    assert_eq!(aead.open(&key, &nonce, &ciphertext, aad)?.as_ref(), PLAINTEXT);

    let mut tampered = ciphertext.to_vec();
    tampered[0] ^= 1;
    assert!(matches!(
        aead.open(&key, &nonce, &tampered, aad),
        Err(Error::OpenFailed)
    ));
    assert!(matches!(
        aead.open(&key, &nonce, &ciphertext, b"other data"),
        Err(Error::OpenFailed)
    ));

    assert!(matches!(
        aead.seal(&key[1..], &nonce, PLAINTEXT, aad),
        Err(Error::InvalidKeyLength(n)) if n == aead.key_size() - 1
    ));
    assert!(matches!(
        aead.open(&key, &nonce[1..], &ciphertext, aad),
        Err(Error::InvalidNonceLength(11))
    ));

    Ok(())
}

#[cfg(feature = "RustCryptoProvider")]
#[test]
fn test_aead_seal_open() -> Result<()> {
    test_aead_seal_open_with(aead_from_id(AeadId::AES_128_GCM)?.as_ref())?;
    test_aead_seal_open_with(aead_from_descriptor(HpkeAead::Aes256Gcm)?.as_ref())?;
    Ok(())
}

#[cfg(feature = "RustCryptoProvider")]
#[test]
fn test_aes_gcm_rejects_key_size() {
    for key_size in [0, 24, 64] {
        let err = RustCryptoProvider::aes_gcm(key_size).err();
        assert!(matches!(err, Some(Error::PrimitiveInitialization(_))));
    }
}

#[cfg(feature = "RustCryptoProvider")]
#[test]
fn test_x25519_hkdf_sha256() -> Result<()> {
    let tc: KemTest = serde_json::from_str(X25519_HKDF_SHA256_TEST)?;
    let kem = kem_from_id(KemId::X25519_HKDF_SHA256)?;

    let key_pair = kem.derive_key_pair(&tc.ikm)?;
    assert_eq!(key_pair.public_key(), &tc.pk[..]);

    let shared_secret = kem.decapsulate(&tc.enc, &tc.sk)?;
    assert_eq!(shared_secret.as_ref(), &tc.shared_secret);
    let shared_secret = kem.decapsulate(&tc.enc, key_pair.private_key())?;
    assert_eq!(shared_secret.as_ref(), &tc.shared_secret);

    Ok(())
}

#[cfg(feature = "RustCryptoProvider")]
#[test]
fn test_kem_encapsulate_decapsulate() -> Result<()> {
    let kem = kem_from_descriptor(HpkeKem::DhkemX25519HkdfSha256)?;
    let key_pair = kem.generate_key_pair()?;
    assert_eq!(key_pair.public_key().len(), kem.public_key_size());

    let (shared_secret, encapsulated_key) = kem.encapsulate(key_pair.public_key())?;
    assert_eq!(shared_secret.len(), kem.shared_secret_size());
    assert_eq!(encapsulated_key.len(), kem.encapsulated_key_size());

    let decapsulated = kem.decapsulate(&encapsulated_key, key_pair.private_key())?;
    assert_eq!(decapsulated, shared_secret);

    // a fresh ephemeral key is used for every encapsulation
    let (other_secret, other_key) = kem.encapsulate(key_pair.public_key())?;
    assert_ne!(other_key, encapsulated_key);
    assert_ne!(other_secret, shared_secret);

    assert!(matches!(
        kem.encapsulate(&key_pair.public_key()[1..]),
        Err(Error::HpkeError(_))
    ));
    assert!(matches!(
        kem.decapsulate(&encapsulated_key, &[]),
        Err(Error::HpkeError(_))
    ));

    Ok(())
}

#[cfg(feature = "RustCryptoProvider")]
#[test]
fn test_concurrent_resolution() -> Result<()> {
    let ikm = [0x11u8; 32];
    let expected = kem_from_id(KemId::X25519_HKDF_SHA256)?.derive_key_pair(&ikm)?;

    std::thread::scope(|s| -> Result<()> {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| -> Result<HpkeKeyPair> {
                    let kem = kem_from_id(KemId::X25519_HKDF_SHA256)?;
                    let aead = aead_from_id(AeadId::AES_256_GCM)?;
                    assert_eq!(aead.key_size(), 32);
                    kem.derive_key_pair(&ikm)
                })
            })
            .collect();

        for handle in handles {
            let key_pair = handle
                .join()
                .map_err(|_| Error::Other("resolver thread panicked".to_string()))??;
            assert_eq!(key_pair, expected);
        }
        Ok(())
    })
}
