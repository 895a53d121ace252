//! Textual envelope: `<cipherTextHex>$<ivHex>[$<tagHex>]`
//!
//! The envelope is the only artifact that survives between calls. Fields are
//! kept as the received text, because the integrity tag is computed over the
//! ciphertext hex *text*; decoding happens on demand.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Separator between envelope fields
pub const DELIMITER: char = '$';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    cipher_text: String,
    iv: String,
    tag: Option<String>,
}

impl Envelope {
    /// Envelope for raw ciphertext and IV bytes, without a tag
    pub fn from_parts(cipher_text: &[u8], iv: &[u8]) -> Self {
        Self {
            cipher_text: hex::encode(cipher_text),
            iv: hex::encode(iv),
            tag: None,
        }
    }

    /// Attach an integrity tag (hex text)
    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Split an envelope into its fields.
    ///
    /// The IV field is required. Fields after the third are ignored, and an
    /// empty third field counts as no tag.
    ///
    /// ```
    ///   use hexseal::Envelope;
    ///   let env = Envelope::parse("00ff$0102").unwrap();
    ///   assert_eq!(env.cipher_text_hex(), "00ff");
    ///   assert_eq!(env.iv_hex(), "0102");
    ///   assert_eq!(env.tag(), None);
    ///   assert!(Envelope::parse("00ff").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, Error> {
        let mut fields = s.split(DELIMITER);
        let cipher_text = fields.next().unwrap_or_default();
        let iv = fields
            .next()
            .ok_or_else(|| Error::InvalidEnvelope("missing IV field".to_string()))?;
        let tag = fields.next().filter(|t| !t.is_empty());
        Ok(Self {
            cipher_text: cipher_text.to_string(),
            iv: iv.to_string(),
            tag: tag.map(String::from),
        })
    }

    pub fn cipher_text_hex(&self) -> &str {
        &self.cipher_text
    }

    pub fn iv_hex(&self) -> &str {
        &self.iv
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Decoded ciphertext bytes
    pub fn decode_cipher_text(&self) -> Result<Vec<u8>, Error> {
        Ok(hex::decode(&self.cipher_text)?)
    }

    /// Decoded IV bytes. Length is not checked here; the cipher rejects
    /// anything other than [`IVBYTES`](crate::ciphers::aesctr::IVBYTES).
    pub fn decode_iv(&self) -> Result<Vec<u8>, Error> {
        Ok(hex::decode(&self.iv)?)
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.cipher_text, DELIMITER, self.iv)?;
        if let Some(tag) = &self.tag {
            write!(f, "{}{}", DELIMITER, tag)?;
        }
        Ok(())
    }
}

impl FromStr for Envelope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Envelope::parse(s)
    }
}

#[cfg(test)]
mod test {

    use super::Envelope;
    use crate::error::{Error, Result};

    #[test]
    fn format_without_tag() {
        let env = Envelope::from_parts(&[0x00, 0xab], &[0x01; 16]);
        assert_eq!(
            env.to_string(),
            "00ab$01010101010101010101010101010101"
        );
    }

    #[test]
    fn format_with_tag() {
        let env = Envelope::from_parts(&[0xff], &[0x02]).with_tag("abc");
        assert_eq!(env.to_string(), "ff$02$abc");
    }

    #[test]
    fn parse_fields() -> Result<(), Error> {
        let env: Envelope = "00ab$0102$deadbeef".parse()?;
        assert_eq!(env.cipher_text_hex(), "00ab");
        assert_eq!(env.iv_hex(), "0102");
        assert_eq!(env.tag(), Some("deadbeef"));
        assert_eq!(env.decode_cipher_text()?, vec![0x00, 0xab]);
        assert_eq!(env.decode_iv()?, vec![0x01, 0x02]);
        Ok(())
    }

    #[test]
    fn parse_round_trips_text() -> Result<(), Error> {
        for s in &["00ab$0102$deadbeef", "00ab$0102", "$0102"] {
            assert_eq!(Envelope::parse(s)?.to_string(), *s);
        }
        Ok(())
    }

    #[test]
    fn empty_tag_is_absent() -> Result<(), Error> {
        let env = Envelope::parse("00ab$0102$")?;
        assert_eq!(env.tag(), None);
        Ok(())
    }

    #[test]
    fn extra_fields_ignored() -> Result<(), Error> {
        let env = Envelope::parse("00ab$0102$beef$junk$more")?;
        assert_eq!(env.tag(), Some("beef"));
        assert_eq!(env.to_string(), "00ab$0102$beef");
        Ok(())
    }

    #[test]
    fn empty_cipher_text() -> Result<(), Error> {
        let env = Envelope::parse("$0102")?;
        assert!(env.decode_cipher_text()?.is_empty());
        Ok(())
    }

    #[test]
    fn missing_iv() {
        assert!(matches!(
            Envelope::parse("00ab"),
            Err(Error::InvalidEnvelope(_))
        ));
        assert!(matches!(Envelope::parse(""), Err(Error::InvalidEnvelope(_))));
    }

    #[test]
    fn bad_hex() -> Result<(), Error> {
        let env = Envelope::parse("0g$010")?;
        assert!(matches!(env.decode_cipher_text(), Err(Error::HexDecode(_))));
        assert!(matches!(env.decode_iv(), Err(Error::HexDecode(_))));
        Ok(())
    }
}
