//!Digest representation.
//!
//!Value of the algorithm is exposed in xxhash canonical form, i.e. big-endian bytes.
//!Integer form is little-endian interpretation of these bytes, and hex form is integer form
//!printed as 16 lowercase digits.
//!
//!```
//!use xxh64_hasher::{Digest, Format, Rendered};
//!
//!let digest = Digest::new(xxh64_hasher::xxh64::xxh64(b"abc", 0));
//!assert_eq!(digest.hex(), "990977adf52cbc44");
//!assert_eq!(digest.bigint(), u64::from_le_bytes(digest.raw()));
//!assert_eq!(digest.render(Format::Raw), Rendered::Raw(digest.raw()));
//!```

use core::{fmt, str};

use crate::Error;

///Number of bytes in digest.
pub const DIGEST_LEN: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
///Result of hashing.
pub struct Digest(u64);

impl Digest {
    #[inline(always)]
    ///Wraps output of xxh64 algorithm.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline(always)]
    ///Returns output of xxh64 algorithm, as computed by reference `XXH64`.
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline(always)]
    ///Returns canonical (big-endian) bytes of digest.
    pub const fn raw(self) -> [u8; DIGEST_LEN] {
        self.0.to_be_bytes()
    }

    #[inline(always)]
    ///Returns little-endian interpretation of `raw` bytes.
    pub const fn bigint(self) -> u64 {
        u64::from_le_bytes(self.raw())
    }

    ///Returns `bigint` as zero-padded lowercase hex.
    pub fn hex(self) -> HexDigest {
        let mut out = [b'0'; DIGEST_LEN * 2];
        //Big-endian bytes of integer form give most significant digit first.
        hex::encode_to_slice(self.bigint().to_be_bytes(), &mut out).expect("16 digits for 8 bytes");
        HexDigest(out)
    }

    ///Renders digest in requested format.
    pub fn render(self, format: Format) -> Rendered {
        match format {
            Format::Raw => Rendered::Raw(self.raw()),
            Format::Hex => Rendered::Hex(self.hex()),
            Format::BigInt => Rendered::BigInt(self.bigint()),
        }
    }
}

impl From<Digest> for u64 {
    #[inline(always)]
    ///Same as `Digest::value`, matching `Hasher::finish` of hashers in this crate.
    fn from(digest: Digest) -> Self {
        digest.value()
    }
}

impl fmt::Display for Digest {
    #[inline]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.hex(), fmt)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
///Hex string of digest, stored inline.
pub struct HexDigest([u8; DIGEST_LEN * 2]);

impl HexDigest {
    #[inline]
    ///Access hex digits as string.
    pub fn as_str(&self) -> &str {
        //Only ever filled with ASCII hex digits
        str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl AsRef<str> for HexDigest {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for HexDigest {
    #[inline(always)]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for HexDigest {
    #[inline(always)]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for HexDigest {
    #[inline]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), fmt)
    }
}

impl fmt::Display for HexDigest {
    #[inline]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
///Output format of digest.
pub enum Format {
    ///Canonical bytes.
    #[default]
    Raw,
    ///Lowercase hex string.
    Hex,
    ///Unsigned integer.
    BigInt,
}

impl str::FromStr for Format {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "raw" => Ok(Self::Raw),
            "hex" => Ok(Self::Hex),
            "bigint" => Ok(Self::BigInt),
            _ => Err(Error::UnknownFormat),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
///Digest rendered in one of `Format`s.
pub enum Rendered {
    ///Canonical bytes.
    Raw([u8; DIGEST_LEN]),
    ///Lowercase hex string.
    Hex(HexDigest),
    ///Unsigned integer.
    BigInt(u64),
}

impl fmt::Display for Rendered {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(bytes) => fmt::Debug::fmt(bytes, fmt),
            Self::Hex(hex) => fmt::Display::fmt(hex, fmt),
            Self::BigInt(value) => fmt::Display::fmt(value, fmt),
        }
    }
}
