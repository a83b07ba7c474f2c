//!Streaming xxhash64 implementation.
//!
//!## Features:
//!
//!- `std` - Enables `std::io::Write` implementations and `StreamHasher::update_reader`. Enabled by default.
//!- `const_xxh64` - Enables `const fn` version of one-shot `xxh64`.
//!
//!## Usage
//!
//!```
//!use xxh64_hasher::{stream, Format, Rendered, Seed};
//!
//!let mut hasher = stream::create_with_seed([1u8, 2, 3, 4, 5, 6, 7, 8]).expect("valid seed");
//!assert_eq!(hasher.seed(), Seed::new(0x0807060504030201));
//!
//!let digest = hasher.update("abc").digest();
//!assert_eq!(digest.hex(), "ae62c0ec1c209b07");
//!assert_eq!(hasher.digest_as(Format::BigInt), Rendered::BigInt(digest.bigint()));
//!```

#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

mod xxh64_common;
pub mod xxh64;
#[cfg(feature = "const_xxh64")]
pub mod const_xxh64;

mod error;
pub use error::Error;
mod seed;
pub use seed::{Seed, SEED_LEN};
mod digest;
pub use digest::{Digest, Format, HexDigest, Rendered, DIGEST_LEN};
pub mod stream;
pub use stream::{Engine, StreamHasher};
