//!Const 64 bit version of xxhash algorithm
//!
//!Produces the same value as `xxh64::xxh64`, but can be evaluated at compile time.
//!
//!```
//!use xxh64_hasher::const_xxh64::xxh64;
//!
//!const ABC: u64 = xxh64(b"abc", 0);
//!assert_eq!(ABC, 0x44bc2cf5ad770999);
//!```

use crate::xxh64_common::*;

///Returns hash for the provided input.
pub const fn xxh64(input: &[u8], seed: u64) -> u64 {
    let input_len = input.len() as u64;

    if input.len() >= CHUNK_SIZE {
        let mut lanes = init_lanes(seed);

        let mut offset = 0;
        while input.len() - offset >= CHUNK_SIZE {
            consume_block(&mut lanes, input, offset);
            offset += CHUNK_SIZE;
        }

        let (_, remainder) = input.split_at(offset);
        finalize(merge_lanes(&lanes).wrapping_add(input_len), remainder)
    } else {
        finalize(seed.wrapping_add(PRIME_5).wrapping_add(input_len), input)
    }
}
