//!64 bit version of xxhash algorithm
//!
//!Written using C implementation as reference.

use crate::xxh64_common::*;

///Returns hash for the provided input.
pub fn xxh64(input: &[u8], seed: u64) -> u64 {
    let input_len = input.len() as u64;

    if input.len() >= CHUNK_SIZE {
        let mut lanes = init_lanes(seed);

        let mut blocks = input.chunks_exact(CHUNK_SIZE);
        for block in &mut blocks {
            consume_block(&mut lanes, block, 0);
        }

        finalize(merge_lanes(&lanes).wrapping_add(input_len), blocks.remainder())
    } else {
        finalize(seed.wrapping_add(PRIME_5).wrapping_add(input_len), input)
    }
}

///XXH64 Streaming algorithm
///
///Holds four lanes, total length and up to 31 bytes of pending tail.
///
///`digest` never modifies state, so it is possible to keep updating after it.
#[derive(Clone)]
pub struct Xxh64 {
    total_len: u64,
    //lanes[2] keeps seed until first block is consumed, which is used by short input path.
    lanes: Lanes,
    mem: [u8; CHUNK_SIZE],
    mem_size: usize,
}

impl Xxh64 {
    #[inline]
    ///Creates new state with provided seed.
    pub const fn new(seed: u64) -> Self {
        Self {
            total_len: 0,
            lanes: init_lanes(seed),
            mem: [0; CHUNK_SIZE],
            mem_size: 0,
        }
    }

    #[inline]
    ///Returns number of bytes consumed since creation or last reset.
    pub const fn total_len(&self) -> u64 {
        self.total_len
    }

    #[inline]
    ///Returns bytes that are not yet folded into lanes.
    pub fn pending(&self) -> &[u8] {
        &self.mem[..self.mem_size]
    }

    ///Adds chunk of data to hash.
    pub fn update(&mut self, mut input: &[u8]) {
        self.total_len = self.total_len.wrapping_add(input.len() as u64);

        if self.mem_size + input.len() < CHUNK_SIZE {
            self.mem[self.mem_size..self.mem_size + input.len()].copy_from_slice(input);
            self.mem_size += input.len();
            return
        }

        if self.mem_size > 0 {
            //previous if can fail only when we do not have enough space in buffer for input.
            //hence fill_len <= input.len()
            let (fill, rest) = input.split_at(CHUNK_SIZE - self.mem_size);
            self.mem[self.mem_size..].copy_from_slice(fill);
            consume_block(&mut self.lanes, &self.mem, 0);

            input = rest;
            self.mem_size = 0;
        }

        let mut blocks = input.chunks_exact(CHUNK_SIZE);
        for block in &mut blocks {
            consume_block(&mut self.lanes, block, 0);
        }

        let tail = blocks.remainder();
        self.mem[..tail.len()].copy_from_slice(tail);
        self.mem_size = tail.len();
    }

    ///Finalize hashing.
    pub fn digest(&self) -> u64 {
        let result = if self.total_len >= CHUNK_SIZE as u64 {
            merge_lanes(&self.lanes)
        } else {
            self.lanes[2].wrapping_add(PRIME_5)
        };

        finalize(result.wrapping_add(self.total_len), self.pending())
    }

    #[inline]
    ///Resets state with provided seed.
    pub fn reset(&mut self, seed: u64) {
        self.total_len = 0;
        self.lanes = init_lanes(seed);
        self.mem_size = 0;
    }
}

impl core::hash::Hasher for Xxh64 {
    #[inline(always)]
    fn finish(&self) -> u64 {
        self.digest()
    }

    #[inline(always)]
    fn write(&mut self, input: &[u8]) {
        self.update(input)
    }
}

#[cfg(feature = "std")]
impl std::io::Write for Xxh64 {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Default for Xxh64 {
    #[inline(always)]
    fn default() -> Self {
        Xxh64Builder::new(0).build()
    }
}

#[derive(Clone, Copy, Default)]
///Hash builder for `Xxh64`
pub struct Xxh64Builder {
    seed: u64
}

impl Xxh64Builder {
    #[inline(always)]
    ///Creates builder with provided `seed`
    pub const fn new(seed: u64) -> Self {
        Self {
            seed
        }
    }

    #[inline(always)]
    ///Creates hasher.
    pub const fn build(self) -> Xxh64 {
        Xxh64::new(self.seed)
    }
}

impl core::hash::BuildHasher for Xxh64Builder {
    type Hasher = Xxh64;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        self.build()
    }
}
