use core::mem;

///Block size consumed by the four lanes at once.
pub const CHUNK_SIZE: usize = mem::size_of::<u64>() * 4;
pub const PRIME_1: u64 = 0x9E3779B185EBCA87;
pub const PRIME_2: u64 = 0xC2B2AE3D27D4EB4F;
pub const PRIME_3: u64 = 0x165667B19E3779F9;
pub const PRIME_4: u64 = 0x85EBCA77C2B2AE63;
pub const PRIME_5: u64 = 0x27D4EB2F165667C5;

pub type Lanes = [u64; 4];

#[inline(always)]
pub const fn read_64le(data: &[u8], at: usize) -> u64 {
    u64::from_le_bytes([
        data[at], data[at + 1], data[at + 2], data[at + 3],
        data[at + 4], data[at + 5], data[at + 6], data[at + 7],
    ])
}

#[inline(always)]
pub const fn read_32le(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

#[inline]
pub const fn round(acc: u64, input: u64) -> u64 {
    acc.wrapping_add(input.wrapping_mul(PRIME_2))
       .rotate_left(31)
       .wrapping_mul(PRIME_1)
}

#[inline]
pub const fn merge_round(mut acc: u64, val: u64) -> u64 {
    acc ^= round(0, val);
    acc.wrapping_mul(PRIME_1).wrapping_add(PRIME_4)
}

#[inline]
pub const fn avalanche(mut input: u64) -> u64 {
    input ^= input >> 33;
    input = input.wrapping_mul(PRIME_2);
    input ^= input >> 29;
    input = input.wrapping_mul(PRIME_3);
    input ^= input >> 32;
    input
}

#[inline(always)]
pub const fn init_lanes(seed: u64) -> Lanes {
    [
        seed.wrapping_add(PRIME_1).wrapping_add(PRIME_2),
        seed.wrapping_add(PRIME_2),
        seed,
        seed.wrapping_sub(PRIME_1),
    ]
}

///Folds single 32 byte block, starting at `at`, into lanes.
#[inline(always)]
pub const fn consume_block(lanes: &mut Lanes, block: &[u8], at: usize) {
    lanes[0] = round(lanes[0], read_64le(block, at));
    lanes[1] = round(lanes[1], read_64le(block, at + 8));
    lanes[2] = round(lanes[2], read_64le(block, at + 16));
    lanes[3] = round(lanes[3], read_64le(block, at + 24));
}

#[inline]
pub const fn merge_lanes(lanes: &Lanes) -> u64 {
    let mut result = lanes[0].rotate_left(1).wrapping_add(lanes[1].rotate_left(7))
                                            .wrapping_add(lanes[2].rotate_left(12))
                                            .wrapping_add(lanes[3].rotate_left(18));

    result = merge_round(result, lanes[0]);
    result = merge_round(result, lanes[1]);
    result = merge_round(result, lanes[2]);
    merge_round(result, lanes[3])
}

///Mixes remaining `tail` (< 32 bytes) into `input` and avalanches it.
pub const fn finalize(mut input: u64, tail: &[u8]) -> u64 {
    let mut idx = 0;

    while tail.len() - idx >= 8 {
        input ^= round(0, read_64le(tail, idx));
        input = input.rotate_left(27).wrapping_mul(PRIME_1).wrapping_add(PRIME_4);
        idx += 8;
    }

    if tail.len() - idx >= 4 {
        input ^= (read_32le(tail, idx) as u64).wrapping_mul(PRIME_1);
        input = input.rotate_left(23).wrapping_mul(PRIME_2).wrapping_add(PRIME_3);
        idx += 4;
    }

    while idx < tail.len() {
        input ^= (tail[idx] as u64).wrapping_mul(PRIME_5);
        input = input.rotate_left(11).wrapping_mul(PRIME_1);
        idx += 1;
    }

    avalanche(input)
}
