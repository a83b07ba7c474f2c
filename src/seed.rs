//!Seed derivation.
//!
//!Arbitrary material is folded into 8 bytes by XORing element `i` into byte `i % 8`,
//!and the resulting bytes are read as little-endian `u64`.

use core::convert::Infallible;

use crate::Error;

///Number of bytes in seed.
pub const SEED_LEN: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
///Seed of xxh64 hasher.
pub struct Seed(u64);

impl Seed {
    ///Zero seed, used when no material is provided.
    pub const DEFAULT: Self = Self(0);

    #[inline(always)]
    ///Creates seed from raw value.
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    #[inline(always)]
    ///Returns raw value of seed.
    pub const fn get(self) -> u64 {
        self.0
    }

    #[inline(always)]
    ///Returns little-endian byte representation of seed.
    pub const fn to_bytes(self) -> [u8; SEED_LEN] {
        self.0.to_le_bytes()
    }

    ///Folds arbitrary number of bytes into seed.
    pub fn derive<I: IntoIterator<Item = u8>>(material: I) -> Self {
        match Self::fold(material.into_iter().map(Ok::<u8, Infallible>)) {
            Ok(seed) => seed,
            Err(never) => match never {},
        }
    }

    ///Folds elements of any integer type into seed.
    ///
    ///Fails on the first element outside of `0..=255`.
    pub fn try_derive<I>(material: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: TryInto<u8>,
    {
        Self::fold(material.into_iter().enumerate().map(|(index, element)| {
            element.try_into().map_err(|_| Error::SeedElementOutOfRange { index })
        }))
    }

    ///Folds decimal digits of `text` into seed, each digit contributing its numeric value.
    ///
    ///```
    ///use xxh64_hasher::Seed;
    ///
    ///assert_eq!(Seed::from_digits("12345678").unwrap(), Seed::derive([1, 2, 3, 4, 5, 6, 7, 8]));
    ///```
    pub fn from_digits(text: &str) -> Result<Self, Error> {
        Self::fold(text.chars().enumerate().map(|(index, found)| match found.to_digit(10) {
            Some(digit) => Ok(digit as u8),
            None => Err(Error::SeedNotDigit { index, found }),
        }))
    }

    //XORs byte `i` into position `i % SEED_LEN`, stopping at first error.
    fn fold<E, I: Iterator<Item = Result<u8, E>>>(bytes: I) -> Result<Self, E> {
        let mut seed = [0u8; SEED_LEN];
        for (idx, byte) in bytes.enumerate() {
            seed[idx % SEED_LEN] ^= byte?;
        }

        let seed = u64::from_le_bytes(seed);
        log::debug!("derived seed {:#018x}", seed);
        Ok(Self(seed))
    }
}

impl From<u64> for Seed {
    #[inline(always)]
    fn from(seed: u64) -> Self {
        Self(seed)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn should_fold_material_by_position() {
        let seed = Seed::derive([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(seed.to_bytes(), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(seed.get(), 578437695752307201);

        let seed = Seed::derive([1, 2, 3, 4, 5, 6, 7, 8, 1, 2]);
        assert_eq!(seed.to_bytes(), [0, 0, 3, 4, 5, 6, 7, 8]);

        assert_eq!(Seed::derive([]), Seed::DEFAULT);
        assert_eq!(Seed::derive(b"ab".iter().copied()).to_bytes(), [b'a', b'b', 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn should_reject_wide_elements() {
        assert_eq!(Seed::try_derive([1u32, 2, 255]), Ok(Seed::derive([1, 2, 255])));
        assert_eq!(Seed::try_derive([1u32, 256]), Err(Error::SeedElementOutOfRange { index: 1 }));
        assert_eq!(Seed::try_derive([-1i32]), Err(Error::SeedElementOutOfRange { index: 0 }));
    }

    #[test]
    fn should_parse_digit_strings() {
        assert_eq!(Seed::from_digits("12345678"), Ok(Seed::derive([1, 2, 3, 4, 5, 6, 7, 8])));
        assert_eq!(Seed::from_digits(""), Ok(Seed::DEFAULT));
        assert_eq!(Seed::from_digits("12a4"), Err(Error::SeedNotDigit { index: 2, found: 'a' }));
    }

    #[test]
    fn should_fold_identically_on_every_path() {
        let digits = "1234567890987";
        let bytes = digits.bytes().map(|digit| digit - b'0').collect::<std::vec::Vec<_>>();

        let expected = Seed::derive(bytes.iter().copied());
        assert_eq!(expected.to_bytes(), [1 ^ 9, 2, 3 ^ 9, 4 ^ 8, 5 ^ 7, 6, 7, 8]);
        assert_eq!(Seed::try_derive(bytes.iter().map(|byte| *byte as u32)), Ok(expected));
        assert_eq!(Seed::from_digits(digits), Ok(expected));
    }

    struct Capture(std::sync::Mutex<std::vec::Vec<std::string::String>>);

    impl log::Log for Capture {
        fn enabled(&self, _: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push(std::format!("{}", record.args()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(std::sync::Mutex::new(std::vec::Vec::new()));

    #[test]
    fn should_log_seed_derived_from_wide_elements() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Debug);

        let seed = Seed::try_derive([0x11u32, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]).unwrap();
        assert_eq!(seed.get(), 0x8877665544332211);

        let lines = CAPTURE.0.lock().unwrap();
        assert!(lines.iter().any(|line| line == "derived seed 0x8877665544332211"));
    }
}
