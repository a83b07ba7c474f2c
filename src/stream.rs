//!Streaming hasher with bounded transfer window.
//!
//!```
//!use xxh64_hasher::{stream, Format};
//!
//!let mut hasher = stream::create();
//!hasher.update("a").update("b").update("c");
//!assert_eq!(hasher.digest().hex(), "990977adf52cbc44");
//!assert_eq!(hasher.hash_as("abc", Format::Hex).to_string(), "990977adf52cbc44");
//!```

use crate::xxh64::Xxh64;
use crate::xxh64_common::CHUNK_SIZE;
use crate::{Digest, Error, Format, Rendered, Seed};

///Default capacity of transfer window.
pub const DEFAULT_WINDOW: usize = 16 * 1024;

///Accumulation engine driven by `StreamHasher`.
///
///Any implementation must produce identical output regardless of how input is split between
///`consume` calls, and `finalize` must not change state.
pub trait Engine {
    ///Creates freshly seeded state.
    fn init(seed: Seed) -> Self;
    ///Folds `input` into state, buffering whatever does not form complete block.
    fn consume(&mut self, input: &[u8]);
    ///Computes hash of everything consumed since `init`.
    fn finalize(&self) -> u64;
    ///Returns number of bytes consumed since `init`.
    fn total_len(&self) -> u64;
}

impl Engine for Xxh64 {
    #[inline(always)]
    fn init(seed: Seed) -> Self {
        Xxh64::new(seed.get())
    }

    #[inline(always)]
    fn consume(&mut self, input: &[u8]) {
        self.update(input)
    }

    #[inline(always)]
    fn finalize(&self) -> u64 {
        self.digest()
    }

    #[inline(always)]
    fn total_len(&self) -> u64 {
        Xxh64::total_len(self)
    }
}

///Creates hasher with default seed.
pub fn create() -> StreamHasher {
    StreamHasher::new(Seed::DEFAULT)
}

///Creates hasher with seed derived from `material`.
///
///See `Seed::try_derive` for requirements on elements.
pub fn create_with_seed<I>(material: I) -> Result<StreamHasher, Error>
where
    I: IntoIterator,
    I::Item: TryInto<u8>,
{
    Seed::try_derive(material).map(StreamHasher::new)
}

#[derive(Clone)]
///Streaming hasher.
///
///Input of `update` is fed to the engine in slices no larger than transfer window.
///All methods that modify state return `&mut Self` to allow chaining.
pub struct StreamHasher<E = Xxh64> {
    seed: Seed,
    window: usize,
    engine: E,
}

impl<E: Engine> StreamHasher<E> {
    ///Creates hasher with provided `seed` and default window.
    pub fn new(seed: Seed) -> Self {
        log::trace!("create hasher: seed={:#018x} window={}", seed.get(), DEFAULT_WINDOW);

        Self {
            seed,
            window: DEFAULT_WINDOW,
            engine: E::init(seed),
        }
    }

    ///Creates hasher with provided `seed` and transfer `window` capacity.
    ///
    ///Returns error if `window` is smaller than single block (32 bytes).
    pub fn with_window(seed: Seed, window: usize) -> Result<Self, Error> {
        if window < CHUNK_SIZE {
            return Err(Error::WindowTooSmall(window));
        }

        log::trace!("create hasher: seed={:#018x} window={}", seed.get(), window);
        Ok(Self {
            seed,
            window,
            engine: E::init(seed),
        })
    }

    #[inline(always)]
    ///Returns seed of hasher.
    pub fn seed(&self) -> Seed {
        self.seed
    }

    #[inline(always)]
    ///Returns capacity of transfer window.
    pub fn window(&self) -> usize {
        self.window
    }

    #[inline(always)]
    ///Returns number of bytes consumed since last reset.
    pub fn total_len(&self) -> u64 {
        self.engine.total_len()
    }

    ///Returns hasher into freshly seeded state.
    pub fn reset(&mut self) -> &mut Self {
        log::trace!("reset hasher after {} bytes", self.engine.total_len());
        self.engine = E::init(self.seed);
        self
    }

    ///Adds `data` to hash.
    ///
    ///Text is hashed as its UTF-8 bytes.
    pub fn update<D: AsRef<[u8]> + ?Sized>(&mut self, data: &D) -> &mut Self {
        for chunk in data.as_ref().chunks(self.window) {
            self.engine.consume(chunk);
        }
        self
    }

    #[inline]
    ///Computes digest of all data since last reset without modifying state.
    pub fn digest(&self) -> Digest {
        Digest::new(self.engine.finalize())
    }

    #[inline]
    ///Computes digest and renders it in `format`.
    pub fn digest_as(&self, format: Format) -> Rendered {
        self.digest().render(format)
    }

    ///Computes digest of `data` alone, discarding any previous state.
    pub fn hash<D: AsRef<[u8]> + ?Sized>(&mut self, data: &D) -> Digest {
        self.reset().update(data).digest()
    }

    #[inline]
    ///Computes digest of `data` alone and renders it in `format`.
    pub fn hash_as<D: AsRef<[u8]> + ?Sized>(&mut self, data: &D, format: Format) -> Rendered {
        self.hash(data).render(format)
    }

    #[cfg(feature = "std")]
    ///Adds everything `reader` produces to hash, reading one window at a time.
    ///
    ///Returns number of bytes read. On error, bytes read before the failure remain in hash.
    pub fn update_reader<R: std::io::Read>(&mut self, mut reader: R) -> std::io::Result<u64> {
        let mut buffer = std::vec![0u8; self.window];
        let mut total = 0u64;

        loop {
            let size = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(size) => size,
                Err(error) if error.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(error) => return Err(error),
            };

            self.engine.consume(&buffer[..size]);
            total += size as u64;
            log::trace!("consumed {} bytes from reader, {} total", size, total);
        }

        Ok(total)
    }
}

impl<E: Engine> Default for StreamHasher<E> {
    #[inline(always)]
    fn default() -> Self {
        Self::new(Seed::DEFAULT)
    }
}

impl<E: Engine> core::hash::Hasher for StreamHasher<E> {
    #[inline(always)]
    fn finish(&self) -> u64 {
        self.engine.finalize()
    }

    #[inline(always)]
    fn write(&mut self, input: &[u8]) {
        self.update(input);
    }
}

#[cfg(feature = "std")]
impl<E: Engine> std::io::Write for StreamHasher<E> {
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
