const DATA: [&str; 35] = [
    "waifulandshigtgsqwetyuop[]asbnm,./",
    "waifulandshigtgsqwetyuop[]asbnm,.",
    "waifulandshigtgsqwetyuop[]asbnm,",
    "waifulandshigtgsqwetyuop[]asbnm",
    "waifulandshigtgsqwetyuop[]asbn",
    "waifulandshigtgsqwetyuop[]asb",
    "waifulandshigtgsqwetyuop[]as",
    "waifulandshigtgsqwetyuop[]a",
    "waifulandshigtgsqwetyuop[]",
    "waifulandshigtgsqwetyuop[",
    "waifulandshigtgsqwetyuop",
    "waifulandshigtgsqwetyuo",
    "waifulandshigtgsqwetyu",
    "waifulandshigtgsqwety",
    "waifulandshigtgsqwet",
    "waifulandshigtgsqwe",
    "waifulandshigtgsqw",
    "waifulandshigtgsq",
    "waifulandshigtgs",
    "waifulandshigtg",
    "waifulandshigt",
    "waifulandshig",
    "waifulandshi",
    "waifulandsh",
    "waifulands",
    "waifuland",
    "waifulan",
    "waifula",
    "waiful",
    "lolka",
    "lolk",
    "lol",
    "lo",
    "l",
    "",
];

const SEED_1: u64 = 0;
const SEED_2: u64 = 1;

#[test]
fn assert_xxh64() {
    use xxhash_c_sys as sys;
    use xxh64_hasher::xxh64::xxh64;

    let mut hasher_1 = xxh64_hasher::xxh64::Xxh64::new(SEED_1);
    let mut hasher_2 = xxh64_hasher::xxh64::Xxh64::new(SEED_2);

    for input in DATA.iter().rev() {
        println!("input(len={})='{}'", input.len(), input);
        let sys_result = unsafe {
            sys::XXH64(input.as_ptr() as _, input.len(), SEED_1)
        };
        let result = xxh64(input.as_bytes(), SEED_1);
        assert_eq!(result, sys_result);
        hasher_1.update(input.as_bytes());
        assert_eq!(hasher_1.digest(), result);

        let sys_result = unsafe {
            sys::XXH64(input.as_ptr() as _, input.len(), SEED_2)
        };
        let result = xxh64(input.as_bytes(), SEED_2);
        assert_eq!(result, sys_result);
        hasher_2.update(input.as_bytes());
        assert_eq!(hasher_2.digest(), result);

        hasher_1.reset(SEED_1);
        hasher_2.reset(SEED_2);
    }
}

#[cfg(feature = "const_xxh64")]
#[test]
fn assert_const_xxh64() {
    use xxhash_c_sys as sys;
    use xxh64_hasher::const_xxh64::xxh64;

    for input in DATA.iter().rev() {
        println!("input(len={})='{}'", input.len(), input);
        let sys_result = unsafe {
            sys::XXH64(input.as_ptr() as _, input.len(), SEED_1)
        };
        let result = xxh64(input.as_bytes(), SEED_1);
        assert_eq!(result, sys_result);

        let sys_result = unsafe {
            sys::XXH64(input.as_ptr() as _, input.len(), SEED_2)
        };
        let result = xxh64(input.as_bytes(), SEED_2);
        assert_eq!(result, sys_result);
    }
}

#[test]
fn assert_stream_hasher() {
    use xxhash_c_sys as sys;
    use xxh64_hasher::{Seed, StreamHasher};

    let mut hasher_1 = StreamHasher::<xxh64_hasher::xxh64::Xxh64>::with_window(Seed::new(SEED_1), 32).unwrap();
    let mut hasher_2 = StreamHasher::<xxh64_hasher::xxh64::Xxh64>::new(Seed::new(SEED_2));

    for input in DATA.iter() {
        println!("input(len={})='{}'", input.len(), input);
        let sys_result = unsafe {
            sys::XXH64(input.as_ptr() as _, input.len(), SEED_1)
        };
        let digest = hasher_1.hash(*input);
        assert_eq!(digest.value(), sys_result);
        assert_eq!(digest.raw(), sys_result.to_be_bytes());

        let sys_result = unsafe {
            sys::XXH64(input.as_ptr() as _, input.len(), SEED_2)
        };
        assert_eq!(hasher_2.hash(*input).value(), sys_result);
    }
}

#[test]
fn assert_random_input() {
    use getrandom::getrandom;
    use xxhash_c_sys as sys;
    use xxh64_hasher::xxh64::xxh64;

    for len in [31usize, 32, 33, 63, 64, 65, 128, 129, 240, 260, 4095, 16 * 1024 + 3] {
        let mut input = vec![0u8; len];
        let _ = getrandom(&mut input);

        let mut seed = [0u8; 8];
        let _ = getrandom(&mut seed);
        let seed = u64::from_le_bytes(seed);

        let sys_result = unsafe {
            sys::XXH64(input.as_ptr() as _, input.len(), seed)
        };
        assert_eq!(xxh64(&input, seed), sys_result);

        let mut hasher = xxh64_hasher::stream::create_with_seed(seed.to_le_bytes()).unwrap();
        assert_eq!(hasher.update(&input).digest().value(), sys_result);
    }
}
