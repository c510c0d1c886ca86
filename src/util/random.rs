use rand::{distributions::Alphanumeric, prelude::ThreadRng, Rng};

pub trait Random {
    fn gen(rng: &mut ThreadRng) -> Self;
}

const RANDOM_STRING_MIN: usize = 0;
const RANDOM_STRING_MAX: usize = 10;
const RANDOM_NUMBER_MAX: u32 = 1_000;

impl Random for String {
    // get random string whose length is in [RANDOM_STRING_MIN, RANDOM_STRING_MAX)
    fn gen(rng: &mut ThreadRng) -> Self {
        let length: usize = rng.gen_range(RANDOM_STRING_MIN..RANDOM_STRING_MAX);

        rng.sample_iter(&Alphanumeric)
            .map(char::from)
            .take(length)
            .collect()
    }
}

// a short lowercase word followed by a number, e.g. "kq417"
pub struct Item(pub String);

impl Random for Item {
    fn gen(rng: &mut ThreadRng) -> Self {
        let length: usize = rng.gen_range(1..3);
        let word: String = (0..length)
            .map(|_| char::from(rng.gen_range(b'a'..=b'c')))
            .collect();

        Item(format!("{}{}", word, rng.gen_range(0..RANDOM_NUMBER_MAX)))
    }
}
