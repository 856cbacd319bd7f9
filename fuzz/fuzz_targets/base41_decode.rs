use honggfuzz::fuzz;

use base41::base41::{decode_with, encode, Mode};

fn main() {
    loop {
        fuzz!(|data: &str| {
            decode_with(data, Mode::Lenient).ok();
            if let Ok(decoded) = decode_with(data, Mode::Strict) {
                assert_eq!(encode(&decoded).unwrap(), data);
            }
        });
    }
}
