use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let data = &data[..data.len() & !1];
            let encoded = base41::encode(data).unwrap();
            assert_eq!(encoded.len(), data.len() / 2 * 3);
            for mode in [base41::Mode::Lenient, base41::Mode::Strict] {
                let decoded = base41::base41::decode_with(&encoded, mode).unwrap();
                assert_eq!(data, decoded);
            }
        });
    }
}
