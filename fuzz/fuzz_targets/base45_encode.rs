use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let encoded = base45::encode(data);
            assert_eq!(encoded.len(), base45::codec::encoded_len(data.len()));
            let decoded = base45::decode(&encoded).unwrap();
            assert_eq!(data, decoded);
        });
    }
}
