use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &str| {
            if let Ok(decoded) = base45::decode(data) {
                assert_eq!(base45::encode(&decoded), data);
            }
        });
    }
}
