use bolero::check;
use igbin::{from_slice, to_vec, Value};

#[test]
fn fuzz_string_map_roundtrip() {
    check!()
        .with_type::<Vec<(String, String)>>()
        .for_each(|pairs| {
            let value: Value = pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
            let bytes = to_vec(&value).expect("string maps always encode");
            assert_eq!(from_slice(&bytes).expect("own output must decode"), value);
        });
}

#[test]
fn fuzz_integer_list_roundtrip() {
    check!().with_type::<Vec<i64>>().for_each(|ints| {
        let value = Value::list(ints.iter().copied());
        let bytes = to_vec(&value).expect("integer lists always encode");
        assert_eq!(from_slice(&bytes).expect("own output must decode"), value);
    });
}
