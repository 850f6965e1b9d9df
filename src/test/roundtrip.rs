use crate::de::from_reader;
use crate::ser::to_writer;
use crate::{nbt, Compound, Flavor, Value};

fn roundtrip(tag: &Compound, flavor: Flavor) -> Compound {
    let mut bytes = vec![];
    to_writer(&mut bytes, tag, flavor).unwrap();
    from_reader(bytes.as_slice(), flavor).unwrap()
}

fn assert_roundtrips(value: Value) {
    let tag = match value {
        Value::Compound(c) => c,
        _ => panic!("test expected a compound"),
    };

    assert_eq!(roundtrip(&tag, Flavor::Standard), tag);
    assert_eq!(roundtrip(&tag, Flavor::Network), tag);
}

#[test]
fn empty_compound() {
    assert_roundtrips(nbt!({}));
}

#[test]
fn every_scalar_kind() {
    assert_roundtrips(nbt!({
        "byte": i8::MIN,
        "short": i16::MIN,
        "int": i32::MIN,
        "long": i64::MIN,
        "byte_max": i8::MAX,
        "short_max": i16::MAX,
        "int_max": i32::MAX,
        "long_max": i64::MAX,
        "zero": 0,
        "minus_one": -1i64,
        "float": f32::MIN_POSITIVE,
        "double": std::f64::consts::PI,
        "string": "with some unicode: 😈🎂",
        "empty_string": "",
    }));
}

#[test]
fn arrays_and_empties() {
    assert_roundtrips(nbt!({
        "bytes": [B; -1, 0, 1, i8::MIN, i8::MAX],
        "no_bytes": [B;],
        "ints": [I; -1, 0, 1, i32::MIN, i32::MAX],
        "no_ints": [I;],
        "empty_list": [],
    }));
}

#[test]
fn lists_of_every_scalar() {
    assert_roundtrips(nbt!({
        "bytes": [1i8, 2i8],
        "shorts": [1i16, 2i16],
        "ints": [1, 2],
        "longs": [1i64, 2i64],
        "floats": [1.0f32, 2.0f32],
        "doubles": [1.0, 2.0],
        "strings": ["a", "b"],
    }));
}

#[test]
fn nested_three_deep() {
    assert_roundtrips(nbt!({
        "skin": { "id": 1, "data": [B; 1, 2, 3] },
        "ench": [
            { "id": 12i16, "lvl": 3i16 },
            { "id": 9i16, "lvl": 1i16 },
        ],
        "display": {
            "Name": "Lucky Sword",
            "Lore": {
                "lines": ["line one", "line two"],
                "meta": { "hidden": true },
            },
        },
    }));
}

#[test]
fn list_of_lists() {
    assert_roundtrips(nbt!({
        "matrix": [[1, 2], [3, 4], []],
    }));
}

#[test]
fn list_of_empty_compounds() {
    assert_roundtrips(nbt!({
        "things": [{}, {}, {}],
    }));
}

#[test]
fn persisted_then_transmitted() {
    // The same tree crosses both boundaries, disk form first.
    let Value::Compound(tag) = nbt!({
        "Base": 11,
        "Patterns": [
            { "Color": 5, "Pattern": "stripe" },
            { "Color": 1, "Pattern": "border" },
        ],
    }) else {
        panic!("test expected a compound")
    };

    let disk = crate::ser::to_bytes(&tag).unwrap();
    let loaded = crate::de::from_bytes(&disk).unwrap();
    assert_eq!(loaded, tag);

    let wire = crate::ser::to_network_bytes(&loaded).unwrap();
    assert_eq!(crate::de::from_network_bytes(&wire).unwrap(), tag);

    // The forms themselves are different bytes.
    assert_ne!(disk, wire);
}
