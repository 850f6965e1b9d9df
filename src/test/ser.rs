use super::builder::Builder;
use crate::ser::{to_bytes, to_network_bytes};
use crate::{nbt, Compound, List, Tag, Value};

fn root(value: Value) -> Compound {
    match value {
        Value::Compound(c) => c,
        _ => panic!("test expected a compound"),
    }
}

#[test]
fn scalars_byte_for_byte() {
    let tag = root(nbt!({
        "b": 123i8,
        "s": 1234i16,
        "i": 50345,
        "l": 1i64 << 40,
        "f": 1.23f32,
        "d": 1.23456,
        "str": "something",
    }));

    let expected = Builder::new()
        .start_compound("")
        .byte("b", 123)
        .short("s", 1234)
        .int("i", 50345)
        .long("l", 1 << 40)
        .float("f", 1.23)
        .double("d", 1.23456)
        .string("str", "something")
        .end_compound()
        .build();

    assert_eq!(to_bytes(&tag).unwrap(), expected);
}

#[test]
fn network_scalars_byte_for_byte() {
    let tag = root(nbt!({
        "i": -300,
        "l": -4_000_000_000i64,
        "s": 1234i16,
        "d": 1.23456,
        "str": "something",
    }));

    let expected = Builder::network()
        .start_compound("")
        .int("i", -300)
        .long("l", -4_000_000_000)
        .short("s", 1234)
        .double("d", 1.23456)
        .string("str", "something")
        .end_compound()
        .build();

    assert_eq!(to_network_bytes(&tag).unwrap(), expected);
}

#[test]
fn network_int_is_zigzag_varint() {
    let tag = root(nbt!({ "i": 1 }));

    // 1 zig-zags to 2, which is a single varint byte.
    let expected = Builder::network()
        .start_compound("")
        .tag(Tag::Int)
        .name("i")
        .raw_bytes(&[0x02])
        .end_compound()
        .build();

    assert_eq!(to_network_bytes(&tag).unwrap(), expected);
}

#[test]
fn arrays_byte_for_byte() {
    let tag = root(nbt!({
        "bytes": [B; 1, 2, 3],
        "ints": [I; 1, -2, 3],
    }));

    let expected = Builder::new()
        .start_compound("")
        .byte_array("bytes", &[1, 2, 3])
        .int_array("ints", &[1, -2, 3])
        .end_compound()
        .build();

    assert_eq!(to_bytes(&tag).unwrap(), expected);
}

#[test]
fn empty_list_encodes_as_end_list() {
    let tag = root(nbt!({ "list": [] }));

    let expected = Builder::new()
        .start_compound("")
        .start_list("list", Tag::End, 0)
        .end_compound()
        .build();

    assert_eq!(to_bytes(&tag).unwrap(), expected);
}

#[test]
fn emptied_list_keeps_element_kind() {
    let mut list = List::new();
    list.push(1i32);
    list.remove(0);

    let mut tag = Compound::new();
    tag.insert("list", list);

    let expected = Builder::new()
        .start_compound("")
        .start_list("list", Tag::Int, 0)
        .end_compound()
        .build();

    assert_eq!(to_bytes(&tag).unwrap(), expected);
}

#[test]
fn sparse_list_encodes_contiguously() {
    let mut list = List::new();
    list.push(10i32);
    list.push(20i32);
    list.push(30i32);
    list.remove(1);

    let mut tag = Compound::new();
    tag.insert("list", list);

    let expected = Builder::new()
        .start_compound("")
        .start_list("list", Tag::Int, 2)
        .int_payload(10)
        .int_payload(30)
        .end_compound()
        .build();

    assert_eq!(to_bytes(&tag).unwrap(), expected);
}

#[test]
fn list_of_compounds_byte_for_byte() {
    let tag = root(nbt!({
        "things": [{ "a": 1 }, { "a": 2 }],
    }));

    let expected = Builder::new()
        .start_compound("")
        .start_list("things", Tag::Compound, 2)
        .start_anon_compound()
        .int("a", 1)
        .end_anon_compound()
        .start_anon_compound()
        .int("a", 2)
        .end_anon_compound()
        .end_compound()
        .build();

    assert_eq!(to_bytes(&tag).unwrap(), expected);
}

#[test]
fn compound_preserves_insertion_order() {
    let mut tag = Compound::new();
    tag.insert("z", 1i32);
    tag.insert("a", 2i32);

    let expected = Builder::new()
        .start_compound("")
        .int("z", 1)
        .int("a", 2)
        .end_compound()
        .build();

    assert_eq!(to_bytes(&tag).unwrap(), expected);
}

#[test]
fn cesu8_string_out_standard() {
    let mut tag = Compound::new();
    tag.insert("emoji", "😈");

    let emoji = cesu8::to_java_cesu8("😈");
    let expected = Builder::new()
        .start_compound("")
        .tag(Tag::String)
        .name("emoji")
        .raw_str_len(emoji.len())
        .raw_bytes(&emoji)
        .end_compound()
        .build();

    assert_eq!(to_bytes(&tag).unwrap(), expected);
}

#[test]
#[should_panic(expected = "list declared")]
fn mixed_list_is_a_programming_fault() {
    let mut list = List::new();
    list.push(1i32);
    list.insert(1, "not an int");

    let mut tag = Compound::new();
    tag.insert("list", list);

    let _ = to_bytes(&tag);
}
