use crate::banner::{Banner, BannerPattern, TAG_BASE, TAG_PATTERNS};
use crate::{nbt, Tag, Value};

fn banner_with_ids(ids: &[i32]) -> Banner {
    // Drive the public interface to the wanted id set: add up to the
    // highest id, then delete the rest.
    let mut banner = Banner::new();
    let top = ids.iter().copied().max().unwrap_or(-1);
    for id in 0..=top {
        assert_eq!(banner.add_pattern(&format!("p{}", id), 1), id);
    }
    for id in 0..=top {
        if !ids.contains(&id) {
            assert!(banner.delete_pattern(id));
        }
    }
    assert_eq!(banner.pattern_ids(), ids);
    banner
}

#[test]
fn first_pattern_gets_id_zero() {
    let mut banner = Banner::new();
    assert_eq!(banner.pattern_count(), 0);

    let id = banner.add_pattern("stripe", 5);

    assert_eq!(id, 0);
    assert_eq!(banner.pattern_ids(), vec![0]);
    assert_eq!(
        banner.pattern(0),
        Some(BannerPattern {
            color: 5,
            name: "stripe".to_owned()
        })
    );
}

#[test]
fn deleted_ids_are_never_reused() {
    let mut banner = banner_with_ids(&[0, 1, 2]);

    assert!(banner.delete_pattern(1));
    assert_eq!(banner.pattern_ids(), vec![0, 2]);

    assert_eq!(banner.add_pattern("x", 1), 3);
    assert_eq!(banner.pattern_ids(), vec![0, 2, 3]);
}

#[test]
fn ids_stay_monotonic_while_lower_ids_are_deleted() {
    let mut banner = Banner::new();
    let mut highest = -1;

    for step in 0..40 {
        let id = banner.add_pattern("p", step % 16);
        assert!(id > highest, "id {} reissued at step {}", id, step);
        highest = id;

        // Deleting below the top never frees an id for reuse.
        if step % 2 == 0 && banner.pattern_count() > 1 {
            banner.delete_bottom_pattern();
        }
    }

    assert_eq!(highest, 39);
}

#[test]
fn emptying_the_banner_restarts_ids_at_zero() {
    // Ids key off max(live ids) + 1, so only a live id pins the sequence;
    // once the banner is empty the next pattern is id 0 again.
    let mut banner = Banner::new();
    assert_eq!(banner.add_pattern("a", 1), 0);
    assert_eq!(banner.add_pattern("b", 2), 1);

    assert!(banner.delete_top_pattern());
    assert!(banner.delete_top_pattern());
    assert_eq!(banner.pattern_count(), 0);

    assert_eq!(banner.add_pattern("c", 3), 0);
}

#[test]
fn top_and_bottom_deletion() {
    let mut banner = banner_with_ids(&[0, 3, 7]);

    assert!(banner.delete_top_pattern());
    assert_eq!(banner.pattern_ids(), vec![0, 3]);

    let mut banner = banner_with_ids(&[0, 3, 7]);
    assert!(banner.delete_bottom_pattern());
    assert_eq!(banner.pattern_ids(), vec![3, 7]);
}

#[test]
fn deleting_on_an_empty_banner() {
    let mut banner = Banner::new();
    assert!(!banner.delete_top_pattern());
    assert!(!banner.delete_bottom_pattern());
    assert!(!banner.delete_pattern(0));
}

#[test]
fn base_color_is_masked_to_four_bits() {
    let mut banner = Banner::new();
    assert_eq!(banner.base_color(), 0);

    for c in -300i32..=300 {
        banner.set_base_color(c);
        assert_eq!(banner.base_color(), c & 0x0f);
    }
}

#[test]
fn pattern_color_is_masked_on_write() {
    let mut banner = Banner::new();
    let id = banner.add_pattern("gradient", 0x1f);
    assert_eq!(banner.pattern(id).unwrap().color, 0x0f);

    banner.change_pattern(id, "gradient", -1);
    assert_eq!(banner.pattern(id).unwrap().color, 0x0f);
}

#[test]
fn change_pattern_requires_an_existing_id() {
    let mut banner = Banner::new();
    assert!(!banner.change_pattern(0, "stripe", 1));

    let id = banner.add_pattern("stripe", 1);
    assert!(banner.change_pattern(id, "border", 2));
    assert_eq!(
        banner.pattern(id),
        Some(BannerPattern {
            color: 2,
            name: "border".to_owned()
        })
    );

    // Changing does not mint a new id.
    assert_eq!(banner.pattern_ids(), vec![id]);
}

#[test]
fn pattern_on_a_missing_id() {
    let mut banner = banner_with_ids(&[0, 2]);
    assert!(banner.pattern_exists(0));
    assert!(!banner.pattern_exists(1));
    assert_eq!(banner.pattern(1), None);
}

#[test]
fn repair_is_idempotent() {
    let mut banner = Banner::new();

    banner.correct_nbt();
    let once = banner.named_tag();

    banner.correct_nbt();
    let twice = banner.named_tag();

    assert_eq!(once, twice);
    assert_eq!(once.get_int(TAG_BASE), Some(0));
    assert!(once.has_tag(TAG_PATTERNS, Tag::List));
}

#[test]
fn repair_happens_lazily_on_first_touch() {
    let Value::Compound(legacy) = nbt!({ "Damage": 3i16 }) else {
        panic!("test expected a compound")
    };

    let mut banner = Banner::from_named_tag(legacy);

    // Untouched, the schema gap is still there.
    assert!(!banner.named_tag().contains_key(TAG_PATTERNS));

    assert_eq!(banner.pattern_ids(), Vec::<i32>::new());

    let repaired = banner.named_tag();
    assert_eq!(repaired.get_int(TAG_BASE), Some(0));
    assert!(repaired.has_tag(TAG_PATTERNS, Tag::List));
    assert_eq!(repaired.get_short("Damage"), Some(3), "repair keeps unrelated tags");
}

#[test]
fn repair_replaces_wrong_kinds() {
    let Value::Compound(bad) = nbt!({ "Base": "blue", "Patterns": 3 }) else {
        panic!("test expected a compound")
    };

    let mut banner = Banner::from_named_tag(bad);
    assert_eq!(banner.pattern_ids(), Vec::<i32>::new());
    assert_eq!(banner.base_color(), 0);

    let tag = banner.named_tag();
    assert!(tag.has_tag(TAG_BASE, Tag::Int));
    assert!(tag.has_tag(TAG_PATTERNS, Tag::List));
}

#[test]
fn survives_the_codec_in_both_flavors() {
    let mut banner = Banner::new();
    banner.set_base_color(11);
    banner.add_pattern("stripe", 5);
    banner.add_pattern("border", 1);

    let tag = banner.named_tag();

    let disk = crate::ser::to_bytes(&tag).unwrap();
    let mut loaded = Banner::from_named_tag(crate::de::from_bytes(&disk).unwrap());
    assert_eq!(loaded.base_color(), 11);
    assert_eq!(loaded.pattern_ids(), vec![0, 1]);
    assert_eq!(
        loaded.pattern(1),
        Some(BannerPattern {
            color: 1,
            name: "border".to_owned()
        })
    );

    let wire = crate::ser::to_network_bytes(&tag).unwrap();
    let mut sent = Banner::from_named_tag(crate::de::from_network_bytes(&wire).unwrap());
    assert_eq!(sent.pattern_ids(), vec![0, 1]);
    assert_eq!(sent.named_tag(), loaded.named_tag());
}
