use tbcontrols::segments;
use tbcontrols::{
    extract_tag, lookup_value, resolve_selected_index, resolve_value_for_index, LookupMiss,
    ResolutionMode, Segment, Segments, Taggable,
};

fn untagged(n: usize) -> Segments<usize, &'static str> {
    Segments::from_children(0..n)
}

fn by_values(values: &[&'static str]) -> ResolutionMode<&'static str> {
    ResolutionMode::ByValues(values.to_vec())
}

// ============================================================================
// Value List Mode
// ============================================================================

#[test]
fn test_current_value_selects_its_index() {
    let children = untagged(3);
    let mode = by_values(&["a", "b", "c"]);

    assert_eq!(resolve_selected_index(children.as_slice(), &mode, &"b"), Some(1));
}

#[test]
fn test_unknown_value_selects_nothing() {
    let children = untagged(3);
    let mode = by_values(&["a", "b", "c"]);

    assert_eq!(resolve_selected_index(children.as_slice(), &mode, &"z"), None);
}

#[test]
fn test_duplicate_values_select_first() {
    let children = untagged(2);
    let mode = by_values(&["x", "x"]);

    assert_eq!(resolve_selected_index(children.as_slice(), &mode, &"x"), Some(0));
}

#[test]
fn test_value_for_index() {
    let children = untagged(3);
    let mode = by_values(&["a", "b", "c"]);

    assert_eq!(resolve_value_for_index(children.as_slice(), &mode, 2), Some(&"c"));
    assert_eq!(resolve_value_for_index(children.as_slice(), &mode, 3), None);
}

#[test]
fn test_short_value_list_leaves_trailing_segments_without_value() {
    let children = untagged(4);
    let mode = by_values(&["a", "b"]);

    assert_eq!(resolve_value_for_index(children.as_slice(), &mode, 1), Some(&"b"));
    assert_eq!(resolve_value_for_index(children.as_slice(), &mode, 3), None);
    assert_eq!(
        lookup_value(children.as_slice(), &mode, 3),
        Err(LookupMiss::IndexOutOfRange { index: 3, len: 2 })
    );
}

#[test]
fn test_index_value_round_trip() {
    let children = untagged(4);
    let mode = by_values(&["n", "e", "s", "w"]);

    for i in 0..4 {
        let value = resolve_value_for_index(children.as_slice(), &mode, i).copied();
        let value = value.expect("every segment has a value");
        assert_eq!(resolve_selected_index(children.as_slice(), &mode, &value), Some(i));
    }
}

// ============================================================================
// Tag Mode
// ============================================================================

#[test]
fn test_tag_selects_tagged_child() {
    let children: Vec<Segment<&str, i32>> = vec![
        Segment::new("none"),
        Segment::tagged("five", 5),
        Segment::tagged("six", 6),
    ];
    let mode = ResolutionMode::ByTag;

    assert_eq!(resolve_selected_index(&children, &mode, &5), Some(1));
    assert_eq!(resolve_selected_index(&children, &mode, &6), Some(2));
    assert_eq!(resolve_selected_index(&children, &mode, &7), None);
}

#[test]
fn test_untagged_child_has_no_value() {
    let children = segments!["a" => 'a', "b" => 'b'];
    let mut items: Vec<Segment<&str, char>> = children.into_iter().collect();
    items.push(Segment::new("plain"));
    let mode = ResolutionMode::ByTag;

    assert_eq!(resolve_value_for_index(&items, &mode, 0), Some(&'a'));
    assert_eq!(resolve_value_for_index(&items, &mode, 2), None);
    assert_eq!(
        lookup_value(&items, &mode, 2),
        Err(LookupMiss::TagNotFound { index: 2 })
    );
    assert_eq!(
        lookup_value(&items, &mode, 9),
        Err(LookupMiss::IndexOutOfRange { index: 9, len: 3 })
    );
}

#[test]
fn test_duplicate_tags_select_first() {
    let children = segments!["one" => 1u8, "also one" => 1, "two" => 2];

    assert_eq!(
        resolve_selected_index(children.as_slice(), &ResolutionMode::ByTag, &1),
        Some(0)
    );
}

#[test]
fn test_with_tag_replaces_tag() {
    let segment = Segment::tagged("day", 1).with_tag(2);

    assert_eq!(segment.tag(), Some(&2));
    assert_eq!(*segment.content(), "day");
}

#[test]
fn test_tag_index_value_round_trip() {
    let children = segments!["Day" => 1u32, "Week" => 7, "Month" => 30];
    let mode = ResolutionMode::ByTag;

    for i in 0..children.len() {
        let value = *resolve_value_for_index(children.as_slice(), &mode, i)
            .expect("every segment is tagged");
        assert_eq!(resolve_selected_index(children.as_slice(), &mode, &value), Some(i));
    }
}

#[test]
fn test_resolution_is_stable() {
    let children = untagged(3);
    let values = by_values(&["a", "b", "c"]);
    let first = resolve_selected_index(children.as_slice(), &values, &"c");
    assert_eq!(resolve_selected_index(children.as_slice(), &values, &"c"), first);
    assert_eq!(first, Some(2));

    let tagged = segments!["x" => 'x', "y" => 'y'];
    let first = resolve_selected_index(tagged.as_slice(), &ResolutionMode::ByTag, &'y');
    let second = resolve_selected_index(tagged.as_slice(), &ResolutionMode::ByTag, &'y');
    assert_eq!(first, second);
    assert_eq!(first, Some(1));
}

// ============================================================================
// Custom Taggable Elements
// ============================================================================

#[derive(Debug)]
struct Swatch {
    name: &'static str,
    hex: Option<u32>,
}

impl Taggable<u32> for Swatch {
    fn tag(&self) -> Option<&u32> {
        self.hex.as_ref()
    }
}

#[test]
fn test_custom_taggable_element() {
    let swatches = vec![
        Swatch {
            name: "red",
            hex: Some(0xff0000),
        },
        Swatch {
            name: "custom",
            hex: None,
        },
        Swatch {
            name: "blue",
            hex: Some(0x0000ff),
        },
    ];

    assert_eq!(
        resolve_selected_index(&swatches, &ResolutionMode::ByTag, &0x0000ff),
        Some(2)
    );
    assert_eq!(extract_tag::<u32, _>(&swatches[1]), None);
    assert_eq!(swatches[1].name, "custom");
}

#[test]
fn test_boxed_elements_forward_tags() {
    let boxed: Vec<Box<Swatch>> = vec![Box::new(Swatch {
        name: "green",
        hex: Some(0x00ff00),
    })];

    assert_eq!(extract_tag::<u32, _>(&boxed[0]), Some(&0x00ff00));
}

// ============================================================================
// Resolution Mode
// ============================================================================

#[test]
fn test_mode_accessors() {
    let mode = by_values(&["a"]);
    assert_eq!(mode.values(), Some(&["a"][..]));
    assert!(!mode.is_by_tag());

    let tag: ResolutionMode<&str> = ResolutionMode::ByTag;
    assert_eq!(tag.values(), None);
    assert!(tag.is_by_tag());
}
