//! Validates symmetry transforms, edge-signature encoding, and
//! orientation matching against hand-derived expectations

use jigsawtile::io::parser::parse_tiles;
use jigsawtile::spatial::{Bitmap, Edge, Tile, Transform};

const SAMPLE: &str = include_str!("data/sample.txt");

fn bitmap_from(rows: &[&str]) -> Bitmap {
    let pixels = rows
        .iter()
        .map(|row| row.chars().map(|symbol| symbol == '#').collect())
        .collect();
    Bitmap::from_rows(pixels).unwrap()
}

fn sample_tile(id: u32) -> Tile {
    parse_tiles(SAMPLE)
        .unwrap()
        .into_iter()
        .find(|tile| tile.id() == id)
        .unwrap()
}

#[test]
fn test_transform_coordinate_maps() {
    // Two on pixels along the top edge make every symmetry distinct.
    let original = bitmap_from(&["##.", "...", "..."]);

    let expected = [
        (Transform::Identity, ["##.", "...", "..."]),
        (Transform::RightRotation, ["..#", "..#", "..."]),
        (Transform::HalfTurn, ["...", "...", ".##"]),
        (Transform::LeftRotation, ["...", "#..", "#.."]),
        (Transform::MainTransposition, ["#..", "#..", "..."]),
        (Transform::HorizontalFlip, [".##", "...", "..."]),
        (Transform::CounterTransposition, ["...", "..#", "..#"]),
        (Transform::VerticalFlip, ["...", "...", "##."]),
    ];

    for (transform, rows) in expected {
        assert_eq!(
            original.transformed(transform),
            bitmap_from(&rows),
            "wrong pixel mapping for {transform:?}"
        );
    }
}

#[test]
fn test_identity_is_idempotent() {
    let original = bitmap_from(&["#.#", ".#.", "##."]);
    let twice = original
        .transformed(Transform::Identity)
        .transformed(Transform::Identity);
    assert_eq!(twice, original);
}

#[test]
fn test_signatures_read_msb_first() {
    let tile = Tile::new(1, bitmap_from(&["##.", "#..", "..."]));

    assert_eq!(tile.edge(Edge::TopLeftToRight), 0b110);
    assert_eq!(tile.edge(Edge::TopRightToLeft), 0b011);
    assert_eq!(tile.edge(Edge::LeftTopToBottom), 0b110);
    assert_eq!(tile.edge(Edge::RightTopToBottom), 0);
    assert_eq!(tile.edge(Edge::BottomLeftToRight), 0);
}

#[test]
fn test_signature_set_invariant_under_transforms() {
    for tile in parse_tiles(SAMPLE).unwrap() {
        for transform in Transform::ALL {
            assert_eq!(
                tile.transformed(transform).signatures(),
                tile.signatures(),
                "signature set changed under {transform:?} for tile {}",
                tile.id()
            );
        }
    }
}

#[test]
fn test_match_edge_returns_exact_direction() {
    // In the worked example, 2311's right edge meets 3079's left edge
    // read in the opposite direction, so 3079 must be reoriented.
    let left = sample_tile(2311);
    let right = sample_tile(3079);
    let required = left.edge(Edge::RightTopToBottom);

    assert_ne!(right.edge(Edge::LeftTopToBottom), required);
    assert_eq!(right.edge(Edge::LeftBottomToTop), required);

    let oriented = right.match_edge(Edge::LeftTopToBottom, required).unwrap();
    assert_eq!(oriented.id(), 3079);
    assert_eq!(oriented.edge(Edge::LeftTopToBottom), required);
}

#[test]
fn test_match_edge_fails_for_unknown_signature() {
    let tile = sample_tile(1951);
    // No ten-pixel edge can encode a value this large.
    assert!(tile.match_edge(Edge::TopLeftToRight, 1 << 20).is_none());
}

#[test]
fn test_variations_follow_fixed_order() {
    let tile = sample_tile(1427);
    let variations: Vec<Tile> = tile.variations().collect();
    assert_eq!(variations.len(), 8);
    for (variation, transform) in variations.iter().zip(Transform::ALL) {
        assert_eq!(variation.bitmap(), &tile.bitmap().transformed(transform));
    }
}
