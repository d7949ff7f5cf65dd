//! Validates pattern templates and the orientation scan's clearing
//! semantics

use jigsawtile::AssemblyError;
use jigsawtile::analysis::patterns::SearchPattern;
use jigsawtile::analysis::roughness::{roughness, scan};
use jigsawtile::spatial::{Bitmap, Transform};

fn bitmap_from(rows: &[&str]) -> Bitmap {
    let pixels = rows
        .iter()
        .map(|row| row.chars().map(|symbol| symbol == '#').collect())
        .collect();
    Bitmap::from_rows(pixels).unwrap()
}

#[test]
fn test_sea_monster_template() {
    let monster = SearchPattern::sea_monster();
    assert_eq!(monster.height(), 3);
    assert_eq!(monster.width(), 20);
    assert_eq!(monster.offsets().len(), 15);
    assert_eq!(monster.offsets().first(), Some(&[0, 18]));
    assert_eq!(monster.offsets().last(), Some(&[2, 16]));
}

#[test]
fn test_from_text_collects_offsets() {
    let pattern = SearchPattern::from_text("..#\n#.#").unwrap();
    assert_eq!(pattern.offsets(), &[[0, 2], [1, 0], [1, 2]]);
    assert_eq!(pattern.height(), 2);
    assert_eq!(pattern.width(), 3);
}

#[test]
fn test_from_text_rejects_empty_template() {
    assert!(matches!(
        SearchPattern::from_text(".. \n .."),
        Err(AssemblyError::EmptyPattern)
    ));
}

#[test]
fn test_anchor_bounds_are_checked() {
    let pattern = SearchPattern::from_text("##").unwrap();
    let image = bitmap_from(&["##", ".."]);

    assert!(pattern.is_match_at(&image, 0, 0));
    // Sliding past the right edge must not wrap or match.
    assert!(!pattern.is_match_at(&image, 0, 1));
    assert!(!pattern.is_match_at(&image, 1, 0));
}

#[test]
fn test_occurrences_clear_pixels_as_found() {
    // Three on pixels in a row hold only one two-wide occurrence: the
    // sweep clears (0,0)-(0,1), so the candidate at (0,1) sees a cleared
    // pixel and fails, leaving one rough pixel.
    let pattern = SearchPattern::from_text("##").unwrap();
    let image = bitmap_from(&["###", "...", "..."]);

    let result = scan(&image, &pattern).unwrap();
    assert_eq!(result.orientation, Transform::Identity);
    assert_eq!(result.anchors, vec![[0, 0]]);
    assert_eq!(result.roughness, 1);
}

#[test]
fn test_scan_tries_orientations_in_order() {
    // A vertical pair only appears after rotating the horizontal pair,
    // and RightRotation is the first qualifying transform.
    let pattern = SearchPattern::from_text("#\n#").unwrap();
    let image = bitmap_from(&["##.", "...", "..."]);

    let result = scan(&image, &pattern).unwrap();
    assert_eq!(result.orientation, Transform::RightRotation);
    assert_eq!(result.roughness, 0);
}

#[test]
fn test_scan_leaves_reported_image_unmodified() {
    let pattern = SearchPattern::from_text("##").unwrap();
    let image = bitmap_from(&["###", "...", "..."]);

    let result = scan(&image, &pattern).unwrap();
    assert_eq!(result.image, image.transformed(result.orientation));
    assert_eq!(result.image.count_ones(), 3);
}

#[test]
fn test_no_occurrence_reports_zero_roughness() {
    let pattern = SearchPattern::from_text("###").unwrap();
    let image = bitmap_from(&["#..", ".#.", "..#"]);

    assert!(scan(&image, &pattern).is_none());
    assert_eq!(roughness(&image, &pattern), 0);
}
