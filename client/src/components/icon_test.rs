use super::*;

use std::collections::HashSet;

#[test]
fn every_icon_has_geometry() {
    for icon in Icon::ALL {
        assert!(!icon.shapes().is_empty(), "{icon:?} has no shapes");
    }
}

#[test]
fn icon_list_has_no_duplicates() {
    let unique: HashSet<Icon> = Icon::ALL.into_iter().collect();
    assert_eq!(unique.len(), Icon::ALL.len());
}

#[test]
fn shapes_fit_the_24_unit_viewbox() {
    for icon in Icon::ALL {
        for shape in icon.shapes() {
            match *shape {
                Shape::Path(d) => assert!(!d.trim().is_empty()),
                Shape::Rect { x, y, width, height, rx } => {
                    assert!(x >= 0.0 && y >= 0.0);
                    assert!(x + width <= 24.0 && y + height <= 24.0);
                    assert!(rx * 2.0 <= width.min(height));
                }
                Shape::Circle { cx, cy, r } => {
                    assert!(cx - r >= 0.0 && cx + r <= 24.0);
                    assert!(cy - r >= 0.0 && cy + r <= 24.0);
                }
            }
        }
    }
}
