use proptest::prelude::*;
use shapekit_core::{BoundingBox, Color, Point};
use shapekit_designer::{
    DesignCircle, DesignGroup, DesignRectangle, DesignTriangle, DesignerShape, DrawingObject,
    Shape,
};

fn canvas() -> BoundingBox {
    BoundingBox::new(0, 0, 800, 800)
}

fn rect_node(x: i32, y: i32, w: i32, h: i32) -> DrawingObject {
    DrawingObject::new(
        Shape::Rectangle(DesignRectangle::new(BoundingBox::new(x, y, w, h))),
        Color::BLACK,
    )
}

fn group_of(children: Vec<DrawingObject>) -> Shape {
    Shape::Group(DesignGroup::from_children(children))
}

fn child_boxes(shape: &Shape) -> Vec<BoundingBox> {
    shape
        .as_group()
        .unwrap()
        .children()
        .iter()
        .map(|c| c.bounds())
        .collect()
}

#[test]
fn test_translate_inside_canvas() {
    let mut circle = DesignCircle::at(Point::new(100, 100), 50).unwrap();
    assert!(circle.translate(&canvas(), 10, -5));
    assert_eq!(circle.bounds(), BoundingBox::new(85, 70, 50, 50));
}

#[test]
fn test_translate_rejected_at_canvas_edge() {
    let mut rect = DesignRectangle::new(BoundingBox::new(0, 0, 50, 50));
    assert!(!rect.translate(&canvas(), -1, 0));
    assert_eq!(rect.bounds(), BoundingBox::new(0, 0, 50, 50));

    let mut rect = DesignRectangle::new(BoundingBox::new(750, 750, 50, 50));
    assert!(!rect.translate(&canvas(), 0, 1));
    assert!(rect.translate(&canvas(), -1, 0));
}

#[test]
fn test_translate_triangle_moves_polygon() {
    let mut triangle = DesignTriangle::new(BoundingBox::new(0, 0, 100, 87));
    assert!(triangle.translate(&canvas(), 5, 5));
    assert_eq!(triangle.polygon()[0], Point::new(55, 5));
}

#[test]
fn test_translate_group_moves_every_child() {
    let mut group = group_of(vec![rect_node(10, 10, 20, 20), rect_node(100, 50, 20, 20)]);
    assert!(group.translate(&canvas(), 5, 5));
    assert_eq!(
        child_boxes(&group),
        vec![
            BoundingBox::new(15, 15, 20, 20),
            BoundingBox::new(105, 55, 20, 20)
        ]
    );
    assert_eq!(group.bounds(), BoundingBox::new(15, 15, 110, 60));

    assert!(!group.translate(&canvas(), -20, 0));
    assert_eq!(group.bounds(), BoundingBox::new(15, 15, 110, 60));
}

#[test]
fn test_circle_shrink_scenario() {
    let mut circle = DesignCircle::at(Point::new(100, 100), 50).unwrap();
    let original = circle.clone();

    assert!(circle.resize(&canvas(), -10));
    assert_eq!(circle.bounds(), BoundingBox::new(85, 85, 30, 30));

    let mut circle = original;
    assert!(circle.resize(&canvas(), -20));
    assert_eq!(circle.bounds(), BoundingBox::new(95, 95, 10, 10));
    assert!(!circle.resize(&canvas(), -1));
    assert_eq!(circle.bounds(), BoundingBox::new(95, 95, 10, 10));
}

#[test]
fn test_minimum_size_boundary() {
    let mut rect = DesignRectangle::new(BoundingBox::new(100, 100, 30, 30));
    assert!(!rect.resize(&canvas(), -11));
    assert_eq!(rect.bounds().width, 30);
    assert!(rect.resize(&canvas(), -10));
    assert_eq!(rect.bounds().width, 10);
}

#[test]
fn test_grow_rejected_outside_canvas() {
    let mut rect = DesignRectangle::new(BoundingBox::new(2, 2, 30, 30));
    assert!(!rect.resize(&canvas(), 5));
    assert_eq!(rect.bounds(), BoundingBox::new(2, 2, 30, 30));
    assert!(rect.resize(&canvas(), 2));
    assert_eq!(rect.bounds(), BoundingBox::new(0, 0, 34, 34));
}

#[test]
fn test_triangle_resize_recomputes_polygon() {
    let mut triangle = DesignTriangle::new(BoundingBox::new(100, 100, 100, 87));
    assert!(triangle.resize(&canvas(), 10));
    assert_eq!(triangle.bounds(), BoundingBox::new(90, 90, 120, 107));
    assert_eq!(
        triangle.polygon(),
        &[Point::new(150, 90), Point::new(210, 197), Point::new(90, 197)]
    );
}

#[test]
fn test_group_resize_applies_to_every_child() {
    let mut group = group_of(vec![rect_node(100, 100, 40, 40), rect_node(200, 100, 40, 40)]);
    assert!(group.resize(&canvas(), 5));
    assert_eq!(
        child_boxes(&group),
        vec![
            BoundingBox::new(95, 95, 50, 50),
            BoundingBox::new(195, 95, 50, 50)
        ]
    );
    assert_eq!(group.bounds(), BoundingBox::new(95, 95, 150, 50));
}

#[test]
fn test_group_resize_rolls_back_when_a_child_rejects() {
    // The second child would drop below the minimum size.
    let mut group = group_of(vec![rect_node(100, 100, 40, 40), rect_node(200, 100, 15, 15)]);
    let before = group.clone();

    assert!(!group.resize(&canvas(), -5));
    assert_eq!(group, before);
}

#[test]
fn test_nested_group_rollback() {
    let inner = DrawingObject::new(
        group_of(vec![rect_node(100, 100, 40, 40), rect_node(200, 200, 40, 40)]),
        Color::BLACK,
    );
    // Touches the canvas edge, so growing fails after the nested group grew.
    let mut outer = group_of(vec![inner, rect_node(0, 300, 40, 40)]);
    let before = outer.clone();

    assert!(!outer.resize(&canvas(), 5));
    assert_eq!(outer, before);
}

#[test]
fn test_rollback_restores_child_that_started_off_canvas() {
    let canvas = BoundingBox::new(0, 80, 800, 520);
    // The first child crosses the header edge; shrinking moves it inside,
    // and growing it back would be rejected.
    let mut group = group_of(vec![rect_node(100, 78, 50, 50), rect_node(300, 300, 15, 15)]);
    let before = group.clone();

    assert!(!group.resize(&canvas, -5));
    assert_eq!(group, before);
    assert_eq!(child_boxes(&group)[0], BoundingBox::new(100, 78, 50, 50));
}

#[test]
fn test_transforms_reject_out_of_range_deltas() {
    let mut rect = DesignRectangle::new(BoundingBox::new(100, 100, 40, 40));
    assert!(!rect.translate(&canvas(), i32::MAX, 0));
    assert!(!rect.translate(&canvas(), 0, i32::MIN));
    assert!(!rect.resize(&canvas(), i32::MAX));
    assert!(!rect.resize(&canvas(), i32::MIN));
    assert_eq!(rect.bounds(), BoundingBox::new(100, 100, 40, 40));

    let mut group = group_of(vec![rect_node(100, 100, 40, 40), rect_node(200, 100, 40, 40)]);
    let before = group.clone();
    assert!(!group.translate(&canvas(), i32::MAX, i32::MAX));
    assert!(!group.resize(&canvas(), i32::MAX / 2 + 1));
    assert_eq!(group, before);
}

#[test]
fn test_empty_group_resize_succeeds() {
    let mut group = Shape::Group(DesignGroup::new());
    assert!(group.resize(&canvas(), 5));
    assert!(group.bounds().is_empty());
}

proptest! {
    #[test]
    fn prop_resize_then_inverse_restores_box(
        x in 0i32..700,
        y in 0i32..700,
        w in 10i32..100,
        h in 10i32..100,
        delta in -50i32..50,
    ) {
        let rect = BoundingBox::new(x, y, w, h);
        prop_assume!(rect.is_within(&canvas()));

        let mut shape = DesignRectangle::new(rect);
        if shape.resize(&canvas(), delta) {
            prop_assert!(shape.resize(&canvas(), -delta));
            prop_assert_eq!(shape.bounds(), rect);
        } else {
            prop_assert_eq!(shape.bounds(), rect);
        }
    }

    #[test]
    fn prop_group_resize_is_atomic(
        sizes in proptest::collection::vec(10i32..60, 1..5),
        delta in -30i32..30,
    ) {
        let children: Vec<DrawingObject> = sizes
            .iter()
            .enumerate()
            .map(|(i, s)| rect_node(100 + i as i32 * 100, 100, *s, *s))
            .collect();
        let mut group = group_of(children);
        let before = group.clone();

        let accepted = group.resize(&canvas(), delta);
        let expected = sizes.iter().all(|s| s + 2 * delta >= 10);
        prop_assert_eq!(accepted, expected);
        if !accepted {
            prop_assert_eq!(group, before);
        }
    }
}
