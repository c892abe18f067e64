use shapekit_core::{BoundingBox, Color, Point};
use shapekit_designer::{
    DesignCircle, DesignGroup, DesignRectangle, DesignTriangle, DesignerShape, DrawingObject,
    Shape, ShapeKind, ShapeType,
};

fn node(shape: Shape) -> DrawingObject {
    DrawingObject::new(shape, Color::BLACK)
}

#[test]
fn test_circle_contains_point() {
    let circle = DesignCircle::at(Point::new(100, 100), 50).unwrap();
    assert!(circle.contains_point(Point::new(100, 100)));
    assert!(circle.contains_point(Point::new(125, 100)));
    assert!(!circle.contains_point(Point::new(126, 100)));
    // Inside the box but outside the circle.
    assert!(!circle.contains_point(Point::new(77, 77)));
}

#[test]
fn test_circle_odd_width_keeps_half_pixel_center() {
    // Center (5.5, 5.5), radius 5.5.
    let circle = DesignCircle::new(BoundingBox::new(0, 0, 11, 11));
    assert!(!circle.contains_point(Point::new(0, 5)));
    assert!(circle.contains_point(Point::new(1, 5)));
    assert!(circle.contains_point(Point::new(10, 5)));
    assert!(!circle.contains_point(Point::new(11, 5)));
}

#[test]
fn test_rectangle_contains_point() {
    let rect = DesignRectangle::new(BoundingBox::new(0, 0, 10, 10));
    assert!(rect.contains_point(Point::new(0, 0)));
    assert!(rect.contains_point(Point::new(5, 5)));
    assert!(!rect.contains_point(Point::new(10, 5)));
    assert!(!rect.contains_point(Point::new(15, 5)));
}

#[test]
fn test_triangle_created_from_size() {
    let triangle = DesignTriangle::at(Point::new(100, 100), 50).unwrap();
    assert_eq!(triangle.bounds(), BoundingBox::new(75, 79, 50, 43));
    assert_eq!(
        triangle.polygon(),
        &[Point::new(100, 79), Point::new(125, 122), Point::new(75, 122)]
    );
}

#[test]
fn test_triangle_contains_point_is_exact() {
    let triangle = DesignTriangle::new(BoundingBox::new(0, 0, 100, 87));
    assert!(triangle.contains_point(Point::new(50, 40)));
    // Top corners of the box lie outside the outline.
    assert!(!triangle.contains_point(Point::new(2, 2)));
    assert!(!triangle.contains_point(Point::new(97, 2)));
}

#[test]
fn test_shape_kind_factory() {
    let center = Point::new(200, 200);
    assert_eq!(ShapeKind::Circle.create(center, 50).unwrap().shape_type(), ShapeType::Circle);
    assert_eq!(
        ShapeKind::Rectangle.create(center, 50).unwrap().bounds(),
        BoundingBox::new(175, 175, 50, 50)
    );
    assert_eq!(
        ShapeKind::Triangle.create(center, 50).unwrap().shape_type(),
        ShapeType::Triangle
    );
    assert_eq!("rect".parse::<ShapeKind>().unwrap(), ShapeKind::Rectangle);
    assert!("hexagon".parse::<ShapeKind>().is_err());
}

#[test]
fn test_group_box_is_union_of_children() {
    let group = DesignGroup::from_children(vec![
        node(Shape::Rectangle(DesignRectangle::new(BoundingBox::new(10, 10, 20, 20)))),
        node(Shape::Circle(DesignCircle::new(BoundingBox::new(50, 40, 30, 30)))),
    ]);
    assert_eq!(group.bounds(), BoundingBox::new(10, 10, 70, 60));
    assert_eq!(group.len(), 2);

    assert!(DesignGroup::new().bounds().is_empty());
}

#[test]
fn test_group_add_child_updates_box() {
    let mut group = DesignGroup::new();
    group.add_child(node(Shape::Rectangle(DesignRectangle::new(
        BoundingBox::new(10, 10, 20, 20),
    ))));
    assert_eq!(group.bounds(), BoundingBox::new(10, 10, 20, 20));
    group.add_child(node(Shape::Rectangle(DesignRectangle::new(
        BoundingBox::new(100, 100, 20, 20),
    ))));
    assert_eq!(group.bounds(), BoundingBox::new(10, 10, 110, 110));
}

#[test]
fn test_group_hit_test_uses_children() {
    let group = DesignGroup::from_children(vec![
        node(Shape::Rectangle(DesignRectangle::new(BoundingBox::new(0, 0, 10, 10)))),
        node(Shape::Rectangle(DesignRectangle::new(BoundingBox::new(90, 90, 10, 10)))),
    ]);
    assert!(group.contains_point(Point::new(5, 5)));
    assert!(group.contains_point(Point::new(95, 95)));
    // Inside the union box, outside every child.
    assert!(!group.contains_point(Point::new(50, 50)));
}
