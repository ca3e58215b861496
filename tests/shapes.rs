mod shapes {
  use rgeom2d::data::*;
  use rgeom2d::*;

  use approx::assert_abs_diff_eq;

  fn has_point(sols: &Solutions, x: f64, y: f64) -> bool {
    sols.iter().any(|p| p.equals_weakly(&Vector::new(x, y)))
  }

  #[test]
  fn horizontal_line_through_shapes() {
    let line = Line::horizontal(1.0);

    let rect = Rect::new(0.0, 0.0, 4.0, 2.0);
    let sols = rect.intersect(&line);
    assert_eq!(sols.len(), 2);
    assert!(has_point(&sols, 0.0, 1.0) && has_point(&sols, 4.0, 1.0));

    let circle = Circle::new(Vector::new(2.0, 1.0), 1.0);
    let sols = circle.intersect(&line);
    assert_eq!(sols.len(), 2);
    assert!(has_point(&sols, 1.0, 1.0) && has_point(&sols, 3.0, 1.0));

    let triangle = Triangle::new(
      Vector::new(0.0, 0.0),
      Vector::new(4.0, 0.0),
      Vector::new(0.0, 4.0),
    );
    let sols = triangle.intersect(&line);
    assert_eq!(sols.len(), 2);
    assert!(has_point(&sols, 0.0, 1.0) && has_point(&sols, 3.0, 1.0));

    // A line through a vertex still reports the opposite crossing.
    let diagonal = Line::from_points(Vector::new(0.0, 4.0), Vector::new(4.0, -4.0)).unwrap();
    let sols = triangle.intersect(&diagonal);
    assert_eq!(sols.len(), 2);
    assert!(has_point(&sols, 0.0, 4.0) && has_point(&sols, 2.0, 0.0));
  }

  #[test]
  fn segment_and_ray_filters() {
    let circle = Circle::new(Vector::new(0.0, 0.0), 2.0);
    let ray = Ray::new(Vector::new(0.0, 0.0), AngleDeg::new(0.0));
    let sols = circle.intersect(&ray);
    assert_eq!(sols.len(), 1);
    assert!(has_point(&sols, 2.0, 0.0));

    let segment = Segment::new(Vector::new(-1.0, 0.0), Vector::new(5.0, 0.0));
    let sols = circle.intersect(&segment);
    assert_eq!(sols.len(), 1);
    assert!(has_point(&sols, 2.0, 0.0));
  }

  #[test]
  fn clip_then_transform() {
    let square: Polygon = [(-5.0, -5.0), (5.0, -5.0), (5.0, 5.0), (-5.0, 5.0)]
      .iter()
      .map(|&(x, y)| Vector::new(x, y))
      .collect();
    let clipped = square.get_rectangle_clipped_polygon(&Rect::new(0.0, 0.0, 10.0, 10.0));
    assert_abs_diff_eq!(clipped.area(), 25.0, epsilon = 1e-9);

    let mut m = Matrix2D::make_rotation(AngleDeg::new(30.0));
    m.translate(100.0, -3.0);
    let moved = &m * &clipped;
    assert_abs_diff_eq!(moved.area(), 25.0, epsilon = 1e-9);
    let center = moved.centroid().unwrap();
    assert!(center.equals_weakly(&m.transform(&Vector::new(2.5, 2.5))));
  }

  #[test]
  fn regions_total_area() {
    let regions: Vec<Box<dyn Region>> = vec![
      Box::new(Rect::new(0.0, 0.0, 4.0, 2.0)),
      Box::new(Triangle::new(
        Vector::new(0.0, 0.0),
        Vector::new(4.0, 0.0),
        Vector::new(0.0, 4.0),
      )),
      Box::new(Sector::new(
        Vector::new(0.0, 0.0),
        0.0,
        1.0,
        AngleDeg::new(-90.0),
        AngleDeg::new(90.0),
      )),
    ];
    let total: f64 = regions.iter().map(|r| r.area()).sum();
    assert_abs_diff_eq!(total, 8.0 + 8.0 + std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
    let point = Vector::new(0.5, 0.25);
    assert!(regions.iter().all(|r| r.contains(&point)));
  }
}
