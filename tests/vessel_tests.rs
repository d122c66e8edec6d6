use sea_battle::{Coordinate, Orientation, Vessel};

#[test]
fn test_horizontal_cells() {
    let vessel = Vessel::new(Coordinate::new(0, 0), 3, Orientation::Horizontal);
    let cells: Vec<_> = vessel.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(2, 0)
        ]
    );
}

#[test]
fn test_vertical_cells_and_occupies() {
    let vessel = Vessel::new(Coordinate::new(4, 1), 2, Orientation::Vertical);
    let cells: Vec<_> = vessel.cells().collect();
    assert_eq!(cells, vec![Coordinate::new(4, 1), Coordinate::new(4, 2)]);
    for c in cells {
        assert!(vessel.occupies(c));
    }
    assert!(!vessel.occupies(Coordinate::new(4, 3)));
    assert!(!vessel.occupies(Coordinate::new(5, 1)));
}

#[test]
fn test_new_vessel_is_undamaged() {
    let vessel = Vessel::new(Coordinate::new(2, 2), 1, Orientation::Vertical);
    assert_eq!(vessel.remaining(), 1);
    assert_eq!(vessel.length(), 1);
    assert!(!vessel.is_sunk());
}

#[test]
fn test_cells_may_extend_off_board() {
    let vessel = Vessel::new(Coordinate::new(5, 5), 2, Orientation::Horizontal);
    let cells: Vec<_> = vessel.cells().collect();
    assert_eq!(cells[1], Coordinate::new(6, 5));
}

#[test]
fn test_coordinate_neighbours_and_distance() {
    let c = Coordinate::new(0, 0);
    let around: Vec<_> = c.neighbours().collect();
    assert_eq!(around.len(), 8);
    assert!(!around.contains(&c));
    assert!(around.iter().all(|n| n.distance(c) == 1));
    assert_eq!(Coordinate::new(1, 1).distance(Coordinate::new(4, 3)), 3);
    assert_eq!(Coordinate::new(2, 3).to_string(), "(2, 3)");
}
