use std::collections::HashSet;

use hexmap::{
    attributes::{RandomAttributes, TileAttributeSource},
    grid::tile_count_for_radius,
    rng::attribute_rng,
    Agriculture, GridError, HexCoord, HexGrid, NaturalResource, TileAttributes,
};

fn seeded_grid(radius: i32, seed: u64) -> HexGrid {
    let mut source = RandomAttributes::new(attribute_rng(Some(seed)));
    HexGrid::generate(radius, &mut source).expect("grid generates")
}

/// Encodes the coordinate into the tile so tests can check wiring.
struct CoordinateEcho {
    calls: Vec<HexCoord>,
}

impl TileAttributeSource for CoordinateEcho {
    fn attributes_for(&mut self, coord: HexCoord) -> TileAttributes {
        self.calls.push(coord);
        TileAttributes {
            elevation: coord.q as f64,
            temperature: coord.r as f64,
            natural_resource: NaturalResource::Iron,
            agriculture: Agriculture::High,
        }
    }
}

#[test]
fn tile_count_matches_hexagonal_number() {
    for radius in 0..=6 {
        let grid = seeded_grid(radius, 1);
        assert_eq!(
            grid.len(),
            3 * (radius * radius + radius) as usize + 1,
            "radius {radius}"
        );
        assert_eq!(grid.len(), tile_count_for_radius(radius as u32));
    }
}

#[test]
fn every_key_lies_on_the_cube_plane_within_radius() {
    let radius = 4;
    let grid = seeded_grid(radius, 3);
    for coord in grid.coords() {
        assert_eq!(coord.q + coord.r + coord.s(), 0);
        let extent = coord.q.abs().max(coord.r.abs()).max(coord.s().abs());
        assert!(extent <= radius, "{coord} outside radius {radius}");
        assert_eq!(grid.tile(coord).map(|t| t.coord), Some(coord));
    }
}

#[test]
fn region_has_no_gaps() {
    let radius = 3;
    let grid = seeded_grid(radius, 3);
    for q in -radius - 1..=radius + 1 {
        for r in -radius - 1..=radius + 1 {
            let coord = HexCoord::new(q, r);
            let inside = coord.ring_index() <= radius as u32;
            assert_eq!(grid.contains(coord), inside, "{coord}");
        }
    }
}

#[test]
fn lookup_outside_region_is_absent() {
    let grid = seeded_grid(2, 5);
    assert!(grid.get_tile(0, 0).is_some());
    assert!(grid.get_tile(3, 0).is_none());
    assert!(grid.get_tile(2, 2).is_none());
    assert!(grid.get_tile(-100, 40).is_none());
}

#[test]
fn negative_radius_is_rejected() {
    let mut source = RandomAttributes::new(attribute_rng(Some(0)));
    let err = HexGrid::generate(-3, &mut source).unwrap_err();
    assert_eq!(err, GridError::NegativeRadius(-3));
}

#[test]
fn source_is_asked_once_per_tile_in_loop_order() {
    let mut source = CoordinateEcho { calls: Vec::new() };
    let grid = HexGrid::generate(2, &mut source).unwrap();

    assert_eq!(source.calls.len(), grid.len());
    assert_eq!(source.calls, grid.coords());
    let unique: HashSet<_> = source.calls.iter().collect();
    assert_eq!(unique.len(), grid.len());

    let tile = grid.get_tile(1, -2).unwrap();
    assert_eq!(tile.elevation, 1.0);
    assert_eq!(tile.temperature, -2.0);
    assert_eq!(tile.natural_resource, NaturalResource::Iron);
}

#[test]
fn same_seed_gives_identical_attributes() {
    let a = seeded_grid(3, 2024);
    let b = seeded_grid(3, 2024);

    let tiles_a: Vec<_> = a.tiles().cloned().collect();
    let tiles_b: Vec<_> = b.tiles().cloned().collect();
    assert_eq!(tiles_a, tiles_b);
}

#[test]
fn different_seeds_share_coordinates_but_not_attributes() {
    let a = seeded_grid(3, 1);
    let b = seeded_grid(3, 2);

    assert_eq!(a.coords(), b.coords());
    let same = a
        .tiles()
        .zip(b.tiles())
        .all(|(x, y)| x.elevation == y.elevation && x.temperature == y.temperature);
    assert!(!same, "different seeds should draw different attributes");
}

#[test]
fn random_attributes_respect_ranges() {
    let grid = seeded_grid(5, 11);
    for tile in grid.tiles() {
        assert!((0.0..100.0).contains(&tile.elevation));
        assert!((-30.0..50.0).contains(&tile.temperature));
    }
}

#[test]
fn neighbors_only_return_existing_tiles() {
    let grid = seeded_grid(2, 9);

    let center = grid.neighbors(HexCoord::ORIGIN);
    assert_eq!(center.len(), 6);

    let corner = grid.neighbors(HexCoord::new(2, -2));
    assert_eq!(corner.len(), 3);
    for tile in corner {
        assert_eq!(tile.coord.distance(HexCoord::new(2, -2)), 1);
    }
}

#[test]
fn unseeded_grids_share_coordinates_but_not_attributes() {
    let mut source_a = RandomAttributes::new(attribute_rng(None));
    let mut source_b = RandomAttributes::new(attribute_rng(None));
    let a = HexGrid::generate(3, &mut source_a).unwrap();
    let b = HexGrid::generate(3, &mut source_b).unwrap();

    assert_eq!(a.coords(), b.coords());
    let same = a
        .tiles()
        .zip(b.tiles())
        .all(|(x, y)| x.elevation == y.elevation && x.temperature == y.temperature);
    assert!(!same, "entropy-seeded runs should draw different attributes");
}
