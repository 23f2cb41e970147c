//! Pixel geometry checks for every supported tower height.

use strictly_hanoi::layout::{peg_area, peg_top};
use strictly_hanoi::{
    Disk, DiskCount, LayoutConfig, ManualClock, PegId, Point, PointerInput, Puzzle, Rect,
    hit_test,
};

#[test]
fn test_peg_top_for_supported_counts() {
    let expected = [(4, 140), (5, 120), (6, 100), (7, 80), (8, 60)];
    for (disks, top) in expected {
        let count = DiskCount::new(disks).unwrap();
        assert_eq!(peg_top(count.slots(), 20), top, "{disks} disks");
    }
}

#[test]
fn test_peg_areas_do_not_overlap() {
    let config = LayoutConfig::default();
    for disks in DiskCount::CHOICES {
        let slots = DiskCount::new(disks).unwrap().slots();
        let areas: Vec<Rect> = config
            .peg_x
            .iter()
            .map(|&x| peg_area(&config, x, slots))
            .collect();
        assert!(areas[0].right() <= areas[1].x);
        assert!(areas[1].right() <= areas[2].x);
    }
}

#[test]
fn test_initial_layout_for_four_disks() {
    let puzzle = Puzzle::new(DiskCount::default());
    let layout = puzzle.current_layout();

    let x = &layout.pegs[PegId::X.index()];
    assert_eq!(x.area, Rect::new(58, 140, 80, 100));
    assert_eq!(x.pole, Rect::new(98, 140, 2, 100));
    assert_eq!(x.label, Point::new(90, 290));

    let drawn: Vec<(u8, Rect)> = x.disks.iter().map(|d| (d.disk.weight(), d.rect)).collect();
    assert_eq!(
        drawn,
        vec![
            (4, Rect::new(58, 220, 80, 20)),
            (3, Rect::new(68, 200, 60, 20)),
            (2, Rect::new(78, 180, 40, 20)),
            (1, Rect::new(88, 160, 20, 20)),
        ]
    );
    assert!(layout.pegs[PegId::Y.index()].disks.is_empty());
    assert!(layout.held.is_none());
    assert_eq!(layout.base, Rect::new(10, 240, 575, 15));
}

#[test]
fn test_moved_disk_lands_at_bottom_of_new_peg() {
    let mut puzzle = Puzzle::with_clock(DiskCount::default(), LayoutConfig::default(), ManualClock::new());
    puzzle.on_pointer_down(Point::new(98, 200)).unwrap();
    puzzle.on_pointer_up(Point::new(498, 200)).unwrap();

    let layout = puzzle.current_layout();
    let z = &layout.pegs[PegId::Z.index()];
    assert_eq!(z.disks.len(), 1);
    assert_eq!(z.disks[0].disk, Disk::new(1));
    assert_eq!(z.disks[0].rect, Rect::new(488, 220, 20, 20));
}

#[test]
fn test_every_drawn_disk_is_clickable() {
    let puzzle = Puzzle::new(DiskCount::new(8).unwrap());
    let layout = puzzle.current_layout();
    let areas = layout.peg_areas();
    for disk in &layout.pegs[PegId::X.index()].disks {
        let centre = Point::new(
            disk.rect.x + disk.rect.width / 2,
            disk.rect.y + disk.rect.height / 2,
        );
        assert_eq!(hit_test(centre, &areas), Some(PegId::X));
    }
}

#[test]
fn test_layout_serializes() {
    let layout = Puzzle::new(DiskCount::default()).current_layout();
    let json = serde_json::to_value(&layout).unwrap();
    assert_eq!(json["pegs"][0]["peg"], "X");
    assert_eq!(json["pegs"][0]["disks"].as_array().unwrap().len(), 4);
}
