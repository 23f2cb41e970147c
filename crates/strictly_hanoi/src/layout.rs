//! Pixel layout of pegs and disks.
//!
//! Everything here is a pure function of the disk count and the current peg
//! contents. Front ends call [`Layout::compute`] on every frame and draw
//! what it returns; the puzzle calls it on every pointer event to find the
//! clickable peg areas.

use crate::{Disk, PegId, PegStack, Point, Rect};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Fixed drawing constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Height of every disk; also the unit for widths and peg heights.
    pub disk_height: i32,
    /// Horizontal shift from the pole per unit of disk weight.
    pub disk_step: i32,
    /// Y coordinate the bottom disk sits on.
    pub base_line: i32,
    /// Pole X coordinates for X, Y and Z.
    pub peg_x: [i32; 3],
    /// Width of a drawn pole.
    pub pole_width: i32,
    /// Offset of the dragged disk from the pointer, up and to the left.
    pub grab_offset: i32,
    /// The wooden base under the pegs.
    pub base: Rect,
    /// Full drawing surface.
    pub canvas_width: i32,
    /// Full drawing surface.
    pub canvas_height: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            disk_height: 20,
            disk_step: 10,
            base_line: 240,
            peg_x: [98, 298, 498],
            pole_width: 2,
            grab_offset: 20,
            base: Rect::new(10, 240, 575, 15),
            canvas_width: 600,
            canvas_height: 300,
        }
    }
}

/// Top Y coordinate of the pegs for a given slot count.
///
/// `slots` is the peg capacity, one more than the number of disks. The
/// stepping for 5 to 8 disks is irregular but always lands the bottom of the
/// peg area on the base line; smaller towers fall through to the last arm.
#[instrument]
pub fn peg_top(slots: usize, disk_height: i32) -> i32 {
    let slots = slots as i32;
    match slots - 1 {
        8 => (slots - 6) * disk_height,
        7 => (slots - 4) * disk_height,
        6 => (slots - 2) * disk_height,
        5 => slots * disk_height,
        _ => (slots + 2) * disk_height,
    }
}

/// Drawn width of a disk.
pub fn disk_width(disk: Disk, disk_height: i32) -> i32 {
    i32::from(disk.weight()) * disk_height
}

/// Rectangle of a disk resting at `position` on the pole at `peg_x`.
///
/// `position` counts from 1 at the bottom. Disks hang left of the pole by
/// `weight * disk_step` rather than being centred on it.
pub fn disk_rect(config: &LayoutConfig, peg_x: i32, disk: Disk, position: usize) -> Rect {
    Rect::new(
        peg_x - i32::from(disk.weight()) * config.disk_step,
        config.base_line - position as i32 * config.disk_height,
        disk_width(disk, config.disk_height),
        config.disk_height,
    )
}

/// Clickable area of the peg at `peg_x`: as wide as the widest disk and as
/// tall as every slot.
pub fn peg_area(config: &LayoutConfig, peg_x: i32, slots: usize) -> Rect {
    let width = (slots as i32 - 1) * config.disk_height;
    Rect::new(
        peg_x - width / 2,
        peg_top(slots, config.disk_height),
        width,
        slots as i32 * config.disk_height,
    )
}

/// The drawn pole at `peg_x`.
pub fn pole_rect(config: &LayoutConfig, peg_x: i32, slots: usize) -> Rect {
    Rect::new(
        peg_x,
        peg_top(slots, config.disk_height),
        config.pole_width,
        slots as i32 * config.disk_height,
    )
}

/// A disk together with where to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskRect {
    /// The disk.
    pub disk: Disk,
    /// Where it is drawn.
    pub rect: Rect,
}

/// Geometry of a single peg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PegLayout {
    /// Which peg this is.
    pub peg: PegId,
    /// Clickable area.
    pub area: Rect,
    /// Drawn pole.
    pub pole: Rect,
    /// Baseline position of the peg's letter.
    pub label: Point,
    /// Resting disks, bottom first so the top disk is drawn last.
    pub disks: Vec<DiskRect>,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Pegs in X, Y, Z order.
    pub pegs: [PegLayout; 3],
    /// The disk being dragged, if a drag point is known.
    pub held: Option<DiskRect>,
    /// The wooden base.
    pub base: Rect,
}

impl Layout {
    /// Lays out the pegs and their disks.
    #[instrument(skip(config, pegs))]
    pub fn compute(
        config: &LayoutConfig,
        slots: usize,
        pegs: &[PegStack; 3],
        held: Option<(Disk, Point)>,
    ) -> Self {
        let pegs = PegId::ALL.map(|peg| {
            let x = config.peg_x[peg.index()];
            let disks = pegs[peg.index()]
                .disks()
                .iter()
                .enumerate()
                .map(|(i, &disk)| DiskRect {
                    disk,
                    rect: disk_rect(config, x, disk, i + 1),
                })
                .collect();
            PegLayout {
                peg,
                area: peg_area(config, x, slots),
                pole: pole_rect(config, x, slots),
                label: Point::new(x - 8, config.base_line + 50),
                disks,
            }
        });

        let held = held.map(|(disk, at)| DiskRect {
            disk,
            rect: Rect::new(
                at.x - config.grab_offset,
                at.y - config.grab_offset,
                disk_width(disk, config.disk_height),
                config.disk_height,
            ),
        });

        Self {
            pegs,
            held,
            base: config.base,
        }
    }

    /// Clickable areas in X, Y, Z order.
    pub fn peg_areas(&self) -> [Rect; 3] {
        [self.pegs[0].area, self.pegs[1].area, self.pegs[2].area]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peg_top_default_arm() {
        // 4 disks -> 5 slots
        assert_eq!(peg_top(5, 20), 140);
        // 3 disks -> 4 slots, still the last arm
        assert_eq!(peg_top(4, 20), 120);
    }

    #[test]
    fn test_peg_top_stepped_arms() {
        assert_eq!(peg_top(6, 20), 120);
        assert_eq!(peg_top(7, 20), 100);
        assert_eq!(peg_top(8, 20), 80);
        assert_eq!(peg_top(9, 20), 60);
    }

    #[test]
    fn test_peg_area_rests_on_base_line() {
        let config = LayoutConfig::default();
        for slots in 5..=9 {
            let area = peg_area(&config, 98, slots);
            assert_eq!(area.bottom(), config.base_line, "slots = {slots}");
        }
    }

    #[test]
    fn test_peg_area_width_centred() {
        let config = LayoutConfig::default();
        let area = peg_area(&config, 98, 5);
        assert_eq!(area, Rect::new(58, 140, 80, 100));
    }

    #[test]
    fn test_disk_rect_left_anchored() {
        let config = LayoutConfig::default();
        let rect = disk_rect(&config, 98, Disk::new(4), 1);
        assert_eq!(rect, Rect::new(58, 220, 80, 20));
        let rect = disk_rect(&config, 98, Disk::new(1), 4);
        assert_eq!(rect, Rect::new(88, 160, 20, 20));
    }

    #[test]
    fn test_held_disk_follows_pointer() {
        let config = LayoutConfig::default();
        let pegs = [PegStack::new(5), PegStack::new(5), PegStack::new(5)];
        let layout = Layout::compute(&config, 5, &pegs, Some((Disk::new(2), Point::new(100, 50))));
        let held = layout.held.unwrap();
        assert_eq!(held.rect, Rect::new(80, 30, 40, 20));
    }
}
