//! Claimed-area ledger
//!
//! Append-only list of committed regions. The claimed percentage is a full
//! re-sum on every commit; commits happen at human pace so that is cheap.

use glam::Vec2;

use super::geometry::{Rect, polygon_area};

/// A committed, permanently filled polygon
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimedRegion {
    vertices: Vec<Vec2>,
    area: f32,
    bounds: Rect,
}

impl ClaimedRegion {
    /// Build a region from a closed outline. Returns None for fewer than
    /// three vertices.
    pub fn new(vertices: Vec<Vec2>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let bounds = Rect::from_points(&vertices)?;
        let area = polygon_area(&vertices);
        Some(Self {
            vertices,
            area,
            bounds,
        })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn area(&self) -> f32 {
        self.area
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }
}

/// Result of offering a region to the ledger
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClaimOutcome {
    /// Region appended; `total_percent` is the new claimed percentage
    Committed { percent: f32, total_percent: f32 },
    /// Region smaller than the minimum claim and discarded
    Rejected { percent: f32 },
}

/// All claimed regions plus the derived claimed percentage
#[derive(Debug, Clone)]
pub struct Ledger {
    regions: Vec<ClaimedRegion>,
    total_area: f32,
    claimed_percent: f32,
}

impl Ledger {
    pub fn new(total_area: f32) -> Self {
        Self {
            regions: Vec::new(),
            total_area,
            claimed_percent: 0.0,
        }
    }

    /// Commit `region` if it covers at least `min_percent` of the playable
    /// area
    pub fn offer(&mut self, region: ClaimedRegion, min_percent: u32) -> ClaimOutcome {
        let percent = self.percent_of_total(region.area());
        // Exact comparison: area * 100 >= min * total
        let accepted = f64::from(region.area()) * 100.0
            >= f64::from(min_percent) * f64::from(self.total_area);
        if !accepted {
            return ClaimOutcome::Rejected { percent };
        }

        self.regions.push(region);
        let claimed: f64 = self.regions.iter().map(|r| f64::from(r.area())).sum();
        self.claimed_percent = (claimed / f64::from(self.total_area) * 100.0) as f32;

        ClaimOutcome::Committed {
            percent,
            total_percent: self.claimed_percent,
        }
    }

    /// Share of the playable area covered by `area`, in percent
    pub fn percent_of_total(&self, area: f32) -> f32 {
        (f64::from(area) / f64::from(self.total_area) * 100.0) as f32
    }

    /// Claimed share of the playable area, in percent
    pub fn claimed_percent(&self) -> f32 {
        self.claimed_percent
    }

    pub fn total_area(&self) -> f32 {
        self.total_area
    }

    pub fn regions(&self) -> &[ClaimedRegion] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOTAL: f32 = 780.0 * 580.0;

    /// Axis-aligned rectangle region of the given size anchored at the
    /// arena's top-left corner
    fn rect_region(w: f32, h: f32) -> ClaimedRegion {
        ClaimedRegion::new(vec![
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0 + w, 10.0),
            Vec2::new(10.0 + w, 10.0 + h),
            Vec2::new(10.0, 10.0 + h),
        ])
        .unwrap()
    }

    #[test]
    fn test_region_needs_three_vertices() {
        assert!(ClaimedRegion::new(vec![Vec2::ZERO, Vec2::ONE]).is_none());
        let r = rect_region(100.0, 50.0);
        assert_eq!(r.area(), 5000.0);
        assert_eq!(r.bounds().max, Vec2::new(110.0, 60.0));
    }

    #[test]
    fn test_commit_large_region() {
        let mut ledger = Ledger::new(TOTAL);
        // 250 x 200 = 50,000
        let outcome = ledger.offer(rect_region(250.0, 200.0), 5);
        match outcome {
            ClaimOutcome::Committed { total_percent, .. } => {
                assert!((total_percent - 11.052).abs() < 0.01);
            }
            ClaimOutcome::Rejected { .. } => panic!("50,000 should be committed"),
        }
        assert_eq!(ledger.len(), 1);
        assert!((ledger.claimed_percent() - 11.052).abs() < 0.01);
    }

    #[test]
    fn test_reject_small_region() {
        let mut ledger = Ledger::new(TOTAL);
        // 100 x 100 = 10,000 (~2.2%)
        let outcome = ledger.offer(rect_region(100.0, 100.0), 5);
        assert!(matches!(outcome, ClaimOutcome::Rejected { percent } if (percent - 2.21).abs() < 0.01));
        assert!(ledger.is_empty());
        assert_eq!(ledger.claimed_percent(), 0.0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // 5% of 452,400 = 22,620 = 78 x 290
        let mut ledger = Ledger::new(TOTAL);
        assert!(matches!(
            ledger.offer(rect_region(78.0, 290.0), 5),
            ClaimOutcome::Committed { .. }
        ));
        // One unit narrower falls below
        assert!(matches!(
            ledger.offer(rect_region(77.0, 290.0), 5),
            ClaimOutcome::Rejected { .. }
        ));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_regions_accumulate_without_merging() {
        let mut ledger = Ledger::new(TOTAL);
        ledger.offer(rect_region(250.0, 200.0), 5);
        // Same rectangle again counts twice
        ledger.offer(rect_region(250.0, 200.0), 5);
        assert_eq!(ledger.len(), 2);
        assert!((ledger.claimed_percent() - 22.104).abs() < 0.01);
    }
}
