use crate::graphics::{PixelPos, Rect};

/// Bounding box of every point touched since the gesture began.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirtyRegion {
    bounds: Option<Rect>,
}

impl DirtyRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.bounds = None;
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Non-finite points are dropped, they would poison every later comparison.
    pub fn expand(&mut self, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            log::debug!("ignoring non-finite point {x},{y}");
            return;
        }

        let bounds = self
            .bounds
            .get_or_insert_with(|| Rect::from_point(PixelPos { x, y }));

        if x < bounds.left {
            bounds.left = x;
        } else if x > bounds.right {
            bounds.right = x;
        }

        if y < bounds.top {
            bounds.top = y;
        } else if y > bounds.bottom {
            bounds.bottom = y;
        }
    }

    pub fn query_expanded_by(&self, margin: f32) -> Option<Rect> {
        self.bounds.map(|bounds| bounds.outset(margin))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn min_max(points: &[(f32, f32)]) -> Rect {
        let mut rect = Rect::new(
            f32::INFINITY,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::NEG_INFINITY,
        );

        for &(x, y) in points {
            rect.left = rect.left.min(x);
            rect.top = rect.top.min(y);
            rect.right = rect.right.max(x);
            rect.bottom = rect.bottom.max(y);
        }

        rect
    }

    #[test]
    fn empty_after_reset() {
        let mut dirty = DirtyRegion::new();
        assert!(dirty.is_empty());
        dirty.expand(1., 1.);
        assert!(!dirty.is_empty());
        dirty.reset();
        assert_eq!(dirty.query_expanded_by(5.), None);
    }

    #[test]
    fn matches_min_max() {
        // deterministic scatter, plenty of sign changes and repeats
        let mut seed: u32 = 0x2545_f491;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            (seed % 2001) as f32 / 10. - 100.
        };

        for len in 1..40 {
            let points = (0..len).map(|_| (next(), next())).collect::<Vec<_>>();

            let mut dirty = DirtyRegion::new();
            points.iter().for_each(|&(x, y)| dirty.expand(x, y));

            assert_eq!(dirty.bounds(), Some(min_max(&points)), "{points:?}");
        }
    }

    #[test]
    fn monotonic_within_gesture() {
        let mut dirty = DirtyRegion::new();
        dirty.expand(10., 10.);
        dirty.expand(12., 10.);
        dirty.expand(15., 12.);
        let before = dirty.bounds().unwrap();

        dirty.expand(11., 11.);
        assert_eq!(dirty.bounds(), Some(before));
        assert_eq!(before, Rect::new(10., 10., 15., 12.));
        assert_eq!(
            dirty.query_expanded_by(5.),
            Some(Rect::new(5., 5., 20., 17.))
        );
    }

    #[test]
    fn non_finite_points_skipped() {
        let mut dirty = DirtyRegion::new();
        dirty.expand(f32::NAN, 1.);
        dirty.expand(f32::INFINITY, 2.);
        dirty.expand(3., f32::NEG_INFINITY);
        assert!(dirty.is_empty());

        dirty.expand(1., 1.);
        dirty.expand(f32::NAN, 5.);
        dirty.expand(4., 3.);
        assert_eq!(dirty.bounds(), Some(Rect::new(1., 1., 4., 3.)));
    }
}
