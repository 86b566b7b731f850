use crate::color::{self, RGBA};
use crate::error::{ensure_unit, Result};

/// Single anchor of a piecewise-linear curve.
/// `data_value` is the position in the [0,1] domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint<V> {
    pub data_value: f32,
    pub value: V,
}

impl<V> ControlPoint<V> {
    pub fn new(data_value: f32, value: V) -> ControlPoint<V> {
        ControlPoint { data_value, value }
    }
}

/// Value stored in a curve. Linear blending plus the domain check run
/// when a point carrying the value is inserted.
pub trait CurveValue: Copy {
    fn lerp(self, other: Self, t: f32) -> Self;

    fn check(self) -> Result<()>;
}

impl CurveValue for f32 {
    fn lerp(self, other: Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }

    /// Opacities live in [0,1].
    fn check(self) -> Result<()> {
        ensure_unit("alpha value", self)
    }
}

impl CurveValue for RGBA {
    fn lerp(self, other: Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }

    /// Colors are unrestricted, HDR values pass through.
    fn check(self) -> Result<()> {
        Ok(())
    }
}

/// Sorted sequence of control points over the [0,1] domain.
///
/// Points are kept ordered ascending by `data_value`; duplicates are
/// allowed and keep their insertion order. Sampling goes through
/// [`Curve::anchored`], which synthesizes endpoints so every query
/// position has a bracketing pair.
#[derive(Debug, Clone)]
pub struct Curve<V> {
    points: Vec<ControlPoint<V>>,
    empty_low: V,
    empty_high: V,
}

pub type ColorCurve = Curve<RGBA>;
pub type AlphaCurve = Curve<f32>;

impl Default for ColorCurve {
    /// Empty color curve, anchoring white at both ends.
    fn default() -> Self {
        Curve::new(color::white(), color::white())
    }
}

impl Default for AlphaCurve {
    /// Empty alpha curve, ramping 0 to 1.
    fn default() -> Self {
        Curve::new(0.0, 1.0)
    }
}

impl<V: CurveValue> Curve<V> {
    /// New curve with no points. The two values are what an empty
    /// curve anchors to at the ends of the domain.
    pub fn new(empty_low: V, empty_high: V) -> Curve<V> {
        Curve {
            points: Vec::new(),
            empty_low,
            empty_high,
        }
    }

    pub fn points(&self) -> &[ControlPoint<V>] {
        &self.points
    }

    /// Direct access for editors. Ordering is restored the next time
    /// the curve is anchored, not on mutation.
    pub fn points_mut(&mut self) -> &mut Vec<ControlPoint<V>> {
        &mut self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adds a point and restores ordering.
    /// Rejects positions or values outside their domain, leaving the
    /// curve unchanged.
    pub fn add(&mut self, point: ControlPoint<V>) -> Result<()> {
        ensure_unit("control point position", point.data_value)?;
        point.value.check()?;

        self.points.push(point);
        self.sort();
        Ok(())
    }

    /// Replaces the point at `index` with the same validation as
    /// [`Curve::add`]. Indices refer to the current sorted order and
    /// are not stable identities across mutations.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, point: ControlPoint<V>) -> Result<()> {
        ensure_unit("control point position", point.data_value)?;
        point.value.check()?;

        self.points[index] = point;
        self.sort();
        Ok(())
    }

    /// Removes the point at `index`. Later points shift down one index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> ControlPoint<V> {
        self.points.remove(index)
    }

    fn sort(&mut self) {
        self.points
            .sort_by(|a, b| a.data_value.total_cmp(&b.data_value));
    }

    /// Interpolated value at `t`. Flat beyond the outermost points.
    pub fn sample(&self, t: f32) -> V {
        self.anchored().sample(t)
    }

    /// Snapshot with synthesized endpoints, ready for sampling.
    ///
    /// The points are copied, re-sorted, and extended so the domain is
    /// covered: a point holding the first value lands at 0 if none sits
    /// at or below it, likewise at 1 with the last value. An empty
    /// curve anchors its construction-time end values.
    pub fn anchored(&self) -> AnchoredCurve<V> {
        let mut points = self.points.clone();
        points.sort_by(|a, b| a.data_value.total_cmp(&b.data_value));

        if points.is_empty() {
            points.push(ControlPoint::new(0.0, self.empty_low));
            points.push(ControlPoint::new(1.0, self.empty_high));
            return AnchoredCurve { points };
        }

        if points[0].data_value > 0.0 {
            let value = points[0].value;
            points.insert(0, ControlPoint::new(0.0, value));
        }
        if points[points.len() - 1].data_value < 1.0 {
            let value = points[points.len() - 1].value;
            points.push(ControlPoint::new(1.0, value));
        }

        AnchoredCurve { points }
    }
}

/// Curve snapshot after endpoint synthesis.
/// Always holds at least two points spanning the whole domain.
#[derive(Debug, Clone)]
pub struct AnchoredCurve<V> {
    points: Vec<ControlPoint<V>>,
}

impl<V: CurveValue> AnchoredCurve<V> {
    /// Interpolated value at `t`, searched from the left end.
    pub fn sample(&self, t: f32) -> V {
        self.sweep().value_at(t)
    }

    /// Cursor for evaluating the curve at non-decreasing positions.
    pub fn sweep(&self) -> CurveSweep<'_, V> {
        CurveSweep {
            points: &self.points,
            cursor: 0,
        }
    }
}

/// Monotonic evaluation cursor over an anchored curve.
///
/// Query positions must not decrease between `value_at` calls; the
/// cursor only ever advances. Evaluating a full texture row this way
/// costs O(width + points) instead of O(width * points).
pub struct CurveSweep<'a, V> {
    points: &'a [ControlPoint<V>],
    cursor: usize,
}

impl<V: CurveValue> CurveSweep<'_, V> {
    pub fn value_at(&mut self, t: f32) -> V {
        while self.cursor < self.points.len() - 2 && self.points[self.cursor + 1].data_value < t {
            self.cursor += 1;
        }

        let left = self.points[self.cursor];
        let right = self.points[self.cursor + 1];

        let span = right.data_value - left.data_value;
        // Coincident points bracket a zero span, the right value wins
        let frac = if span <= 0.0 {
            1.0
        } else {
            (t.clamp(left.data_value, right.data_value) - left.data_value) / span
        };

        left.value.lerp(right.value, frac)
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::error::Error;

    fn alpha_curve(stops: &[(f32, f32)]) -> AlphaCurve {
        let mut curve = AlphaCurve::default();
        for &(data_value, alpha) in stops {
            curve.add(ControlPoint::new(data_value, alpha)).unwrap();
        }
        curve
    }

    #[test]
    fn single_point_is_constant() {
        let curve = alpha_curve(&[(0.4, 0.7)]);

        for t in [0.0, 0.1, 0.4, 0.9, 1.0] {
            assert!((curve.sample(t) - 0.7).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn interpolates_between_stops() {
        let curve = alpha_curve(&[(0.0, 0.0), (1.0, 1.0)]);

        assert!((curve.sample(0.25) - 0.25).abs() < f32::EPSILON);
        assert!((curve.sample(0.5) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn flat_beyond_outermost_stops() {
        let curve = alpha_curve(&[(0.3, 0.2), (0.6, 0.8)]);

        // Anchoring extends the ends flat
        assert!((curve.sample(0.0) - 0.2).abs() < f32::EPSILON);
        assert!((curve.sample(0.15) - 0.2).abs() < f32::EPSILON);
        assert!((curve.sample(0.8) - 0.8).abs() < f32::EPSILON);
        assert!((curve.sample(1.0) - 0.8).abs() < f32::EPSILON);

        // And interpolates in between as given
        assert!((curve.sample(0.45) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_alpha_curve_ramps_up() {
        let curve = AlphaCurve::default();

        assert!(curve.sample(0.0).abs() < f32::EPSILON);
        assert!((curve.sample(0.5) - 0.5).abs() < f32::EPSILON);
        assert!((curve.sample(1.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_color_curve_is_white() {
        let curve = ColorCurve::default();

        for t in [0.0, 0.33, 1.0] {
            assert_eq!(curve.sample(t), color::white());
        }
    }

    #[test]
    fn add_keeps_points_sorted() {
        let curve = alpha_curve(&[(0.8, 0.1), (0.2, 0.2), (0.5, 0.3)]);

        let positions: Vec<f32> = curve.points().iter().map(|p| p.data_value).collect();
        assert_eq!(positions, vec![0.2, 0.5, 0.8]);
    }

    #[test]
    fn duplicate_positions_keep_insertion_order() {
        let curve = alpha_curve(&[(0.5, 0.1), (0.5, 0.9)]);

        assert!((curve.points()[0].value - 0.1).abs() < f32::EPSILON);
        assert!((curve.points()[1].value - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn coincident_stops_sample_to_the_later_one() {
        // A zero span bracket right at the domain start
        let curve = alpha_curve(&[(0.0, 0.2), (0.0, 0.8), (1.0, 1.0)]);

        let sampled = curve.sample(0.0);
        assert!((sampled - 0.8).abs() < f32::EPSILON);
        assert!(sampled.is_finite());
    }

    #[test]
    fn rejects_position_outside_domain() {
        let mut curve = AlphaCurve::default();

        let result = curve.add(ControlPoint::new(1.5, 0.5));

        assert!(matches!(
            result,
            Err(Error::Domain {
                what: "control point position",
                ..
            })
        ));
        assert!(curve.is_empty());
    }

    #[test]
    fn rejects_alpha_outside_domain() {
        let mut curve = AlphaCurve::default();

        assert!(curve.add(ControlPoint::new(0.5, -0.2)).is_err());
        assert!(curve.add(ControlPoint::new(0.5, f32::NAN)).is_err());
        assert!(curve.is_empty());
    }

    #[test]
    fn hdr_colors_pass_validation() {
        let mut curve = ColorCurve::default();

        let result = curve.add(ControlPoint::new(0.5, crate::color::new(2.0, 0.0, 0.0, 1.0)));

        assert!(result.is_ok());
    }

    #[test]
    fn set_revalidates_and_resorts() {
        let mut curve = alpha_curve(&[(0.2, 0.2), (0.8, 0.8)]);

        assert!(curve.set(0, ControlPoint::new(2.0, 0.5)).is_err());
        assert!((curve.points()[0].data_value - 0.2).abs() < f32::EPSILON);

        curve.set(0, ControlPoint::new(0.9, 0.5)).unwrap();
        let positions: Vec<f32> = curve.points().iter().map(|p| p.data_value).collect();
        assert_eq!(positions, vec![0.8, 0.9]);
    }

    #[test]
    fn remove_shifts_indices() {
        let mut curve = alpha_curve(&[(0.1, 0.1), (0.5, 0.5), (0.9, 0.9)]);

        let removed = curve.remove(1);

        assert!((removed.data_value - 0.5).abs() < f32::EPSILON);
        assert_eq!(curve.len(), 2);
        assert!((curve.points()[1].data_value - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn unsorted_direct_edits_are_anchored_sorted() {
        let mut curve = AlphaCurve::default();
        curve.points_mut().push(ControlPoint::new(0.9, 0.9));
        curve.points_mut().push(ControlPoint::new(0.1, 0.1));

        assert!((curve.sample(0.5) - 0.5).abs() < f32::EPSILON);
    }

    mod sweep {

        use super::*;

        #[test]
        fn sweep_matches_fresh_search() {
            let curve = alpha_curve(&[(0.1, 0.3), (0.4, 0.9), (0.7, 0.2)]);
            let anchored = curve.anchored();
            let mut sweep = anchored.sweep();

            let width = 512;
            for x in 0..width {
                let t = x as f32 / (width - 1) as f32;
                let swept = sweep.value_at(t);
                let naive = anchored.sample(t);
                assert!((swept - naive).abs() < f32::EPSILON);
            }
        }

        #[test]
        fn sweep_matches_fresh_search_fuzzed() {
            let rng = fastrand::Rng::new();
            rng.seed(71932);

            for _ in 0..200 {
                let mut curve = AlphaCurve::default();
                for _ in 0..rng.usize(0..12) {
                    curve
                        .add(ControlPoint::new(rng.f32(), rng.f32()))
                        .unwrap();
                }

                let anchored = curve.anchored();
                let mut sweep = anchored.sweep();

                let width = 128;
                for x in 0..width {
                    let t = x as f32 / (width - 1) as f32;
                    let swept = sweep.value_at(t);
                    let naive = anchored.sample(t);
                    assert!(
                        (swept - naive).abs() < f32::EPSILON,
                        "diverged at t={t}: sweep {swept}, naive {naive}"
                    );
                }
            }
        }

        #[test]
        fn sweep_colors_match_too() {
            let mut curve = ColorCurve::default();
            curve
                .add(ControlPoint::new(0.2, crate::color::new(1.0, 0.0, 0.0, 1.0)))
                .unwrap();
            curve
                .add(ControlPoint::new(0.8, crate::color::new(0.0, 0.0, 1.0, 1.0)))
                .unwrap();

            let anchored = curve.anchored();
            let mut sweep = anchored.sweep();

            for x in 0..256 {
                let t = x as f32 / 255.0;
                assert_eq!(sweep.value_at(t), anchored.sample(t));
            }
        }
    }
}
