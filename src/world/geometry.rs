use glam::Vec2;

/// Static wall geometry: an ordered run of vertices joined
/// `points[i] → points[i + 1]`.
///
/// The polyline is *closed* when the last vertex repeats the first; no
/// implicit closing edge is ever added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WallPolyline {
    points: Vec<Vec2>,
}

impl WallPolyline {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of source segments (`n − 1` for `n ≥ 1` vertices).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// True if the first and last vertices coincide (and there is at least
    /// one real segment).
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 2 && first == last,
            _ => false,
        }
    }

    /// Segments in source order.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}
