//! Bounded history of trail segments.
//!
//! Every frame the integrator produces one new segment (previous position to
//! new position). The trail keeps the most recent `capacity` of them in
//! insertion order and drops the oldest once full, so memory use is fixed for
//! the lifetime of the viewer.

use std::collections::VecDeque;

use glam::DVec3;

/// One rendered trail edge between two consecutive particle positions.
///
/// The length is computed once at construction and reused by the color
/// mapping every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: DVec3,
    pub p2: DVec3,
    pub length: f64,
}

impl Segment {
    pub fn new(p1: DVec3, p2: DVec3) -> Self {
        Self {
            p1,
            p2,
            length: p1.distance(p2),
        }
    }
}

/// Fixed-capacity FIFO of segments, oldest first.
///
/// Capacity must be at least 1; the [`Viewer`](crate::Viewer) builder
/// enforces this at configuration time. With capacity 1 every push evicts
/// the previous segment.
#[derive(Debug)]
pub struct TrailBuffer {
    segments: VecDeque<Segment>,
    capacity: usize,
}

impl TrailBuffer {
    /// Create an empty trail holding at most `capacity` segments.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "trail capacity must be at least 1");
        Self {
            segments: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append the segment from `p1` to `p2`, evicting the oldest segment if
    /// the trail is already full.
    pub fn push(&mut self, p1: DVec3, p2: DVec3) {
        if self.segments.len() == self.capacity {
            self.segments.pop_front();
        }
        self.segments.push_back(Segment::new(p1, p2));
    }

    /// Drop every segment. The next push behaves as on a fresh trail.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Iterate live segments, oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> DVec3 {
        DVec3::new(i as f64, 0.0, 0.0)
    }

    #[test]
    fn test_segment_length() {
        let s = Segment::new(DVec3::new(1.0, 2.0, 3.0), DVec3::new(4.0, 6.0, 3.0));
        assert_eq!(s.length, 5.0);
    }

    #[test]
    fn test_capacity_bound_and_fifo_order() {
        let capacity = 4;
        let mut trail = TrailBuffer::new(capacity);

        for i in 0..10 {
            trail.push(p(i), p(i + 1));
            assert!(trail.len() <= capacity);
        }
        assert_eq!(trail.len(), capacity);

        // After 10 pushes the survivors are pushes #6..#9, in insertion order
        let firsts: Vec<f64> = trail.iter().map(|s| s.p1.x).collect();
        assert_eq!(firsts, vec![6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_capacity_one_always_evicts() {
        let mut trail = TrailBuffer::new(1);
        trail.push(p(0), p(1));
        trail.push(p(1), p(2));
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.iter().next().unwrap().p1.x, 1.0);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut trail = TrailBuffer::new(3);
        trail.push(p(0), p(1));
        trail.push(p(1), p(2));

        trail.clear();
        assert!(trail.is_empty());
        trail.clear();
        assert!(trail.is_empty());

        // Push after clear behaves like a fresh buffer
        trail.push(p(5), p(6));
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.iter().next().unwrap().p1.x, 5.0);
    }

    #[test]
    fn test_partial_fill_keeps_everything() {
        let mut trail = TrailBuffer::new(100);
        for i in 0..7 {
            trail.push(p(i), p(i + 1));
        }
        assert_eq!(trail.len(), 7);
        let firsts: Vec<f64> = trail.iter().map(|s| s.p1.x).collect();
        assert_eq!(firsts, (0..7).map(|i| i as f64).collect::<Vec<_>>());
    }
}
