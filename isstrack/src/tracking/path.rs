//! Append-only history of observed positions.

use super::state::Position;

/// Ordered history of observations for one tracking session.
///
/// Insertion order is observation order. Entries are never reordered,
/// deduplicated or removed.
#[derive(Debug, Default)]
pub struct PathAccumulator {
    positions: Vec<Position>,
}

impl PathAccumulator {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a position to the end of the path.
    pub fn append(&mut self, position: Position) {
        self.positions.push(position);
    }

    /// Most recently appended position.
    pub fn current(&self) -> Option<&Position> {
        self.positions.last()
    }

    /// Owned snapshot of the full path in observation order.
    pub fn all(&self) -> Vec<Position> {
        self.positions.clone()
    }

    /// Number of observations recorded.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if nothing has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(latitude: f64, timestamp: i64) -> Position {
        Position::new(latitude, 0.0, timestamp).unwrap()
    }

    #[test]
    fn test_new_path_is_empty() {
        let path = PathAccumulator::new();

        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert!(path.current().is_none());
        assert!(path.all().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut path = PathAccumulator::new();
        path.append(fix(1.0, 10));
        path.append(fix(2.0, 20));
        path.append(fix(3.0, 30));

        let all = path.all();
        assert_eq!(all, vec![fix(1.0, 10), fix(2.0, 20), fix(3.0, 30)]);
        assert_eq!(path.current(), Some(&fix(3.0, 30)));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut path = PathAccumulator::new();
        path.append(fix(5.0, 10));
        path.append(fix(5.0, 10));

        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut path = PathAccumulator::new();
        path.append(fix(1.0, 10));

        let mut snapshot = path.all();
        snapshot.clear();
        snapshot.push(fix(9.0, 90));

        assert_eq!(path.len(), 1);
        assert_eq!(path.current(), Some(&fix(1.0, 10)));
    }
}
