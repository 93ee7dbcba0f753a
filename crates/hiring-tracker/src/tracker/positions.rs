use super::domain::{Position, RecordKind};
use super::error::{TrackerError, TrackerResult};
use super::fields::Title;

/// Ordered set of positions with unique titles.
///
/// Adding and replacing compare by title; removal requires every field to match.
/// Cascading into applicants is not this type's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionBook {
    positions: Vec<Position>,
}

impl PositionBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.positions
            .iter()
            .any(|existing| existing.is_same_position(position))
    }

    pub fn contains_title(&self, title: &Title) -> bool {
        self.positions.iter().any(|existing| existing.has_title(title))
    }

    pub fn find_by_title(&self, title: &Title) -> Option<&Position> {
        self.positions.iter().find(|existing| existing.has_title(title))
    }

    pub fn get_by_title(&self, title: &Title) -> TrackerResult<&Position> {
        self.find_by_title(title)
            .ok_or_else(|| TrackerError::not_found(RecordKind::Position, title.as_str()))
    }

    pub fn add(&mut self, position: Position) -> TrackerResult<()> {
        if self.contains(&position) {
            return Err(TrackerError::duplicate(
                RecordKind::Position,
                position.title.as_str(),
            ));
        }
        self.positions.push(position);
        Ok(())
    }

    /// Replace `target` in place, keeping its slot in the ordering.
    pub fn set(&mut self, target: &Position, replacement: Position) -> TrackerResult<()> {
        let index = self
            .positions
            .iter()
            .position(|existing| existing == target)
            .ok_or_else(|| TrackerError::not_found(RecordKind::Position, target.title.as_str()))?;

        if !target.is_same_position(&replacement) && self.contains(&replacement) {
            return Err(TrackerError::duplicate(
                RecordKind::Position,
                replacement.title.as_str(),
            ));
        }

        self.positions[index] = replacement;
        Ok(())
    }

    pub fn remove(&mut self, position: &Position) -> TrackerResult<Position> {
        let index = self
            .positions
            .iter()
            .position(|existing| existing == position)
            .ok_or_else(|| {
                TrackerError::not_found(RecordKind::Position, position.title.as_str())
            })?;
        Ok(self.positions.remove(index))
    }

    /// Replace the whole book; fails without changes if `positions` repeats a title.
    pub fn reset(&mut self, positions: Vec<Position>) -> TrackerResult<()> {
        if let Some(duplicate) = first_duplicate(&positions) {
            return Err(TrackerError::duplicate(
                RecordKind::Position,
                duplicate.title.as_str(),
            ));
        }
        self.positions = positions;
        Ok(())
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.positions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl<'a> IntoIterator for &'a PositionBook {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

fn first_duplicate(positions: &[Position]) -> Option<&Position> {
    positions.iter().enumerate().find_map(|(index, position)| {
        positions[index + 1..]
            .iter()
            .find(|other| other.is_same_position(position))
    })
}
