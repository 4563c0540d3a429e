//! Line type table entry

use super::TableEntry;
use crate::types::Handle;

/// A line type table entry
#[derive(Debug, Clone)]
pub struct LineType {
    /// Unique handle
    pub handle: Handle,
    /// Line type name
    pub name: String,
    /// Descriptive text shown to the user
    pub description: String,
    /// Total pattern length (group code 40)
    pub pattern_length: f64,
    /// Dash/dot/space element lengths (group code 49, one per element)
    pub pattern: Vec<f64>,
}

impl LineType {
    /// Create a new line type with an empty pattern
    pub fn new(name: impl Into<String>) -> Self {
        LineType {
            handle: Handle::NULL,
            name: name.into(),
            description: String::new(),
            pattern_length: 0.0,
            pattern: Vec::new(),
        }
    }

    /// A continuous (unbroken) line type
    pub fn continuous() -> Self {
        let mut lt = LineType::new("CONTINUOUS");
        lt.description = "Solid line".to_string();
        lt
    }

    /// Number of pattern elements
    pub fn element_count(&self) -> usize {
        self.pattern.len()
    }

    /// Is this a continuous line type (no pattern)?
    pub fn is_continuous(&self) -> bool {
        self.pattern.is_empty()
    }
}

impl TableEntry for LineType {
    fn handle(&self) -> Handle {
        self.handle
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuous() {
        let lt = LineType::continuous();
        assert_eq!(lt.name, "CONTINUOUS");
        assert!(lt.is_continuous());
    }

    #[test]
    fn test_pattern_elements() {
        let mut lt = LineType::new("DASHED");
        lt.pattern = vec![0.5, -0.25];
        lt.pattern_length = 0.75;
        assert_eq!(lt.element_count(), 2);
        assert!(!lt.is_continuous());
    }
}
