//! Drawing header variables

use indexmap::IndexMap;

/// One header variable - the group records that followed its code-9 name
/// line, kept verbatim as (code, value) entries.
#[derive(Debug, Clone, Default)]
pub struct HeaderVariable {
    values: Vec<(i32, String)>,
}

impl HeaderVariable {
    /// Create an empty variable
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Append a (code, value) entry
    pub fn push(&mut self, code: i32, value: impl Into<String>) {
        self.values.push((code, value.into()));
    }

    /// Get the value stored under a group code
    pub fn get(&self, code: i32) -> Option<&str> {
        self.values
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, v)| v.as_str())
    }

    /// Get the value under a group code parsed as f64
    pub fn get_f64(&self, code: i32) -> Option<f64> {
        self.get(code).and_then(|v| v.trim().parse().ok())
    }

    /// Get the value under a group code parsed as i32
    pub fn get_i32(&self, code: i32) -> Option<i32> {
        self.get(code).and_then(|v| v.trim().parse().ok())
    }

    /// All (code, value) entries in stream order
    pub fn entries(&self) -> &[(i32, String)] {
        &self.values
    }
}

/// The drawing header - a generic store of `$NAME` variables in stream
/// order, with typed accessors for the variables the parser itself cares
/// about.
#[derive(Debug, Clone, Default)]
pub struct Header {
    /// All variables, keyed by `$NAME`
    pub variables: IndexMap<String, HeaderVariable>,
}

impl Header {
    /// Create an empty header
    pub fn new() -> Self {
        Self {
            variables: IndexMap::new(),
        }
    }

    /// Get a variable by name (e.g. `"$ACADVER"`)
    pub fn variable(&self, name: &str) -> Option<&HeaderVariable> {
        self.variables.get(name)
    }

    /// Get or create a variable for in-place population
    pub fn variable_mut(&mut self, name: &str) -> &mut HeaderVariable {
        self.variables.entry(name.to_string()).or_default()
    }

    /// The drawing version string (`$ACADVER`, code 1), if present
    pub fn version(&self) -> Option<&str> {
        self.variable("$ACADVER").and_then(|v| v.get(1))
    }

    /// The declared code page (`$DWGCODEPAGE`, code 3), if present
    pub fn code_page(&self) -> Option<&str> {
        self.variable("$DWGCODEPAGE").and_then(|v| v.get(3))
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Is the header empty?
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
