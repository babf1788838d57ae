use super::WorkerId;

/// Weekly hours a newly added worker starts with.
pub const DEFAULT_BASE_HOURS: f64 = 40.0;

/// Someone at the bench. Projects reference workers by id only.
#[derive(Debug, Clone, PartialEq)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    /// Contracted weekly hours.
    pub base_hours: f64,
    /// Adjustable weekly overtime on top of `base_hours`.
    pub extra_hours: f64,
}

impl Worker {
    pub fn new(id: impl Into<WorkerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_hours: DEFAULT_BASE_HOURS,
            extra_hours: 0.0,
        }
    }

    pub fn with_hours(mut self, base_hours: f64, extra_hours: f64) -> Self {
        self.base_hours = base_hours;
        self.extra_hours = extra_hours;
        self
    }

    /// Weekly capacity in hours.
    pub fn capacity(&self) -> f64 {
        self.base_hours + self.extra_hours
    }
}
