//! Eisenhower matrix quadrants.

use std::fmt;

use serde::{Serialize, Serializer};

/// One of the four urgency/importance buckets.
///
/// Ordering follows the quadrant number, so `DoFirst` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quadrant {
    /// Important and urgent.
    DoFirst,
    /// Important, not urgent.
    Schedule,
    /// Urgent, not important.
    Delegate,
    /// Neither.
    Eliminate,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::DoFirst,
        Quadrant::Schedule,
        Quadrant::Delegate,
        Quadrant::Eliminate,
    ];

    /// Classify from the two axis flags.
    pub fn classify(is_important: bool, is_urgent: bool) -> Self {
        match (is_important, is_urgent) {
            (true, true) => Quadrant::DoFirst,
            (true, false) => Quadrant::Schedule,
            (false, true) => Quadrant::Delegate,
            (false, false) => Quadrant::Eliminate,
        }
    }

    /// Quadrant number, 1 through 4.
    pub fn number(&self) -> u8 {
        match self {
            Quadrant::DoFirst => 1,
            Quadrant::Schedule => 2,
            Quadrant::Delegate => 3,
            Quadrant::Eliminate => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Quadrant::DoFirst),
            2 => Some(Quadrant::Schedule),
            3 => Some(Quadrant::Delegate),
            4 => Some(Quadrant::Eliminate),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::DoFirst => "Do First",
            Quadrant::Schedule => "Schedule",
            Quadrant::Delegate => "Delegate",
            Quadrant::Eliminate => "Eliminate",
        }
    }

    pub(crate) fn index(&self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{} {}", self.number(), self.label())
    }
}

// Serialized as its number; as a map key serde_json renders it "1".."4".
impl Serialize for Quadrant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}
