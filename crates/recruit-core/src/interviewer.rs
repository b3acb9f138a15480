use serde::{Deserialize, Serialize};

/// Department is free text, not a closed enum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interviewer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
}

impl Interviewer {
    pub fn new(id: String, name: String, email: String, role: String, department: String) -> Self {
        Self {
            id,
            name,
            email,
            role,
            department,
        }
    }
}
