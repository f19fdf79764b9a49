// Person domain model
pub type PersonId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(id: PersonId, first_name: String, last_name: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
        }
    }

    /// Series label, e.g. "Gretzky, Wayne"
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub person: Person,
    #[allow(dead_code)]
    pub jersey_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let person = Person::new(8478402, "Connor".to_string(), "McDavid".to_string());
        assert_eq!(person.display_name(), "McDavid, Connor");
    }
}
