use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// A validated name/age pair, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub age: i64,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersonInputError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Invalid age. Please enter a number.")]
    InvalidAge,
}

impl NewPerson {
    // both fields must be present and non-empty; age must parse as an integer
    pub fn parse(name: Option<&str>, age: Option<&str>) -> Result<Self, PersonInputError> {
        let (name, age) = match (name, age) {
            (Some(name), Some(age)) if !name.is_empty() && !age.is_empty() => (name, age),
            _ => return Err(PersonInputError::MissingFields),
        };

        let age = age
            .trim()
            .parse::<i64>()
            .map_err(|_| PersonInputError::InvalidAge)?;

        Ok(Self {
            name: name.to_string(),
            age,
        })
    }
}
