use crate::domain::{NewPerson, Person, PersonInputError};
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Debug, Eq, PartialEq, Clone)]
pub struct DbPerson {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<DbPerson> for Person {
    fn from(db_person: DbPerson) -> Self {
        Person {
            id: db_person.id,
            name: db_person.name,
            age: db_person.age,
        }
    }
}

// field order here is the key order of the API output
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct JsonPerson {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<&Person> for JsonPerson {
    fn from(person: &Person) -> Self {
        JsonPerson {
            id: person.id,
            name: person.name.to_owned(),
            age: person.age,
        }
    }
}

/// Urlencoded body of the add and edit forms.
///
/// Both fields are optional so a missing field surfaces as a validation notice
/// rather than an extractor rejection.
#[derive(Deserialize, Debug, Default)]
pub struct PersonForm {
    pub name: Option<String>,
    pub age: Option<String>,
}

impl PersonForm {
    pub fn validate(&self) -> Result<NewPerson, PersonInputError> {
        NewPerson::parse(self.name.as_deref(), self.age.as_deref())
    }
}
