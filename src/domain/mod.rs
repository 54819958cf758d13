pub mod person;

pub use person::{NewPerson, Person, PersonInputError};
