pub mod flash;
pub mod persons;
pub mod site;
