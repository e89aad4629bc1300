pub mod layout;
pub mod outcome;
pub mod text;
