pub mod grid;
pub mod layout;
pub mod mapping;
pub mod markup;
pub mod palette;
