pub mod delivery;
pub mod locations;
pub mod ordering;
