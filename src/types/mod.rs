pub mod bounds;
pub mod location;
pub mod observation;
pub mod station;
