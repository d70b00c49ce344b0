pub mod navigation;
pub mod socket;
