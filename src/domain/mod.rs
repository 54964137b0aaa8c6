pub mod company;
pub mod errors;
pub mod invoice;
pub mod ports;
