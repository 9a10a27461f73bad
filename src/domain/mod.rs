pub mod customer;
pub mod loan_record;
pub mod medium;
pub mod value_objects;

pub use customer::*;
pub use loan_record::*;
pub use medium::*;
pub use value_objects::*;
