pub mod customer;
pub mod sheet;
