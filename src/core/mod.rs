pub mod catalog;
pub mod journey;
pub mod predicate;
pub mod validate;
