// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod domain_name;

pub use counts::OccurrenceCount;
pub use domain_name::DomainName;
