
/// AMO read-modify-write semantics.
pub mod atomic;
