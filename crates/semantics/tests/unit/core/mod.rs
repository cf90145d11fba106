
/// The per-hart evaluation context.
pub mod hart;
