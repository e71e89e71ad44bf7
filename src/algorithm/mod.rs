/// Recent-result history rejecting short-term repeats
pub mod cache;
/// Name factory and the generated character value
pub mod factory;
/// Injectable randomness provider
pub mod random;
/// Weighted random substring sampling
pub mod substring;
/// Extend, cut and mirror name strategies
pub mod transform;
