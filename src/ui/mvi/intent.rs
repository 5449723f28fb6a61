//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (taps, selections, dismissals)
/// - Effect results (repository responses, loaded persistence flags)
/// - Navigation events (stack pushes and pops)
///
/// Intents are processed by reducers to produce new states and effects.
pub trait Intent: std::fmt::Debug + Send + 'static {}
