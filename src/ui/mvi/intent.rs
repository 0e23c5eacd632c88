/// Marker trait for intents.
///
/// An intent is anything that may change view state: a key press routed
/// through an input adapter, a fired timer, or an observer callback.
pub trait Intent: Send + 'static {}
