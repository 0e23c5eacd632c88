/// Marker trait for view state.
///
/// `PartialEq` lets callers skip redraws when a reduction changed nothing;
/// `Default` lets the owner `mem::take` the state into the reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
