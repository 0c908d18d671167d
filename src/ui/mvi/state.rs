/// Marker for reducer-owned state.
///
/// `Default` is the state a screen starts in. `Clone` and `PartialEq` let
/// callers snapshot a state and compare it after a transition.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
