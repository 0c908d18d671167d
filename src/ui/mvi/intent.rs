/// Marker for anything a reducer accepts: key presses, clicks, and the
/// result of the initial fetch.
pub trait Intent: Send + 'static {}
