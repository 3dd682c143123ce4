/// The outcome of an acquisition call.
///
/// Callers can tell real upstream data from a synthetic placeholder without
/// guessing from a bare nullable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// Data returned by an upstream endpoint (possibly served from the response cache).
    Live(T),
    /// Deterministic synthetic data, produced because every upstream source failed.
    Fallback(T),
    /// Nothing is available: fallback is disabled, the request was cancelled, or the
    /// input was rejected before any request was made.
    Unavailable,
}

impl<T> Fetched<T> {
    /// The carried data, live or synthetic.
    pub fn data(&self) -> Option<&T> {
        match self {
            Fetched::Live(data) | Fetched::Fallback(data) => Some(data),
            Fetched::Unavailable => None,
        }
    }

    /// Consumes the outcome, returning the data if there is any.
    pub fn into_data(self) -> Option<T> {
        match self {
            Fetched::Live(data) | Fetched::Fallback(data) => Some(data),
            Fetched::Unavailable => None,
        }
    }

    /// Whether the data came from an upstream endpoint.
    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }

    /// Whether the data is the synthetic stand-in.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Fetched::Fallback(_))
    }

    /// Whether there is no data at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Fetched::Unavailable)
    }

    /// Transforms the data while keeping the tag.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Fetched<U> {
        match self {
            Fetched::Live(data) => Fetched::Live(f(data)),
            Fetched::Fallback(data) => Fetched::Fallback(f(data)),
            Fetched::Unavailable => Fetched::Unavailable,
        }
    }
}
