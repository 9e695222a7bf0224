/// Lifecycle of one fetch as seen by the views.
///
/// `Idle` only occurs for dependent fetches whose input is not available yet,
/// e.g. the rocket card before the launch itself has arrived.
#[derive(Clone, Debug, PartialEq)]
pub enum Query<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T: Clone> Query<T> {
    /// Maps the read of a plain `use_resource` into a query state.
    pub fn from_resource(state: Option<&Result<T, String>>) -> Self {
        match state {
            None => Self::Loading,
            Some(Ok(value)) => Self::Ready(value.clone()),
            Some(Err(message)) => Self::Failed(message.clone()),
        }
    }

    /// Maps the read of a dependent `use_resource` into a query state.
    ///
    /// The resource's future resolves to `None` while its input is missing,
    /// which keeps the dependent branch `Idle` instead of spinning forever.
    pub fn from_dependent(state: Option<&Option<Result<T, String>>>) -> Self {
        match state {
            None => Self::Loading,
            Some(None) => Self::Idle,
            Some(Some(Ok(value))) => Self::Ready(value.clone()),
            Some(Some(Err(message))) => Self::Failed(message.clone()),
        }
    }
}

impl<T> Query<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}
