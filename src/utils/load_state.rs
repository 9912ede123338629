/// Result of an async load as seen by a view
///
/// Three states only: the value is on its way, it arrived, or it failed.
/// Views take this as a prop instead of reading loader output from context,
/// so every state can be rendered and tested directly.
///
/// # Examples
///
/// ```ignore
/// let resource = use_resource(move || async move { client.load().await });
/// let state = LoadState::from_resource(resource.read_unchecked().as_ref());
///
/// rsx! { GithubCard { state } }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T, E> {
    /// Request in flight
    Loading,

    /// Value arrived
    Loaded(T),

    /// Request failed
    Failed(E),
}

impl<T, E> LoadState<T, E> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }
}

impl<T: Clone, E: Clone> LoadState<T, E> {
    /// Build from the value of a `use_resource` (None while pending)
    pub fn from_resource(value: Option<&Result<T, E>>) -> Self {
        match value {
            None => LoadState::Loading,
            Some(Ok(data)) => LoadState::Loaded(data.clone()),
            Some(Err(err)) => LoadState::Failed(err.clone()),
        }
    }
}
