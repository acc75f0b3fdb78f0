use evohub_domain::config::AppConfig;
use evohub_domain::registry::{FeatureSlice, InitializedSlice};
use fxhash::FxHashMap;
use std::any::TypeId;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[evohub_derive::evohub_error]
pub enum AppStateError {
    #[error("State missing feature slice{}: {message}", format_context(.context))]
    MissingSlice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Duplicate feature slice{}: {message}", format_context(.context))]
    DuplicateSlice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct AppStateInner {
    pub config: AppConfig,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Process-wide, read-only application state: configuration plus initialized slices.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    #[must_use]
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner.slices.get(&TypeId::of::<T>()).and_then(InitializedSlice::get::<T>)
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns [`AppStateError::MissingSlice`] if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, AppStateError> {
        self.get_slice::<T>().ok_or_else(|| AppStateError::MissingSlice {
            message: std::any::type_name::<T>().into(),
            context: None,
        })
    }

    /// Names of registered slices, sorted (for diagnostics).
    #[must_use]
    pub fn slice_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.inner.slices.values().map(|s| s.name).collect();
        names.sort_unstable();
        names
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Default)]
pub struct AppStateBuilder {
    config: Option<AppConfig>,
    slices: Vec<InitializedSlice>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.push(slice);
        self
    }

    /// Registers multiple slices at once.
    #[must_use]
    pub fn register_slices<I>(mut self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        self.slices.extend(slices);
        self
    }

    /// Freezes the state. A missing config falls back to defaults.
    ///
    /// # Errors
    /// Returns [`AppStateError::DuplicateSlice`] if two slices share a type.
    pub fn build(self) -> Result<AppState, AppStateError> {
        let mut slices = FxHashMap::default();
        for slice in self.slices {
            let name = slice.name;
            if slices.insert(slice.id, slice).is_some() {
                return Err(AppStateError::DuplicateSlice { message: name.into(), context: None });
            }
        }

        Ok(AppState {
            inner: Arc::new(AppStateInner { config: self.config.unwrap_or_default(), slices }),
        })
    }
}
