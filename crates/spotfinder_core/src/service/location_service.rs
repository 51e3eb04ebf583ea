//! Location use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for list, form and map callers.
//! - Validate raw form input before it reaches the repository.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::input::{InputError, LocationInput};
use crate::model::location::{Location, LocationId};
use crate::repo::location_repo::{LocationRepository, RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure of a form-driven write.
#[derive(Debug)]
pub enum ServiceError {
    Input(InputError),
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<InputError> for ServiceError {
    fn from(value: InputError) -> Self {
        Self::Input(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service wrapper for location operations.
pub struct LocationService<R: LocationRepository> {
    repo: R,
}

impl<R: LocationRepository> LocationService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a location as given and returns the assigned id.
    pub fn create_location(&self, location: &Location) -> RepoResult<LocationId> {
        self.repo.create_location(location)
    }

    pub fn list_locations(&self) -> RepoResult<Vec<Location>> {
        self.repo.list_locations()
    }

    pub fn search_locations(&self, text: &str) -> RepoResult<Vec<Location>> {
        self.repo.search_locations(text)
    }

    /// List screen behavior: blank text lists everything, anything else searches.
    pub fn list_or_search(&self, text: &str) -> RepoResult<Vec<Location>> {
        let text = text.trim();
        if text.is_empty() {
            return self.repo.list_locations();
        }
        self.repo.search_locations(text)
    }

    pub fn get_location(&self, id: LocationId) -> RepoResult<Option<Location>> {
        self.repo.get_location(id)
    }

    /// Returns rows affected; `0` means no record has `location.id`.
    pub fn update_location(&self, location: &Location) -> RepoResult<usize> {
        self.repo.update_location(location)
    }

    /// Returns rows affected; `0` means no record has `id`.
    pub fn delete_location(&self, id: LocationId) -> RepoResult<usize> {
        self.repo.delete_location(id)
    }

    /// Validates add-form input and creates the record.
    ///
    /// # Contract
    /// - Nothing is written when any field fails validation.
    /// - Returns the stored record with its assigned id.
    pub fn add_location(&self, input: &LocationInput) -> ServiceResult<Location> {
        let mut location = input.parse()?;
        location.id = self.repo.create_location(&location)?;
        Ok(location)
    }

    /// Validates edit-form input and overwrites the record with `id`.
    ///
    /// # Contract
    /// - Returns `Ok(None)` when no record has `id`.
    /// - The id is never changed by an edit.
    pub fn edit_location(
        &self,
        id: LocationId,
        input: &LocationInput,
    ) -> ServiceResult<Option<Location>> {
        let mut location = input.parse()?;
        location.id = id;
        if self.repo.update_location(&location)? == 0 {
            return Ok(None);
        }
        Ok(Some(location))
    }
}
