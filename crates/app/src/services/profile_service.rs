//! Profile service — use-cases for managing configuration profiles.

use minimdm_domain::error::{ConflictError, MdmError};
use minimdm_domain::profile::Profile;

use crate::ports::ProfileRepository;

/// Application service for profile operations.
pub struct ProfileService<R> {
    repo: R,
}

impl<R: ProfileRepository> ProfileService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new profile after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MdmError::Validation`] if invariants fail,
    /// [`MdmError::Conflict`] if a profile with the same payload identifier
    /// already exists, or a storage error from the repository.
    #[tracing::instrument(skip(self, profile), fields(payload_identifier = %profile.payload_identifier))]
    pub async fn add_profile(&self, profile: Profile) -> Result<Profile, MdmError> {
        profile.validate()?;
        if self
            .repo
            .find_by_payload_identifier(&profile.payload_identifier)
            .await?
            .is_some()
        {
            return Err(ConflictError::ProfileExists {
                payload_identifier: profile.payload_identifier,
            }
            .into());
        }
        self.repo.create(profile).await
    }

    /// List all profiles.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_profiles(&self) -> Result<Vec<Profile>, MdmError> {
        self.repo.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimdm_domain::error::ValidationError;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryProfileRepo {
        store: Mutex<Vec<Profile>>,
    }

    impl ProfileRepository for InMemoryProfileRepo {
        fn create(&self, profile: Profile) -> impl Future<Output = Result<Profile, MdmError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.push(profile.clone());
            async { Ok(profile) }
        }

        fn find_by_payload_identifier(
            &self,
            payload_identifier: &str,
        ) -> impl Future<Output = Result<Option<Profile>, MdmError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store
                .iter()
                .find(|p| p.payload_identifier == payload_identifier)
                .cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Profile>, MdmError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.clone();
            async { Ok(result) }
        }
    }

    fn make_service() -> ProfileService<InMemoryProfileRepo> {
        ProfileService::new(InMemoryProfileRepo::default())
    }

    fn profile(identifier: &str) -> Profile {
        Profile::builder()
            .payload_identifier(identifier)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_add_profile_when_identifier_is_new() {
        let service = make_service();
        let created = service
            .add_profile(profile("com.example.wifi"))
            .await
            .unwrap();
        assert_eq!(created.payload_identifier, "com.example.wifi");
    }

    #[tokio::test]
    async fn should_return_conflict_when_identifier_already_exists() {
        let service = make_service();
        service
            .add_profile(profile("com.example.wifi"))
            .await
            .unwrap();

        let result = service.add_profile(profile("com.example.wifi")).await;
        assert!(matches!(
            result,
            Err(MdmError::Conflict(ConflictError::ProfileExists { ref payload_identifier }))
                if payload_identifier == "com.example.wifi"
        ));
    }

    #[tokio::test]
    async fn should_return_validation_error_when_identifier_is_blank() {
        let service = make_service();
        let mut invalid = profile("com.example.wifi");
        invalid.payload_identifier = " ".to_string();

        let result = service.add_profile(invalid).await;
        assert!(matches!(
            result,
            Err(MdmError::Validation(ValidationError::EmptyPayloadIdentifier))
        ));
    }

    #[tokio::test]
    async fn should_list_all_profiles() {
        let service = make_service();
        assert!(service.list_profiles().await.unwrap().is_empty());

        service.add_profile(profile("com.example.a")).await.unwrap();
        service.add_profile(profile("com.example.b")).await.unwrap();

        let all = service.list_profiles().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
