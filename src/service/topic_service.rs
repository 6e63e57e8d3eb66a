//! Topic lifecycle coordinator.
//!
//! Keeps the managed Pub/Sub service and the topic registry consistent
//! without a distributed transaction. Both lifecycle operations run the
//! gateway step first and the registry step last:
//!
//! - **create**: ensure the remote topic, then insert the record. The
//!   insert is authoritative; if it fails, the remote topic this call
//!   created is deleted again (the single compensating action).
//! - **delete**: remove the remote topic, then the record. A record is
//!   never removed while its remote topic may still exist.
//!
//! Concurrent requests are serialized by the registry's unique and
//! foreign-key constraints; no in-process lock is taken. Each external call
//! is attempted once and compensation failures are never retried.

use std::sync::Arc;

use crate::cache::{CacheInvalidator, InvalidationError, TopicReadCache};
use crate::domain::{Topic, TopicId, TopicName};
use crate::error::ServiceError;
use crate::persistence::{Page, RegistryError, TopicRegistry};
use crate::pubsub::{CreateOutcome, TopicGateway};

use super::classify;

/// Orchestration layer for all topic operations.
///
/// Holds its collaborators as injected trait objects; it owns no state of
/// its own besides the read cache handle.
#[derive(Debug, Clone)]
pub struct TopicService {
    gateway: Arc<dyn TopicGateway>,
    registry: Arc<dyn TopicRegistry>,
    cache: TopicReadCache,
    extra_invalidator: Option<Arc<dyn CacheInvalidator>>,
}

impl TopicService {
    /// Creates a service whose read cache receives the invalidation signal.
    #[must_use]
    pub fn new(
        gateway: Arc<dyn TopicGateway>,
        registry: Arc<dyn TopicRegistry>,
        cache: TopicReadCache,
    ) -> Self {
        Self {
            gateway,
            registry,
            cache,
            extra_invalidator: None,
        }
    }

    /// Forwards the invalidation signal to `invalidator` as well, after the
    /// service's own read cache has been flushed.
    #[must_use]
    pub fn with_invalidator(mut self, invalidator: Arc<dyn CacheInvalidator>) -> Self {
        self.extra_invalidator = Some(invalidator);
        self
    }

    async fn invalidate(&self) -> Result<(), InvalidationError> {
        self.cache.invalidate_all().await?;
        if let Some(extra) = &self.extra_invalidator {
            extra.invalidate_all().await?;
        }
        Ok(())
    }

    /// Returns one page of registered topics.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Internal`] if the registry cannot be read.
    pub async fn list_topics(&self, page: Page) -> Result<Arc<Vec<Topic>>, ServiceError> {
        if let Some(cached) = self.cache.get_page(page).await {
            return Ok(cached);
        }
        let epoch = self.cache.epoch().await;
        let topics = Arc::new(
            self.registry
                .list(page)
                .await
                .map_err(|e| classify::registry(&e))?,
        );
        self.cache.put_page(page, Arc::clone(&topics), epoch).await;
        Ok(topics)
    }

    /// Fetches a single topic.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no record has this id.
    pub async fn get_topic(&self, id: TopicId) -> Result<Topic, ServiceError> {
        if let Some(cached) = self.cache.get(id).await {
            return Ok(cached);
        }
        let epoch = self.cache.epoch().await;
        let topic = self
            .registry
            .get_by_id(id)
            .await
            .map_err(|e| classify::registry(&e))?
            .ok_or(ServiceError::NotFound(id))?;
        self.cache.put(topic.clone(), epoch).await;
        Ok(topic)
    }

    /// Creates the remote topic and its registry record.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::Upstream`] if the existence check or remote create
    ///   fails; nothing was changed.
    /// - [`ServiceError::Conflict`] if the name is already registered.
    /// - [`ServiceError::CompensationFailed`] if the insert failed and the
    ///   remote topic created by this call could not be removed.
    /// - [`ServiceError::Internal`] for any other registry failure.
    pub async fn create_topic(&self, name: &TopicName) -> Result<Topic, ServiceError> {
        let exists = self.gateway.exists(name).await.map_err(|e| {
            tracing::warn!(topic = %name, error = %e, "remote existence check failed");
            classify::upstream(&e)
        })?;

        let created_here = if exists {
            false
        } else {
            match self.gateway.create(name).await {
                Ok(CreateOutcome::Created) => true,
                Ok(CreateOutcome::AlreadyExists) => false,
                Err(e) => {
                    tracing::warn!(topic = %name, error = %e, "remote topic creation failed");
                    return Err(classify::upstream(&e));
                }
            }
        };

        let inserted = match self.registry.insert(name).await {
            Ok(topic) => topic,
            Err(err) => return Err(self.compensate_create(name, created_here, &err).await),
        };

        // The registry is the source of truth for the returned representation.
        // Both stores already hold the topic, so a failed re-read falls back
        // to the row returned by the insert instead of failing the create.
        let topic = match self.registry.get_by_id(inserted.id).await {
            Ok(Some(topic)) => topic,
            Ok(None) => {
                return Err(ServiceError::Internal(format!(
                    "topic {} vanished after insert",
                    inserted.id
                )));
            }
            Err(e) => {
                tracing::warn!(topic_id = %inserted.id, error = %e, "re-read after insert failed; returning inserted row");
                inserted
            }
        };

        if let Err(e) = self.invalidate().await {
            tracing::warn!(topic_id = %topic.id, error = %e, "cache flush after create failed");
        }

        tracing::info!(topic_id = %topic.id, topic = %topic.name, created_remote = created_here, "topic created");
        Ok(topic)
    }

    /// Undoes the remote step of a create whose registry insert failed.
    async fn compensate_create(
        &self,
        name: &TopicName,
        created_here: bool,
        err: &RegistryError,
    ) -> ServiceError {
        let failure = classify::insert_failure(err);

        if !created_here {
            tracing::debug!(topic = %name, error = %err, "insert failed; remote topic predates this request");
            return failure;
        }

        match self.gateway.delete(name).await {
            Ok(_) => {
                tracing::info!(topic = %name, error = %err, "insert failed; remote topic compensated");
                failure
            }
            Err(comp) => {
                tracing::error!(
                    topic = %name,
                    error = %err,
                    compensation_error = %comp,
                    reconciliation_required = true,
                    "compensating delete failed; remote topic leaked"
                );
                ServiceError::CompensationFailed {
                    name: name.clone(),
                    cause: err.to_string(),
                    compensation: comp.to_string(),
                }
            }
        }
    }

    /// Deletes the remote topic and then its registry record, then flushes
    /// the read cache.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::NotFound`] if no record has this id.
    /// - [`ServiceError::Upstream`] if the remote check or delete fails;
    ///   the record is left intact.
    /// - [`ServiceError::Conflict`] if other records still reference the
    ///   topic. The remote topic is already gone at that point.
    /// - [`ServiceError::Internal`] for other registry failures or a failed
    ///   cache flush.
    pub async fn delete_topic(&self, id: TopicId) -> Result<(), ServiceError> {
        let topic = self
            .registry
            .get_by_id(id)
            .await
            .map_err(|e| classify::registry(&e))?
            .ok_or(ServiceError::NotFound(id))?;

        let exists = self.gateway.exists(&topic.name).await.map_err(|e| {
            tracing::warn!(topic_id = %id, topic = %topic.name, error = %e, "remote existence check failed");
            classify::upstream(&e)
        })?;
        if exists {
            self.gateway.delete(&topic.name).await.map_err(|e| {
                tracing::warn!(topic_id = %id, topic = %topic.name, error = %e, "remote topic deletion failed");
                classify::upstream(&e)
            })?;
        }

        match self.registry.delete_by_id(id).await {
            Ok(true) => {}
            Ok(false) => return Err(ServiceError::NotFound(id)),
            Err(err) => {
                if matches!(err, RegistryError::ReferenceViolation) {
                    tracing::warn!(
                        topic_id = %id,
                        topic = %topic.name,
                        reconciliation_required = true,
                        "remote topic deleted but record is still referenced"
                    );
                }
                return Err(classify::delete_failure(&err, topic.name.as_str()));
            }
        }

        self.invalidate()
            .await
            .map_err(|e| classify::invalidation(&e))?;

        tracing::info!(topic_id = %id, topic = %topic.name, "topic deleted");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::cache::InvalidationError;
    use crate::persistence::InMemoryTopicRegistry;
    use crate::persistence::memory::RegistryOp;
    use crate::pubsub::InMemoryTopicGateway;
    use crate::pubsub::memory::GatewayOp;

    #[derive(Debug, Default)]
    struct CountingInvalidator {
        calls: AtomicUsize,
        fail: AtomicBool,
    }

    #[async_trait]
    impl CacheInvalidator for CountingInvalidator {
        async fn invalidate_all(&self) -> Result<(), InvalidationError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(InvalidationError("cache unreachable".into()));
            }
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Registry that can hold one read open after it has fetched its
    /// result, until released.
    #[derive(Debug)]
    struct PausingRegistry {
        inner: InMemoryTopicRegistry,
        pause_get: AtomicBool,
        pause_list: AtomicBool,
        entered: Notify,
        release: Notify,
    }

    impl PausingRegistry {
        fn new() -> Self {
            Self {
                inner: InMemoryTopicRegistry::new(),
                pause_get: AtomicBool::new(false),
                pause_list: AtomicBool::new(false),
                entered: Notify::new(),
                release: Notify::new(),
            }
        }

        async fn hold_if(&self, flag: &AtomicBool) {
            if flag.swap(false, Ordering::SeqCst) {
                self.entered.notify_one();
                self.release.notified().await;
            }
        }
    }

    #[async_trait]
    impl TopicRegistry for PausingRegistry {
        async fn list(&self, page: Page) -> Result<Vec<Topic>, RegistryError> {
            let result = self.inner.list(page).await;
            self.hold_if(&self.pause_list).await;
            result
        }

        async fn get_by_id(&self, id: TopicId) -> Result<Option<Topic>, RegistryError> {
            let result = self.inner.get_by_id(id).await;
            self.hold_if(&self.pause_get).await;
            result
        }

        async fn insert(&self, name: &TopicName) -> Result<Topic, RegistryError> {
            self.inner.insert(name).await
        }

        async fn delete_by_id(&self, id: TopicId) -> Result<bool, RegistryError> {
            self.inner.delete_by_id(id).await
        }
    }

    fn pausing_service() -> (Arc<PausingRegistry>, TopicService) {
        let registry = Arc::new(PausingRegistry::new());
        let service = TopicService::new(
            Arc::new(InMemoryTopicGateway::new()),
            Arc::clone(&registry) as Arc<dyn TopicRegistry>,
            TopicReadCache::new(100, Duration::from_secs(60)),
        );
        (registry, service)
    }

    struct Harness {
        gateway: Arc<InMemoryTopicGateway>,
        registry: Arc<InMemoryTopicRegistry>,
        invalidator: Arc<CountingInvalidator>,
        service: TopicService,
    }

    fn harness() -> Harness {
        let gateway = Arc::new(InMemoryTopicGateway::new());
        let registry = Arc::new(InMemoryTopicRegistry::new());
        let invalidator = Arc::new(CountingInvalidator::default());
        let service = TopicService::new(
            Arc::clone(&gateway) as Arc<dyn TopicGateway>,
            Arc::clone(&registry) as Arc<dyn TopicRegistry>,
            TopicReadCache::new(100, Duration::from_secs(60)),
        )
        .with_invalidator(Arc::clone(&invalidator) as Arc<dyn CacheInvalidator>);
        Harness {
            gateway,
            registry,
            invalidator,
            service,
        }
    }

    fn name(raw: &str) -> TopicName {
        let Ok(name) = TopicName::parse(raw) else {
            panic!("valid name");
        };
        name
    }

    async fn create(h: &Harness, raw: &str) -> Topic {
        let Ok(topic) = h.service.create_topic(&name(raw)).await else {
            panic!("create {raw} failed");
        };
        topic
    }

    #[tokio::test]
    async fn create_fresh_topic_exists_in_both_stores() {
        let h = harness();
        let topic = create(&h, "billing-events").await;

        assert_eq!(topic.name.as_str(), "billing-events");
        assert!(h.gateway.contains("billing-events").await);
        assert_eq!(h.registry.count_named("billing-events").await, 1);

        let Ok(fetched) = h.service.get_topic(topic.id).await else {
            panic!("created topic must resolve");
        };
        assert_eq!(fetched, topic);
    }

    #[tokio::test]
    async fn create_adopts_preexisting_remote_topic() {
        let h = harness();
        h.gateway.seed("billing-events").await;

        let _ = create(&h, "billing-events").await;
        assert_eq!(h.gateway.len().await, 1);
        assert_eq!(h.registry.count_named("billing-events").await, 1);
    }

    #[tokio::test]
    async fn create_duplicate_registered_name_is_conflict() {
        let h = harness();
        let _ = create(&h, "billing-events").await;

        let second = h.service.create_topic(&name("billing-events")).await;
        assert!(matches!(second, Err(ServiceError::Conflict { .. })));
        assert_eq!(h.registry.count_named("billing-events").await, 1);
        // The remote topic belongs to the first call and must survive.
        assert!(h.gateway.contains("billing-events").await);
        assert_eq!(h.gateway.delete_count(), 0);
    }

    #[tokio::test]
    async fn create_conflict_compensates_topic_created_by_the_call() {
        let h = harness();
        let _ = create(&h, "billing-events").await;
        // Remote topic vanished out of band; the record still holds the name.
        let _ = h.gateway.delete(&name("billing-events")).await;

        let result = h.service.create_topic(&name("billing-events")).await;
        assert!(matches!(result, Err(ServiceError::Conflict { .. })));
        assert!(!h.gateway.contains("billing-events").await);
    }

    #[tokio::test]
    async fn create_gateway_failure_touches_nothing() {
        let h = harness();

        h.gateway.fail_on(GatewayOp::Exists).await;
        let result = h.service.create_topic(&name("billing-events")).await;
        assert!(matches!(result, Err(ServiceError::Upstream(_))));

        h.gateway.heal().await;
        h.gateway.fail_on(GatewayOp::Create).await;
        let result = h.service.create_topic(&name("billing-events")).await;
        assert!(matches!(result, Err(ServiceError::Upstream(_))));

        assert!(h.registry.is_empty().await);
        assert!(h.gateway.is_empty().await);
    }

    #[tokio::test]
    async fn create_registry_failure_compensates_and_reports_internal() {
        let h = harness();
        h.registry.fail_on(RegistryOp::Insert).await;

        let result = h.service.create_topic(&name("billing-events")).await;
        assert!(matches!(result, Err(ServiceError::Internal(_))));
        assert!(!h.gateway.contains("billing-events").await);
        assert!(h.registry.is_empty().await);
    }

    #[tokio::test]
    async fn failed_compensation_is_reported_distinctly() {
        let h = harness();
        h.registry.fail_on(RegistryOp::Insert).await;
        h.gateway.fail_on(GatewayOp::Delete).await;

        let result = h.service.create_topic(&name("billing-events")).await;
        let Err(ServiceError::CompensationFailed { name, .. }) = result else {
            panic!("expected compensation failure, got {result:?}");
        };
        assert_eq!(name.as_str(), "billing-events");
        // The leaked remote topic is left for the operator.
        assert!(h.gateway.contains("billing-events").await);
    }

    #[tokio::test]
    async fn create_twice_yields_one_record() {
        let h = harness();
        let first = h.service.create_topic(&name("orders.v2")).await;
        let second = h.service.create_topic(&name("orders.v2")).await;

        assert!(first.is_ok());
        assert!(matches!(second, Err(ServiceError::Conflict { .. })));
        assert_eq!(h.registry.count_named("orders.v2").await, 1);
    }

    #[tokio::test]
    async fn concurrent_creates_have_exactly_one_winner() {
        let h = harness();
        let topic = name("billing-events");

        let (a, b) = tokio::join!(
            h.service.create_topic(&topic),
            h.service.create_topic(&topic)
        );

        assert_eq!(usize::from(a.is_ok()) + usize::from(b.is_ok()), 1);
        assert!(
            matches!(a, Err(ServiceError::Conflict { .. }))
                || matches!(b, Err(ServiceError::Conflict { .. }))
        );
        assert_eq!(h.registry.count_named("billing-events").await, 1);
        assert!(h.gateway.contains("billing-events").await);
    }

    #[tokio::test]
    async fn delete_unreferenced_topic_removes_both_and_invalidates_once() {
        let h = harness();
        let topic = create(&h, "billing-events").await;
        let flushes_after_create = h.invalidator.calls.load(Ordering::SeqCst);

        assert!(h.service.delete_topic(topic.id).await.is_ok());
        assert!(!h.gateway.contains("billing-events").await);
        assert!(h.registry.is_empty().await);
        assert_eq!(
            h.invalidator.calls.load(Ordering::SeqCst),
            flushes_after_create + 1
        );
    }

    #[tokio::test]
    async fn delete_referenced_topic_is_conflict_after_remote_removal() {
        let h = harness();
        let topic = create(&h, "billing-events").await;
        h.registry.add_reference(topic.id).await;
        let flushes_before = h.invalidator.calls.load(Ordering::SeqCst);

        let result = h.service.delete_topic(topic.id).await;
        let Err(ServiceError::Conflict { details, .. }) = result else {
            panic!("expected conflict, got {result:?}");
        };
        assert!(details.is_some());
        assert!(!h.gateway.contains("billing-events").await);
        assert_eq!(h.registry.count_named("billing-events").await, 1);
        assert_eq!(h.invalidator.calls.load(Ordering::SeqCst), flushes_before);
    }

    #[tokio::test]
    async fn delete_retry_after_reference_removal_succeeds() {
        let h = harness();
        let topic = create(&h, "billing-events").await;
        h.registry.add_reference(topic.id).await;
        let _ = h.service.delete_topic(topic.id).await;

        h.registry.remove_reference(topic.id).await;
        assert!(h.service.delete_topic(topic.id).await.is_ok());
        assert!(h.registry.is_empty().await);
    }

    #[tokio::test]
    async fn delete_gateway_failure_keeps_record_and_remote() {
        let h = harness();
        let topic = create(&h, "billing-events").await;

        for op in [GatewayOp::Exists, GatewayOp::Delete] {
            h.gateway.heal().await;
            h.gateway.fail_on(op).await;
            let result = h.service.delete_topic(topic.id).await;
            assert!(matches!(result, Err(ServiceError::Upstream(_))));
            assert_eq!(h.registry.count_named("billing-events").await, 1);
            assert!(h.gateway.contains("billing-events").await);
        }
    }

    #[tokio::test]
    async fn delete_with_missing_remote_still_removes_record() {
        let h = harness();
        let topic = create(&h, "billing-events").await;
        let _ = h.gateway.delete(&topic.name).await;

        assert!(h.service.delete_topic(topic.id).await.is_ok());
        assert!(h.registry.is_empty().await);
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found_without_gateway_calls() {
        let h = harness();
        h.gateway.fail_on(GatewayOp::Exists).await;

        let result = h.service.delete_topic(TopicId::random()).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_surfaces_invalidation_failure() {
        let h = harness();
        let topic = create(&h, "billing-events").await;
        h.invalidator.fail.store(true, Ordering::SeqCst);

        let result = h.service.delete_topic(topic.id).await;
        assert!(matches!(result, Err(ServiceError::Internal(_))));
        assert!(h.registry.is_empty().await);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let h = harness();
        let result = h.service.get_topic(TopicId::random()).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
        assert!(h.registry.is_empty().await);
        assert!(h.gateway.is_empty().await);
    }

    #[tokio::test]
    async fn list_pages_through_registry() {
        let h = harness();
        for raw in ["topic-a", "topic-b", "topic-c"] {
            let _ = create(&h, raw).await;
        }

        let Ok(page) = h.service.list_topics(Page::new(1, 2)).await else {
            panic!("list failed");
        };
        let names: Vec<&str> = page.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["topic-b", "topic-c"]);
    }

    #[tokio::test]
    async fn create_survives_failed_reread() {
        let h = harness();
        h.registry.fail_on(RegistryOp::Get).await;

        let topic = create(&h, "billing-events").await;
        assert_eq!(topic.name.as_str(), "billing-events");
        assert!(h.gateway.contains("billing-events").await);
        assert_eq!(h.registry.count_named("billing-events").await, 1);

        h.registry.heal().await;
        let Ok(fetched) = h.service.get_topic(topic.id).await else {
            panic!("created topic must resolve");
        };
        assert_eq!(fetched.id, topic.id);
    }

    #[tokio::test]
    async fn delete_lookup_failure_is_internal_without_gateway_calls() {
        let h = harness();
        let topic = create(&h, "billing-events").await;
        h.registry.fail_on(RegistryOp::Get).await;
        // Any gateway call would surface as Upstream instead.
        h.gateway.fail_on(GatewayOp::Exists).await;
        h.gateway.fail_on(GatewayOp::Delete).await;

        let result = h.service.delete_topic(topic.id).await;
        assert!(matches!(result, Err(ServiceError::Internal(_))));
        assert!(h.gateway.contains("billing-events").await);
        assert_eq!(h.gateway.delete_count(), 0);
        assert_eq!(h.registry.count_named("billing-events").await, 1);
    }

    #[tokio::test]
    async fn list_failure_is_internal_and_not_cached() {
        let h = harness();
        let _ = create(&h, "billing-events").await;
        h.registry.fail_on(RegistryOp::List).await;

        let result = h.service.list_topics(Page::default()).await;
        assert!(matches!(result, Err(ServiceError::Internal(_))));

        h.registry.heal().await;
        let Ok(page) = h.service.list_topics(Page::default()).await else {
            panic!("list failed after heal");
        };
        assert_eq!(page.len(), 1);
    }

    #[tokio::test]
    async fn extra_invalidator_still_flushes_read_cache() {
        let h = harness();
        let topic = create(&h, "billing-events").await;
        assert!(h.service.get_topic(topic.id).await.is_ok());

        assert!(h.service.delete_topic(topic.id).await.is_ok());
        assert!(matches!(
            h.service.get_topic(topic.id).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn get_racing_delete_does_not_repopulate_cache() {
        let (registry, service) = pausing_service();
        let Ok(topic) = service.create_topic(&name("billing-events")).await else {
            panic!("create failed");
        };

        registry.pause_get.store(true, Ordering::SeqCst);
        let reader = {
            let service = service.clone();
            tokio::spawn(async move { service.get_topic(topic.id).await })
        };
        registry.entered.notified().await;

        assert!(service.delete_topic(topic.id).await.is_ok());
        registry.release.notify_one();

        let Ok(raced) = reader.await else {
            panic!("reader task failed");
        };
        // The read started before the delete and may report the old record.
        assert!(raced.is_ok());
        assert!(matches!(
            service.get_topic(topic.id).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn list_racing_create_does_not_pin_stale_page() {
        let (registry, service) = pausing_service();

        registry.pause_list.store(true, Ordering::SeqCst);
        let reader = {
            let service = service.clone();
            tokio::spawn(async move { service.list_topics(Page::default()).await })
        };
        registry.entered.notified().await;

        assert!(service.create_topic(&name("billing-events")).await.is_ok());
        registry.release.notify_one();

        let Ok(Ok(raced)) = reader.await else {
            panic!("reader task failed");
        };
        assert!(raced.is_empty());

        let Ok(page) = service.list_topics(Page::default()).await else {
            panic!("list failed");
        };
        assert_eq!(page.len(), 1);
    }

    #[tokio::test]
    async fn default_cache_is_flushed_by_delete() {
        let gateway = Arc::new(InMemoryTopicGateway::new());
        let registry = Arc::new(InMemoryTopicRegistry::new());
        let cache = TopicReadCache::new(100, Duration::from_secs(60));
        let service = TopicService::new(gateway, registry, cache.clone());

        let Ok(topic) = service.create_topic(&name("billing-events")).await else {
            panic!("create failed");
        };
        let _ = service.list_topics(Page::default()).await;
        assert!(cache.get_page(Page::default()).await.is_some());

        assert!(service.delete_topic(topic.id).await.is_ok());
        assert!(cache.get_page(Page::default()).await.is_none());
        assert!(matches!(
            service.get_topic(topic.id).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
