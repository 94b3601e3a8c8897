//! Paged view over the users directory with a short-lived page cache.
//!
//! The directory only serves the full collection, so every miss fetches all
//! users and slices locally. Cached pages are keyed by [`PageRequest`] and
//! served until they are older than the staleness window.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use pagination::{Page, PageRequest};
use tracing::{debug, warn};

use crate::domain::UsersPage;
use crate::domain::ports::{UserDirectory, UserDirectoryError};

/// Default staleness window: five minutes.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(5 * 60);

/// Most pages held at once; the oldest entry makes room for a new one.
pub const MAX_CACHED_PAGES: usize = 256;

#[derive(Debug, Clone)]
struct CachedPage {
    page: UsersPage,
    fetched_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct PageCache {
    /// Bumped by every invalidation; fetches begun under an older value are
    /// not stored.
    generation: u64,
    entries: HashMap<PageRequest, CachedPage>,
}

impl PageCache {
    fn store(
        &mut self,
        request: PageRequest,
        entry: CachedPage,
        now: DateTime<Utc>,
        stale_after: TimeDelta,
    ) {
        self.entries
            .retain(|_, cached| now - cached.fetched_at < stale_after);

        if self
            .entries
            .get(&request)
            .is_some_and(|current| current.fetched_at > entry.fetched_at)
        {
            return;
        }

        if !self.entries.contains_key(&request) && self.entries.len() >= MAX_CACHED_PAGES {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, cached)| cached.fetched_at)
                .map(|(key, _)| *key);
            if let Some(key) = oldest {
                self.entries.remove(&key);
            }
        }

        self.entries.insert(request, entry);
    }
}

/// Serves [`UsersPage`]s from the directory, caching each request's page.
///
/// Entries are stamped with the time their fetch started. A fetch that
/// started before [`UsersPageService::invalidate`], or before the fetch that
/// filled its slot, is returned to its caller but never stored. Concurrent
/// misses for the same request may both reach the directory. Failures are
/// handed back as-is and leave the cache untouched.
#[derive(Clone)]
pub struct UsersPageService {
    directory: Arc<dyn UserDirectory>,
    clock: Arc<dyn Clock>,
    stale_after: TimeDelta,
    cache: Arc<Mutex<PageCache>>,
}

impl UsersPageService {
    /// Create a service with the default five minute staleness window.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use showcase::domain::UsersPageService;
    /// use showcase::domain::ports::FixtureUserDirectory;
    ///
    /// let service = UsersPageService::new(
    ///     Arc::new(FixtureUserDirectory::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(directory: Arc<dyn UserDirectory>, clock: Arc<dyn Clock>) -> Self {
        Self {
            directory,
            clock,
            stale_after: to_time_delta(DEFAULT_STALE_AFTER),
            cache: Arc::new(Mutex::new(PageCache::default())),
        }
    }

    /// Replace the staleness window. A zero window disables caching.
    pub fn with_stale_after(mut self, stale_after: Duration) -> Self {
        self.stale_after = to_time_delta(stale_after);
        self
    }

    /// Return the page described by `request`.
    ///
    /// # Errors
    ///
    /// Returns the directory error when a fetch is needed and fails.
    pub async fn users_page(&self, request: PageRequest) -> Result<UsersPage, UserDirectoryError> {
        let started_at = self.clock.utc();
        let generation = {
            let cache = self.lock_cache();
            if let Some(page) = self.fresh_page(&cache, request, started_at) {
                debug!(page = request.page(), limit = request.limit(), "users page cache hit");
                return Ok(page);
            }
            cache.generation
        };

        debug!(page = request.page(), limit = request.limit(), "users page cache miss");
        let users = self.directory.fetch_users().await.inspect_err(|error| {
            warn!(%error, page = request.page(), limit = request.limit(), "users fetch failed");
        })?;

        let page = UsersPage::from(Page::from_collection(users, request));
        let entry = CachedPage {
            page: page.clone(),
            fetched_at: started_at,
        };
        let now = self.clock.utc();
        let mut cache = self.lock_cache();
        if cache.generation == generation {
            cache.store(request, entry, now, self.stale_after);
        } else {
            debug!(
                page = request.page(),
                limit = request.limit(),
                "users page fetched before invalidation; not cached"
            );
        }
        Ok(page)
    }

    /// Drop every cached page so the next request refetches.
    ///
    /// Fetches already in flight complete for their callers but do not
    /// repopulate the cache.
    pub fn invalidate(&self) {
        let mut cache = self.lock_cache();
        cache.generation = cache.generation.wrapping_add(1);
        cache.entries.clear();
    }

    fn fresh_page(
        &self,
        cache: &PageCache,
        request: PageRequest,
        now: DateTime<Utc>,
    ) -> Option<UsersPage> {
        let entry = cache.entries.get(&request)?;
        (now - entry.fetched_at < self.stale_after).then(|| entry.page.clone())
    }

    fn lock_cache(&self) -> MutexGuard<'_, PageCache> {
        // Entries are replaced whole, so a poisoned map is still consistent.
        self.cache
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

fn to_time_delta(duration: Duration) -> TimeDelta {
    TimeDelta::from_std(duration).unwrap_or(TimeDelta::MAX)
}
