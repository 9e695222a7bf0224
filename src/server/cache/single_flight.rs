use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tokio::sync::watch;

use crate::server::{cache::CacheConfig, error::fetch::FetchError};

/// Outcome of a fetch, shareable with every waiter of a key.
pub type Outcome<V> = Result<V, Arc<FetchError>>;

enum Slot<V> {
    /// A completed fetch. Failures are kept alongside successes and obey the
    /// same staleness window.
    Ready {
        outcome: Outcome<V>,
        fetched_at: Instant,
        last_used: Instant,
    },
    /// A fetch currently in flight; waiters subscribe to the channel.
    Pending(watch::Receiver<Option<Outcome<V>>>),
}

enum Action<V> {
    Return(Outcome<V>),
    Wait(watch::Receiver<Option<Outcome<V>>>),
    Fetch(watch::Sender<Option<Outcome<V>>>),
    /// No usable slot; the caller becomes the fetcher.
    TakeOver,
}

/// Key-addressed async memoization with the single-flight guarantee: at most
/// one fetch is in flight per key, and concurrent requests for the same key
/// share that fetch's outcome instead of issuing duplicates.
///
/// The lock is only held to inspect or swap a slot, never across an await
/// point.
pub struct SingleFlight<K, V> {
    slots: Mutex<HashMap<K, Slot<V>>>,
}

impl<K, V> SingleFlight<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached outcome for `key` if it is fresh, attaches to an
    /// in-flight fetch if one exists, and otherwise runs `fetch` and stores
    /// its outcome.
    ///
    /// `fetch` may be called twice when `config.retry` is set and the first
    /// attempt fails.
    pub async fn get_or_fetch<F, Fut>(&self, key: K, config: &CacheConfig, fetch: F) -> Outcome<V>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<V, FetchError>>,
    {
        loop {
            let action = {
                let mut slots = self.slots.lock().expect("cache lock poisoned");
                let action = match slots.get_mut(&key) {
                    Some(Slot::Ready {
                        outcome,
                        fetched_at,
                        last_used,
                    }) if fetched_at.elapsed() < config.stale_time => {
                        *last_used = Instant::now();
                        Action::Return(outcome.clone())
                    }
                    Some(Slot::Pending(rx)) => {
                        let completed = rx.borrow().clone();
                        if let Some(outcome) = completed {
                            Action::Return(outcome)
                        } else if rx.has_changed().is_err() {
                            // The task that started this fetch was dropped
                            // before completing; take over as the fetcher.
                            Action::TakeOver
                        } else {
                            Action::Wait(rx.clone())
                        }
                    }
                    _ => Action::TakeOver,
                };

                match action {
                    Action::TakeOver => begin_fetch(&mut slots, &key),
                    action => action,
                }
            };

            match action {
                Action::Return(outcome) => return outcome,
                Action::Wait(mut rx) => {
                    match rx.wait_for(|outcome| outcome.is_some()).await {
                        Ok(outcome) => return outcome.clone().expect("watch value set"),
                        // Fetching task dropped mid-flight; start over.
                        Err(_) => continue,
                    }
                }
                Action::Fetch(tx) => {
                    let mut outcome = fetch().await.map_err(Arc::new);
                    if outcome.is_err() && config.retry {
                        outcome = fetch().await.map_err(Arc::new);
                    }

                    let now = Instant::now();
                    {
                        let mut slots = self.slots.lock().expect("cache lock poisoned");
                        slots.insert(
                            key.clone(),
                            Slot::Ready {
                                outcome: outcome.clone(),
                                fetched_at: now,
                                last_used: now,
                            },
                        );
                    }
                    let _ = tx.send(Some(outcome.clone()));

                    return outcome;
                }
                Action::TakeOver => unreachable!("takeover is resolved while holding the lock"),
            }
        }
    }

    /// Drops completed entries that have not been used for longer than
    /// `max_idle`. In-flight entries are never evicted.
    pub fn evict_unused(&self, max_idle: Duration) {
        let mut slots = self.slots.lock().expect("cache lock poisoned");
        slots.retain(|_, slot| match slot {
            Slot::Ready { last_used, .. } => last_used.elapsed() <= max_idle,
            Slot::Pending(_) => true,
        });
    }

    /// Drops every entry, forcing the next request per key to refetch.
    pub fn clear(&self) {
        self.slots.lock().expect("cache lock poisoned").clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.slots.lock().expect("cache lock poisoned").len()
    }
}

fn begin_fetch<K, V>(slots: &mut HashMap<K, Slot<V>>, key: &K) -> Action<V>
where
    K: Eq + Hash + Clone,
{
    let (tx, rx) = watch::channel(None);
    slots.insert(key.clone(), Slot::Pending(rx));
    Action::Fetch(tx)
}
