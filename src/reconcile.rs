use std::{
    collections::HashSet,
    future::Future,
};

use futures::future::join_all;

use crate::core::DishmateError;

/// Resolve an ordered list of locally stored ids against a remote
/// lookup, concurrently, tolerating per-id failures.
///
/// Ids are de-duplicated first (first occurrence wins), all lookups are
/// issued at once and every one is awaited before any output is
/// produced. A failed or not-found lookup drops that id from the
/// output with a stderr warning; the relative order of successes is
/// preserved. An empty id list returns immediately without issuing any
/// lookup, and a total outage yields an empty Vec rather than an error
/// so the caller can render an explicit empty state.
pub async fn reconcile<T, F, Fut>(ids: &[String], fetch: F) -> Vec<T>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Option<T>, DishmateError>>,
{
    let mut seen = HashSet::new();
    let unique: Vec<&String> = ids.iter().filter(|id| seen.insert(id.as_str())).collect();

    if unique.is_empty() {
        return Vec::new();
    }

    let results = join_all(unique.iter().map(|id| fetch((*id).clone()))).await;

    let mut records = Vec::with_capacity(unique.len());
    let mut dropped = 0usize;
    for (id, result) in unique.iter().zip(results) {
        match result {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {
                dropped += 1;
                eprintln!("No remote record for id {}, skipping", id);
            }
            Err(e) => {
                dropped += 1;
                eprintln!("Could not fetch record for id {}: {}", id, e);
            }
        }
    }

    if dropped > 0 {
        eprintln!("Reconciliation dropped {} of {} ids", dropped, unique.len());
    }

    records
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{
            AtomicUsize,
            Ordering,
        },
        Arc,
    };

    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_empty_input_issues_no_lookups() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let result: Vec<String> = reconcile(&[], |id| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Some(id))
            }
        })
        .await;

        assert!(result.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_duplicates_fetched_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let result = reconcile(&ids(&["A", "B", "A", "B", "A"]), |id| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Some(id))
            }
        })
        .await;

        assert_eq!(result, ids(&["A", "B"]));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failures_dropped_in_order() {
        let result = reconcile(&ids(&["A", "B", "C", "D"]), |id| async move {
            if id == "B" {
                Err(DishmateError::Custom("network down".to_string()))
            } else if id == "C" {
                Ok(None)
            } else {
                Ok(Some(id))
            }
        })
        .await;

        assert_eq!(result, ids(&["A", "D"]));
    }

    #[tokio::test]
    async fn test_total_outage_yields_empty_not_error() {
        let result: Vec<String> = reconcile(&ids(&["A", "B"]), |_id| async move {
            Err(DishmateError::Custom("offline".to_string()))
        })
        .await;

        assert!(result.is_empty());
    }
}
