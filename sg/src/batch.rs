//! BatchRunner - repeated generation with per-slot failure isolation

use rand::{CryptoRng, RngCore};
use thiserror::Error;
use tracing::{debug, warn};

use crate::credential::{CredentialGenerator, GeneratedCredential, GeneratorRequest};
use crate::{GenError, Result};

/// Failure of a single batch slot; the rest of the batch still runs
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Item {index} failed: {source}")]
pub struct BatchItemError {
    /// 1-based slot index
    pub index: usize,
    #[source]
    pub source: GenError,
}

/// One slot of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchItem<T> {
    /// 1-based slot index
    pub index: usize,
    pub outcome: std::result::Result<T, BatchItemError>,
}

/// Outcomes of a batch, in call order
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult<T> {
    items: Vec<BatchItem<T>>,
}

impl<T> BatchResult<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BatchItem<T>> {
        self.items.iter()
    }

    /// Successful values in order
    pub fn successes(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter_map(|item| item.outcome.as_ref().ok())
    }

    /// Failed slots in order
    pub fn failures(&self) -> impl Iterator<Item = &BatchItemError> {
        self.items.iter().filter_map(|item| item.outcome.as_ref().err())
    }
}

impl<T> IntoIterator for BatchResult<T> {
    type Item = BatchItem<T>;
    type IntoIter = std::vec::IntoIter<BatchItem<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Call `generate` exactly `count` times, recording each outcome at its 1-based index
pub fn run_batch<T, F>(count: usize, mut generate: F) -> Result<BatchResult<T>>
where
    F: FnMut() -> Result<T>,
{
    if count == 0 {
        return Err(GenError::InvalidArgument("count must be at least 1".to_string()));
    }
    debug!(count, "run_batch: called");

    let mut items = Vec::with_capacity(count);
    for index in 1..=count {
        let outcome = generate().map_err(|source| {
            warn!(index, %source, "run_batch: item failed");
            BatchItemError { index, source }
        });
        items.push(BatchItem { index, outcome });
    }
    Ok(BatchResult { items })
}

/// Run one request per slot, in order
pub fn run_requests<R: RngCore + CryptoRng>(
    generator: &mut CredentialGenerator<R>,
    requests: &[GeneratorRequest],
) -> Result<BatchResult<GeneratedCredential>> {
    let mut pending = requests.iter();
    run_batch(requests.len(), || match pending.next() {
        Some(request) => generator.generate(request),
        None => Err(GenError::InvalidArgument("batch request list exhausted".to_string())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::PasswordSpec;

    #[test]
    fn test_zero_count() {
        let result = run_batch(0, || Ok::<_, GenError>(1));
        assert!(matches!(result, Err(GenError::InvalidArgument(_))));
    }

    #[test]
    fn test_calls_exactly_count_times_in_order() {
        let mut calls = 0;
        let batch = run_batch(4, || {
            calls += 1;
            Ok(calls)
        })
        .unwrap();

        assert_eq!(calls, 4);
        let values: Vec<i32> = batch.successes().copied().collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
        assert_eq!(batch.iter().map(|item| item.index).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_failure_is_isolated() {
        let mut generator = CredentialGenerator::new();
        let mut call = 0;
        let batch = run_batch(5, || {
            call += 1;
            let length = if call == 3 { 2 } else { 6 };
            generator.generate_pin(length)
        })
        .unwrap();

        assert_eq!(batch.len(), 5);
        assert_eq!(batch.successes().count(), 4);

        let failures: Vec<&BatchItemError> = batch.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].index, 3);
        assert!(matches!(failures[0].source, GenError::InvalidSpec(_)));
        let outcomes: Vec<bool> = batch.iter().map(|item| item.outcome.is_ok()).collect();
        assert_eq!(outcomes, vec![true, true, false, true, true]);
    }

    #[test]
    fn test_run_requests() {
        let mut generator = CredentialGenerator::new();
        let requests = vec![
            GeneratorRequest::Uuid { version: 4 },
            GeneratorRequest::Password(PasswordSpec::with_length(4)),
            GeneratorRequest::Token { length_bytes: 8 },
        ];

        let batch = run_requests(&mut generator, &requests).unwrap();

        assert_eq!(batch.len(), 3);
        let items: Vec<_> = batch.iter().collect();
        assert_eq!(items[0].outcome.as_ref().unwrap().value().len(), 36);
        assert_eq!(items[1].outcome.as_ref().unwrap_err().index, 2);
        assert_eq!(items[2].outcome.as_ref().unwrap().value().len(), 16);
    }

    #[test]
    fn test_item_error_message() {
        let err = BatchItemError {
            index: 2,
            source: GenError::InvalidSpec("PIN length must be at least 4 digits".to_string()),
        };
        assert_eq!(err.to_string(), "Item 2 failed: Invalid spec: PIN length must be at least 4 digits");
    }
}
