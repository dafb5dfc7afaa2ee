//! Sequential model loading over an ordered list of fallback sources.

use std::fmt::Display;
use std::future::Future;

use crate::error::{PortfolioError, Result};

/// A successfully loaded asset and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    /// Position of the winning source in the list.
    pub source_index: usize,
    pub attempts: usize,
}

/// Try `sources` strictly in order and return the first success.
///
/// Each source is awaited to completion before the next one is started. When
/// every source fails this returns [`PortfolioError::ModelLoadExhausted`]
/// with the number of attempts made.
pub async fn load_first<T, E, F, Fut>(sources: &[String], mut fetch: F) -> Result<Loaded<T>>
where
    E: Display,
    F: FnMut(&str) -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    let mut attempts = 0;
    for (index, source) in sources.iter().enumerate() {
        attempts += 1;
        log::info!("loading model {}/{}: {source}", index + 1, sources.len());
        match fetch(source).await {
            Ok(value) => {
                return Ok(Loaded {
                    value,
                    source_index: index,
                    attempts,
                });
            }
            Err(e) => {
                log::warn!("model source {source} failed: {e}");
            }
        }
    }
    log::error!("all model sources failed");
    Err(PortfolioError::ModelLoadExhausted { attempts })
}
