//! Loading city tables and sharing a loaded copy.
//!
//! [`CitySource`] abstracts where a [`CityTable`] comes from. [`CachedSource`]
//! wraps any source so repeated requests reuse one immutable table until the
//! cache is explicitly invalidated.

use std::convert::Infallible;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::CityTable;

/// Provider of a complete [`CityTable`].
///
/// # Examples
/// ```
/// use cityrank_core::{CitySource, CityTable};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = CityTable::default();
/// let loaded = table.load()?;
/// assert!(loaded.is_empty());
/// # Ok(())
/// # }
/// ```
pub trait CitySource {
    /// Error raised when the table cannot be produced.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the full table.
    ///
    /// # Errors
    /// Returns the source's error when the data is unreadable or invalid.
    fn load(&self) -> Result<CityTable, Self::Error>;
}

impl CitySource for CityTable {
    type Error = Infallible;

    fn load(&self) -> Result<CityTable, Self::Error> {
        Ok(self.clone())
    }
}

/// Memoising wrapper around a [`CitySource`].
///
/// The first call to [`CachedSource::table`] loads from the inner source; later
/// calls return the same shared table. A failed load caches nothing.
#[derive(Debug)]
pub struct CachedSource<S> {
    source: S,
    cached: Mutex<Option<Arc<CityTable>>>,
}

impl<S: CitySource> CachedSource<S> {
    /// Wrap `source` with an empty cache.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            cached: Mutex::new(None),
        }
    }

    /// Return the cached table, loading it on first use.
    ///
    /// # Errors
    /// Propagates the inner source's error unchanged.
    pub fn table(&self) -> Result<Arc<CityTable>, S::Error> {
        let mut cached = self.lock();
        if let Some(table) = cached.as_ref() {
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(self.source.load()?);
        debug!("cached city table with {} records", table.len());
        *cached = Some(Arc::clone(&table));
        Ok(table)
    }

    /// Drop the cached table so the next call reloads.
    pub fn invalidate(&self) {
        if self.lock().take().is_some() {
            debug!("invalidated cached city table");
        }
    }

    /// Report whether a table is currently cached.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.lock().is_some()
    }

    /// Inner source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    // The table is never mutated in place, so a poisoned guard is still sound.
    fn lock(&self) -> MutexGuard<'_, Option<Arc<CityTable>>> {
        self.cached.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
