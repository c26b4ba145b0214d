//! Conditional mapping extensions.
//!
//! "Map if exists" helpers: copy mapped fields from a source that may or
//! may not be present onto an existing destination, or into a new one.
//! Absence is never an error by itself; a caller-supplied fallback decides
//! whether it becomes one.

use mapx_core::{Fallback, KeyedSource, Mapper, MapxResult};
use tracing::debug;

/// Conditional mapping extensions, available on every [`Mapper`].
pub trait MapIfExistExt<S, D>: Mapper<S, D> {
    /// Maps source fields onto the destination when the source is present;
    /// leaves the destination untouched otherwise.
    fn map_if_exist(&self, source: Option<&S>, destination: &mut D) -> MapxResult<()> {
        match source {
            Some(source) => self.map_into(source, destination),
            None => Ok(()),
        }
    }

    /// Like [`map_if_exist`](Self::map_if_exist), but invokes `fallback`
    /// when the source is absent. `Fallback::Abort` surfaces its error
    /// unmodified; `Fallback::Continue` keeps the no-op behavior.
    fn map_if_exist_or_else<F>(
        &self,
        source: Option<&S>,
        destination: &mut D,
        fallback: F,
    ) -> MapxResult<()>
    where
        F: FnOnce() -> Fallback,
    {
        match source {
            Some(source) => self.map_into(source, destination),
            None => match fallback() {
                Fallback::Continue => Ok(()),
                Fallback::Abort(err) => Err(err),
            },
        }
    }

    /// Maps the source into a new destination instance when present;
    /// returns `None` otherwise.
    fn map_if_exist_to(&self, source: Option<&S>) -> MapxResult<Option<D>> {
        source.map(|source| self.map(source)).transpose()
    }

    /// Like [`map_if_exist_to`](Self::map_if_exist_to), with a fallback for
    /// the absent case. A non-aborting fallback yields `Ok(None)`: no
    /// destination is produced.
    fn map_if_exist_to_or_else<F>(&self, source: Option<&S>, fallback: F) -> MapxResult<Option<D>>
    where
        F: FnOnce() -> Fallback,
    {
        match source {
            Some(source) => Ok(Some(self.map(source)?)),
            None => match fallback() {
                Fallback::Continue => Ok(None),
                Fallback::Abort(err) => Err(err),
            },
        }
    }

    /// Looks the key up and maps the found value onto the destination.
    ///
    /// A single [`KeyedSource::try_get`] call covers both the membership
    /// test and the read, so concurrent-safe lookups stay atomic. A missing
    /// key leaves the destination untouched.
    fn map_if_exist_by_key<K, L>(&self, lookup: &L, key: &K, destination: &mut D) -> MapxResult<()>
    where
        L: KeyedSource<K, S>,
    {
        match lookup.try_get(key) {
            Some(value) => self.map_into(&value, destination),
            None => {
                debug!("Key not present in lookup source, destination left unchanged");
                Ok(())
            }
        }
    }

    /// Like [`map_if_exist_by_key`](Self::map_if_exist_by_key), but invokes
    /// `fallback` when the key is absent.
    fn map_if_exist_by_key_or_else<K, L, F>(
        &self,
        lookup: &L,
        key: &K,
        destination: &mut D,
        fallback: F,
    ) -> MapxResult<()>
    where
        L: KeyedSource<K, S>,
        F: FnOnce() -> Fallback,
    {
        match lookup.try_get(key) {
            Some(value) => self.map_into(&value, destination),
            None => match fallback() {
                Fallback::Continue => Ok(()),
                Fallback::Abort(err) => Err(err),
            },
        }
    }
}

impl<S, D, M: Mapper<S, D> + ?Sized> MapIfExistExt<S, D> for M {}
