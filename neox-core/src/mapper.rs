//! Best-effort row to struct mapping with a per-mapper shape cache.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::NeoxError;
use crate::kind::ValueKind;
use crate::source::{RowSource, SourceRow};
use crate::traits::{FieldMeta, NeoxStruct};

/// Tag to field descriptor table for one destination shape.
#[derive(Debug, Clone, Default)]
pub struct MappingCache {
    shape: &'static str,
    fields: HashMap<&'static str, FieldMeta>,
}

impl MappingCache {
    fn build<D: NeoxStruct + ?Sized>(dest: &D) -> Self {
        let shape = dest.shape().describe();
        let mut fields = HashMap::new();
        // Tags are not checked for uniqueness; a later field replaces an
        // earlier one with the same tag.
        for meta in dest.fields() {
            fields.insert(meta.tag, meta);
        }
        debug!(destination = shape, fields = fields.len(), "built mapping cache");
        MappingCache { shape, fields }
    }

    /// Name of the struct the cache was built from.
    pub fn shape(&self) -> &'static str {
        self.shape
    }

    pub fn get(&self, tag: &str) -> Option<&FieldMeta> {
        self.fields.get(tag)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldMeta)> + '_ {
        self.fields.iter().map(|(tag, meta)| (*tag, meta))
    }
}

/// Copies named row columns onto the fields of a [`NeoxStruct`].
///
/// The destination's field table is enumerated on the first successful call
/// and reused for every later call, so one mapper serves a whole stream of
/// rows. A mapper must only ever see one destination type: the cache is not
/// revalidated, and mapping a different struct through a warm mapper writes
/// by the first struct's field indices.
///
/// Mapping is best-effort. Columns missing from the row and values whose
/// kind differs from the field's are skipped, leaving the field at its prior
/// value. The only failures are a non-struct destination and errors reported
/// by the row source.
///
/// A mapper is plain mutable state with no internal locking; share it
/// between threads only behind external synchronization.
///
/// ```rust
/// use std::collections::HashMap;
/// use neo4rs::BoltType;
/// use neox_core::mapper::RowMapper;
///
/// let mut mapper = RowMapper::new();
/// let row: HashMap<String, BoltType> = HashMap::new();
/// let mut scalar = 0_i64;
/// let err = mapper.map_into(&mut scalar, &row).unwrap_err();
/// assert!(err.is_invalid_destination());
/// assert!(!mapper.is_cached());
/// ```
#[derive(Debug, Default)]
pub struct RowMapper {
    cache: Option<MappingCache>,
    builds: usize,
}

impl RowMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `row` onto `dest`.
    ///
    /// Fails with [`NeoxError::InvalidDestination`] when `dest` is not
    /// record-shaped; nothing is written and the cache is left as it was.
    pub fn map_into<D, R>(&mut self, dest: &mut D, row: &R) -> Result<(), NeoxError>
    where
        D: NeoxStruct + ?Sized,
        R: SourceRow + ?Sized,
    {
        let shape = dest.shape();
        if !shape.is_record() {
            return Err(NeoxError::invalid_destination(shape.describe()));
        }

        let builds = &mut self.builds;
        let cache = self.cache.get_or_insert_with(|| {
            *builds += 1;
            MappingCache::build(&*dest)
        });

        for (tag, meta) in cache.iter() {
            let Some(value) = row.get(tag) else {
                trace!(tag, field = meta.name, "column absent, field left unchanged");
                continue;
            };

            let kind = ValueKind::of(&value);
            if !meta.accepts(kind) {
                debug!(
                    tag,
                    field = meta.name,
                    expected = %meta.kind,
                    got = %kind,
                    "kind mismatch, field left unchanged"
                );
                continue;
            }

            if let Err(e) = dest.set_field(meta.index, value) {
                debug!(tag, field = meta.name, error = %e, "conversion failed, field left unchanged");
            }
        }

        Ok(())
    }

    /// Map the current row of `source` onto `dest`.
    ///
    /// An error recorded on the source is returned as-is before anything
    /// else is looked at. [`NeoxError::NoRecord`] if there is no current row.
    pub fn map_current<S, D>(&mut self, source: &S, dest: &mut D) -> Result<(), NeoxError>
    where
        S: RowSource + ?Sized,
        D: NeoxStruct + ?Sized,
    {
        if let Some(err) = source.err() {
            return Err(err);
        }
        let row = source.current().ok_or(NeoxError::NoRecord)?;
        self.map_into(dest, row)
    }

    /// The cache, once the first destination has been seen.
    pub fn cache(&self) -> Option<&MappingCache> {
        self.cache.as_ref()
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// Tags currently in the cache, sorted.
    pub fn cached_tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.cache.iter().flat_map(|c| c.iter().map(|(t, _)| t)).collect();
        tags.sort_unstable();
        tags
    }

    /// Number of times the destination shape has been enumerated. At most 1.
    pub fn shape_builds(&self) -> usize {
        self.builds
    }
}
