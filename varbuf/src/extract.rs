//! Pattern-driven extraction of several values in one call
//!
//! Tags: `s` text, `l` 64-bit int, `i` 32-bit int, `b` boolean, `d` bytes,
//! `h` 16-bit int, `f` f32, `x` f64. Tags are case-insensitive. Characters
//! that are not tags are skipped without consuming any bytes.

use crate::BufferData;
use varbuf_core::validation::{first_unknown_tag, parse_pattern, parse_pattern_strict};
use varbuf_core::{FieldKind, Result, Value};

impl BufferData {
    /// Read one value per recognised tag in `pattern`
    ///
    /// Unknown tag characters produce no entry and read nothing. If any read
    /// fails, the cursor returns to where it was before the call and the
    /// error is returned.
    pub fn extract(&mut self, pattern: &str) -> Result<Vec<Value>> {
        if let Some((position, tag)) = first_unknown_tag(pattern) {
            tracing::debug!(position, %tag, pattern, "skipping unknown pattern tags");
        }
        self.extract_fields(&parse_pattern(pattern))
    }

    /// Like [`extract`](Self::extract), but an unknown tag fails with
    /// `UnsupportedType` before anything is read
    pub fn extract_strict(&mut self, pattern: &str) -> Result<Vec<Value>> {
        let kinds = parse_pattern_strict(pattern)?;
        self.extract_fields(&kinds)
    }

    /// Read one value per kind, in order
    pub fn extract_fields(&mut self, kinds: &[FieldKind]) -> Result<Vec<Value>> {
        let start = self.cursor();
        let mut values = Vec::with_capacity(kinds.len());

        for &kind in kinds {
            match self.read_value(kind) {
                Ok(value) => values.push(value),
                Err(err) => {
                    self.seek(start);
                    return Err(err);
                }
            }
        }

        Ok(values)
    }
}
