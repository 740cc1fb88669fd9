//! Cell dispatch
//!
//! Resolves a cell's [`SemanticKind`] from its shape override, its tag, and
//! the column defaults, then runs the value through the normalizer and the
//! formatter to produce the display string.

use std::sync::Arc;

use ahash::AHashMap;
use tagcell_core::{Cell, Column, ObjectTag, ParseError, SemanticKind, Shape};

use crate::classify::classify;
use crate::format::{format, parse_display, FormatOptions};
use crate::locale::{self, LocaleContext};
use crate::normalize::normalize;
use crate::number::NumberType;
use crate::value::{CanonicalValue, RawValue};

/// Outcome of resolving a cell
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCell {
    pub kind: SemanticKind,
    /// Locale-formatted value; empty when the raw value did not normalize
    pub display_value: String,
    /// Canonical value, or None when normalization failed
    pub canonical: Option<CanonicalValue>,
}

fn shape_kind(shape: Option<&str>) -> Option<SemanticKind> {
    let code = shape?;
    if code.trim().is_empty() {
        return None;
    }
    match Shape::parse(code) {
        Some(shape) => Some(shape.kind()),
        None => {
            tracing::debug!("Ignoring unknown shape code {code:?}");
            None
        }
    }
}

/// Resolve the semantic kind of a cell.
///
/// Order: cell shape, cell tag, column shape, column tag, then
/// [`SemanticKind::String`]. Unknown shape codes are skipped. A cell tag is
/// final even when it classifies as a plain string.
pub fn resolve_kind(cell: &Cell, column: &Column) -> SemanticKind {
    if let Some(kind) = shape_kind(cell.shape.as_deref()) {
        return kind;
    }
    if let Some(obj) = &cell.obj {
        return classify(Some(obj));
    }
    if let Some(kind) = shape_kind(column.shape.as_deref()) {
        return kind;
    }
    classify(column.obj.as_ref())
}

/// The tag whose `p` carries a parsing pattern for the cell
fn effective_tag<'a>(cell: &'a Cell, column: &'a Column) -> Option<&'a ObjectTag> {
    cell.obj.as_ref().or(column.obj.as_ref())
}

fn parse_pattern<'a>(kind: SemanticKind, cell: &'a Cell, column: &'a Column) -> Option<&'a str> {
    if !kind.is_temporal() {
        return None;
    }
    effective_tag(cell, column)
        .map(|obj| obj.p.as_str())
        .filter(|p| !p.is_empty())
}

/// Format options implied by a column's numeric settings
pub fn column_format_options(column: &Column) -> FormatOptions {
    FormatOptions {
        decimals: column.decimals,
        number_type: column
            .number_type
            .as_deref()
            .map(NumberType::from_code)
            .unwrap_or_default(),
        ..FormatOptions::default()
    }
}

fn resolve_with(
    kind: SemanticKind,
    raw: &str,
    pattern: Option<&str>,
    opts: &FormatOptions,
    ctx: &LocaleContext,
) -> (String, Option<CanonicalValue>) {
    match normalize(RawValue::Text(raw), kind, pattern, ctx) {
        Ok(canonical) => (format(&canonical, kind, ctx, opts), Some(canonical)),
        Err(e) => {
            tracing::debug!("Cell value did not normalize as {}: {e}", kind.as_str());
            (String::new(), None)
        }
    }
}

/// Resolve kind and display value of a cell under `ctx`
pub fn resolve_cell(cell: &Cell, column: &Column, ctx: &LocaleContext) -> ResolvedCell {
    let kind = resolve_kind(cell, column);
    let opts = column_format_options(column);
    let pattern = parse_pattern(kind, cell, column);
    let (display_value, canonical) = resolve_with(kind, cell.raw_value(), pattern, &opts, ctx);
    ResolvedCell {
        kind,
        display_value,
        canonical,
    }
}

/// Display string of a cell under `ctx`
pub fn cell_value_for_display(column: &Column, cell: &Cell, ctx: &LocaleContext) -> String {
    resolve_cell(cell, column, ctx).display_value
}

/// Parse user input for a cell and commit the canonical value to it.
///
/// On error the cell is left untouched so the caller can report the problem.
pub fn commit_input(
    cell: &mut Cell,
    column: &Column,
    input: &str,
    ctx: &LocaleContext,
) -> Result<CanonicalValue, ParseError> {
    let kind = resolve_kind(cell, column);
    let mut opts = column_format_options(column);
    opts.pattern = parse_pattern(kind, cell, column).map(str::to_string);
    let canonical = parse_display(input, kind, ctx, &opts)?;
    cell.commit_edit(canonical.to_canonical_string());
    Ok(canonical)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MemoKey {
    kind: SemanticKind,
    raw: String,
    pattern: Option<String>,
    decimals: Option<u32>,
    number_type: NumberType,
}

/// Default number of memoized values kept by a [`CellResolver`]
pub const DEFAULT_MEMO_CAPACITY: usize = 4096;

/// Resolves cells against one locale snapshot, memoizing display values.
///
/// Results are identical to [`resolve_cell`]; the memo only avoids repeated
/// parsing of recurring values. It is dropped whenever the snapshot changes,
/// and when it reaches its capacity.
#[derive(Debug)]
pub struct CellResolver {
    ctx: Arc<LocaleContext>,
    memo: AHashMap<MemoKey, (String, Option<CanonicalValue>)>,
    capacity: usize,
}

impl CellResolver {
    pub fn new(ctx: Arc<LocaleContext>) -> Self {
        Self::with_capacity(ctx, DEFAULT_MEMO_CAPACITY)
    }

    /// Resolver keeping at most `capacity` memoized values (at least one)
    pub fn with_capacity(ctx: Arc<LocaleContext>, capacity: usize) -> Self {
        Self {
            ctx,
            memo: AHashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Resolver bound to the current process-wide snapshot
    pub fn from_global() -> Self {
        Self::new(locale::current())
    }

    pub fn context(&self) -> &Arc<LocaleContext> {
        &self.ctx
    }

    /// Switch to another snapshot
    pub fn set_context(&mut self, ctx: Arc<LocaleContext>) {
        if !Arc::ptr_eq(&self.ctx, &ctx) && *self.ctx != *ctx {
            self.memo.clear();
        }
        self.ctx = ctx;
    }

    /// Pick up the current process-wide snapshot
    pub fn refresh(&mut self) {
        self.set_context(locale::current());
    }

    /// Number of memoized values
    pub fn cached(&self) -> usize {
        self.memo.len()
    }

    pub fn resolve(&mut self, cell: &Cell, column: &Column) -> ResolvedCell {
        let kind = resolve_kind(cell, column);
        let opts = column_format_options(column);
        let pattern = parse_pattern(kind, cell, column);
        let key = MemoKey {
            kind,
            raw: cell.raw_value().to_string(),
            pattern: pattern.map(str::to_string),
            decimals: opts.decimals,
            number_type: opts.number_type,
        };

        if self.memo.len() >= self.capacity && !self.memo.contains_key(&key) {
            tracing::trace!("Display memo full at {} values, clearing", self.memo.len());
            self.memo.clear();
        }

        let ctx = &self.ctx;
        let (display_value, canonical) = self
            .memo
            .entry(key)
            .or_insert_with_key(|key| resolve_with(kind, &key.raw, pattern, &opts, ctx))
            .clone();
        ResolvedCell {
            kind,
            display_value,
            canonical,
        }
    }

    pub fn display_value(&mut self, cell: &Cell, column: &Column) -> String {
        self.resolve(cell, column).display_value
    }
}
