//! Digit specifications
//!
//! A digit specification describes one position of a clock: how many
//! distinct states it cycles through (its *limit*) and how a raw counter
//! at that position renders into a domain [`Value`].
//!
//! | Variant     | Limit                            | Rendering                 |
//! |-------------|----------------------------------|---------------------------|
//! | `FixedBase` | `n`                              | the counter itself        |
//! | `Symbols`   | number of symbols                | symbol at index `counter` |
//! | `Range`     | `ceil((stop - start) / step)`    | `start + counter * step`  |

use crate::error::{Error, Result};
use crate::value::Value;

/// Specification of a single clock digit
#[derive(Debug, Clone, PartialEq)]
pub enum DigitSpec {
    /// Counts `0..n`, renders as the counter
    FixedBase(u64),
    /// Cycles through the listed symbols, rendering each unchanged
    Symbols(Vec<Value>),
    /// Arithmetic progression `start, start + step, ...` stopping before `stop`
    Range {
        /// First rendered value
        start: i64,
        /// Exclusive bound
        stop: i64,
        /// Stride between values, never zero
        step: i64,
    },
}

impl DigitSpec {
    /// Fixed base digit counting `0..n`
    pub fn fixed(n: u64) -> Self {
        DigitSpec::FixedBase(n)
    }

    /// Digit cycling through an explicit list of symbols
    pub fn symbols<I, V>(symbols: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        DigitSpec::Symbols(symbols.into_iter().map(Into::into).collect())
    }

    /// Range digit with a stride of one
    pub fn range(start: i64, stop: i64) -> Self {
        DigitSpec::range_step(start, stop, 1)
    }

    /// Range digit with an explicit stride
    pub fn range_step(start: i64, stop: i64, step: i64) -> Self {
        DigitSpec::Range { start, stop, step }
    }

    /// Build a spec from untyped JSON-like data
    ///
    /// - non-negative integer: fixed base
    /// - array: symbol list, elements converted to [`Value`]; integers past
    ///   `i64::MAX` are rejected
    /// - object with integer `start`, `stop` and optional `step` (default 1): range
    ///
    /// # Errors
    ///
    /// Anything else is `UnsupportedSpec`.
    pub fn from_json(raw: &serde_json::Value) -> Result<Self> {
        match raw {
            serde_json::Value::Number(n) => match n.as_u64() {
                Some(base) => Ok(DigitSpec::FixedBase(base)),
                None if n.is_i64() => Err(Error::unsupported_spec(format!(
                    "negative base {}",
                    n
                ))),
                None => Err(Error::unsupported_spec(format!(
                    "non-integer base {}",
                    n
                ))),
            },
            serde_json::Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    Value::try_from(item.clone()).map_err(|e| {
                        Error::unsupported_spec(format!("symbol {}: {}", index, e))
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(DigitSpec::Symbols),
            serde_json::Value::Object(fields) => {
                if let Some(key) = fields
                    .keys()
                    .find(|k| !matches!(k.as_str(), "start" | "stop" | "step"))
                {
                    return Err(Error::unsupported_spec(format!(
                        "unknown range field '{}'",
                        key
                    )));
                }
                let field = |name: &str| -> Result<Option<i64>> {
                    match fields.get(name) {
                        None => Ok(None),
                        Some(v) => v.as_i64().map(Some).ok_or_else(|| {
                            Error::unsupported_spec(format!(
                                "range field '{}' must be an integer, got {}",
                                name, v
                            ))
                        }),
                    }
                };
                let start = field("start")?
                    .ok_or_else(|| Error::unsupported_spec("range is missing 'start'"))?;
                let stop = field("stop")?
                    .ok_or_else(|| Error::unsupported_spec("range is missing 'stop'"))?;
                let step = field("step")?.unwrap_or(1);
                Ok(DigitSpec::Range { start, stop, step })
            }
            other => Err(Error::unsupported_spec(format!(
                "expected integer, list or range, got {}",
                other
            ))),
        }
    }

    /// Number of states this digit cycles through, before validation
    ///
    /// May be zero or negative for empty and reversed ranges.
    fn raw_limit(&self) -> Result<i128> {
        match self {
            DigitSpec::FixedBase(n) => Ok(*n as i128),
            DigitSpec::Symbols(symbols) => Ok(symbols.len() as i128),
            DigitSpec::Range { start, stop, step } => {
                if *step == 0 {
                    return Err(Error::unsupported_spec("range step must not be zero"));
                }
                let span = *stop as i128 - *start as i128;
                let (span, step) = if *step < 0 {
                    (-span, -(*step as i128))
                } else {
                    (span, *step as i128)
                };
                // ceil(span / step) for positive step
                Ok(-((-span).div_euclid(step)))
            }
        }
    }
}

/// Limit of a spec standing at `position`
pub(crate) fn limit_at(position: usize, spec: &DigitSpec) -> Result<u64> {
    let limit = spec.raw_limit()?;
    if limit <= 0 {
        return Err(Error::DegenerateBase { position, limit });
    }
    u64::try_from(limit).map_err(|_| Error::overflow(format!("limit {} exceeds u64", limit)))
}

/// Number of distinct states of a single digit
///
/// # Errors
///
/// - `UnsupportedSpec` for a range with a zero step
/// - `DegenerateBase` (reported at position 0) when the spec has no states
pub fn limit_of(spec: &DigitSpec) -> Result<u64> {
    limit_at(0, spec)
}

/// Limits of every digit, most significant first
pub fn limits_of(specs: &[DigitSpec]) -> Result<Vec<u64>> {
    specs
        .iter()
        .enumerate()
        .map(|(position, spec)| limit_at(position, spec))
        .collect()
}

/// Render a counter at `position` into its domain value
pub(crate) fn render_at(position: usize, spec: &DigitSpec, counter: u64) -> Result<Value> {
    let limit = limit_at(position, spec)?;
    if counter >= limit {
        return Err(Error::CounterOutOfRange {
            position,
            counter,
            limit,
        });
    }
    match spec {
        DigitSpec::FixedBase(_) => i64::try_from(counter)
            .map(Value::Int)
            .map_err(|_| Error::overflow(format!("counter {} exceeds i64", counter))),
        DigitSpec::Symbols(symbols) => Ok(symbols[counter as usize].clone()),
        DigitSpec::Range { start, step, .. } => {
            let value = *start as i128 + counter as i128 * *step as i128;
            i64::try_from(value)
                .map(Value::Int)
                .map_err(|_| Error::overflow(format!("range value {} exceeds i64", value)))
        }
    }
}

/// Render a counter of a single digit into its domain value
///
/// # Errors
///
/// - Any error of [`limit_of`]
/// - `CounterOutOfRange` when `counter >= limit_of(spec)`
pub fn render(spec: &DigitSpec, counter: u64) -> Result<Value> {
    render_at(0, spec, counter)
}
