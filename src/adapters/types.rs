use crate::error::{PipelineError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Where a raw record came from, carried into every lookup error
#[derive(Debug, Clone)]
pub struct RecordContext<'a> {
    pub adapter: &'static str,
    pub path: &'a Path,
    pub index: usize,
}

/// Read a raw source file fully and return its top-level record array.
///
/// The file handle is closed before this returns.
pub fn load_records(adapter: &'static str, path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PipelineError::SourceMissing {
            adapter,
            path: path.to_path_buf(),
        },
        _ => PipelineError::SourceUnreadable {
            adapter,
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    debug!("Read {} bytes from {}", content.len(), path.display());

    let document: Value =
        serde_json::from_str(&content).map_err(|e| PipelineError::SourceMalformed {
            adapter,
            path: path.to_path_buf(),
            source: e,
        })?;

    match document {
        Value::Array(records) => Ok(records),
        _ => Err(PipelineError::NotARecordArray {
            adapter,
            path: path.to_path_buf(),
        }),
    }
}

/// Field lookups over one raw record.
///
/// Required lookups fail with the record's context; optional lookups treat
/// a missing key and an explicit `null` the same way and never fail.
#[derive(Debug, Clone)]
pub struct RawRecord<'a> {
    fields: &'a Map<String, Value>,
    ctx: RecordContext<'a>,
    prefix: String,
}

impl<'a> RawRecord<'a> {
    pub fn new(value: &'a Value, ctx: RecordContext<'a>) -> Result<Self> {
        match value.as_object() {
            Some(fields) => Ok(Self {
                fields,
                ctx,
                prefix: String::new(),
            }),
            None => Err(PipelineError::RecordNotObject {
                adapter: ctx.adapter,
                path: ctx.path.to_path_buf(),
                index: ctx.index,
            }),
        }
    }

    fn field_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    fn missing(&self, key: &str) -> PipelineError {
        PipelineError::MissingField {
            adapter: self.ctx.adapter,
            path: self.ctx.path.to_path_buf(),
            index: self.ctx.index,
            field: self.field_name(key),
        }
    }

    fn invalid(&self, key: &str, expected: &'static str) -> PipelineError {
        PipelineError::InvalidField {
            adapter: self.ctx.adapter,
            path: self.ctx.path.to_path_buf(),
            index: self.ctx.index,
            field: self.field_name(key),
            expected,
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    fn require(&self, key: &str) -> Result<&'a Value> {
        self.get(key).ok_or_else(|| self.missing(key))
    }

    pub fn required_str(&self, key: &str) -> Result<String> {
        self.require(key)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.invalid(key, "a string"))
    }

    /// Identifier-like field: a string, or an integer rendered in decimal
    pub fn required_code(&self, key: &str) -> Result<String> {
        match self.require(key)? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
            _ => Err(self.invalid(key, "a string or integer")),
        }
    }

    pub fn required_i64(&self, key: &str) -> Result<i64> {
        as_integer(self.require(key)?).ok_or_else(|| self.invalid(key, "an integer"))
    }

    pub fn required_f64(&self, key: &str) -> Result<f64> {
        self.require(key)?
            .as_f64()
            .ok_or_else(|| self.invalid(key, "a number"))
    }

    /// Absent or `null` yields `None`; a present value of the wrong type is still an error
    pub fn optional_i64(&self, key: &str) -> Result<Option<i64>> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => as_integer(v)
                .map(Some)
                .ok_or_else(|| self.invalid(key, "an integer")),
        }
    }

    /// Raw value copied verbatim, `null` when absent
    pub fn optional_raw(&self, key: &str) -> Value {
        self.get(key).cloned().unwrap_or(Value::Null)
    }

    pub fn required_object(&self, key: &str) -> Result<RawRecord<'a>> {
        self.nested(key, self.require(key)?)
    }

    fn nested(&self, key: &str, value: &'a Value) -> Result<RawRecord<'a>> {
        let fields = value
            .as_object()
            .ok_or_else(|| self.invalid(key, "an object"))?;
        Ok(RawRecord {
            fields,
            ctx: self.ctx.clone(),
            prefix: format!("{}.", self.field_name(key)),
        })
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}
