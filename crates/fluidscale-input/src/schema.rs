//! The query-string schema
//!
//! One row per accepted key. Each row names the parser that turns the raw
//! text into a [`Value`], the validator that range-checks it, and the raw
//! default used when the key is absent. The table is walked exactly once per
//! query; typed assembly happens afterwards in [`ParsedQuery`].

use std::collections::{HashMap, HashSet};

use fluidscale_core::{format::MAX_DECIMAL_PLACES, parse_ratio};
use fluidscale_export::css::is_valid_naming_convention;

use crate::error::{InputError, Result};

/// Query keys, as they appear in shareable URLs
pub mod keys {
    pub const MIN_FONT_SIZE: &str = "minFontSize";
    pub const MAX_FONT_SIZE: &str = "maxFontSize";
    pub const MIN_WIDTH: &str = "minWidth";
    pub const MAX_WIDTH: &str = "maxWidth";
    pub const MIN_RATIO: &str = "minRatio";
    pub const MAX_RATIO: &str = "maxRatio";
    pub const STEPS: &str = "steps";
    pub const BASE_STEP: &str = "baseStep";
    pub const NAMING_CONVENTION: &str = "prefix";
    pub const DECIMALS: &str = "decimals";
    pub const USE_REMS: &str = "useRems";
    pub const REM_VALUE: &str = "remValue";
    pub const INCLUDE_FALLBACKS: &str = "includeFallbacks";
}

/// A parsed query value before it is placed into a typed request
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Integer(u32),
    Flag(bool),
    List(Vec<String>),
    Text(String),
}

/// Raw text (or its absence) to [`Value`]
pub type Parser = fn(&'static str, Option<&str>) -> Result<Value>;

/// Range and shape checks on a parsed [`Value`]
pub type Validator = fn(&'static str, &Value) -> Result<()>;

/// One row of the schema
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub key: &'static str,
    pub parser: Parser,
    pub validator: Validator,
    /// Raw value substituted when the key is absent; `None` hands the
    /// absence to the parser (checkboxes read it as unchecked)
    pub default: Option<&'static str>,
}

impl Field {
    /// Parse and validate this field from the query pairs
    pub fn read(&self, pairs: &HashMap<String, String>) -> Result<Value> {
        let raw = pairs.get(self.key).map(String::as_str).or(self.default);
        let value = (self.parser)(self.key, raw)?;
        (self.validator)(self.key, &value)?;
        Ok(value)
    }
}

pub const FIELDS: &[Field] = &[
    Field {
        key: keys::MIN_FONT_SIZE,
        parser: parse_number,
        validator: positive,
        default: Some("16"),
    },
    Field {
        key: keys::MAX_FONT_SIZE,
        parser: parse_number,
        validator: positive,
        default: Some("19"),
    },
    Field {
        key: keys::MIN_WIDTH,
        parser: parse_number,
        validator: positive,
        default: Some("400"),
    },
    Field {
        key: keys::MAX_WIDTH,
        parser: parse_number,
        validator: positive,
        default: Some("1280"),
    },
    Field {
        key: keys::MIN_RATIO,
        parser: parse_ratio_value,
        validator: above_one,
        default: Some("1.25"),
    },
    Field {
        key: keys::MAX_RATIO,
        parser: parse_ratio_value,
        validator: above_one,
        default: Some("1.333"),
    },
    Field {
        key: keys::STEPS,
        parser: parse_step_list,
        validator: accept,
        default: Some("sm,base,md,lg,xl,xxl,xxxl"),
    },
    Field {
        key: keys::BASE_STEP,
        parser: parse_text,
        validator: accept,
        default: Some("base"),
    },
    Field {
        key: keys::NAMING_CONVENTION,
        parser: parse_text,
        validator: naming_convention,
        default: Some("font-size"),
    },
    Field {
        key: keys::DECIMALS,
        parser: parse_integer,
        validator: decimal_places,
        default: Some("2"),
    },
    Field {
        key: keys::USE_REMS,
        parser: parse_checkbox,
        validator: accept,
        default: None,
    },
    Field {
        key: keys::REM_VALUE,
        parser: parse_number,
        validator: positive,
        default: Some("16"),
    },
    Field {
        key: keys::INCLUDE_FALLBACKS,
        parser: parse_checkbox,
        validator: accept,
        default: None,
    },
];

/// Look up a schema row by key
pub fn field(key: &str) -> Option<&'static Field> {
    FIELDS.iter().find(|f| f.key == key)
}

// ---------------------------------------------------------------------------
// Parsers
// ---------------------------------------------------------------------------

fn required<'a>(key: &'static str, raw: Option<&'a str>) -> Result<&'a str> {
    raw.ok_or(InputError::Missing { key })
}

/// A finite number; an empty value is not zero
pub fn parse_number(key: &'static str, raw: Option<&str>) -> Result<Value> {
    let raw = required(key, raw)?;
    let invalid = || InputError::InvalidNumber {
        key,
        value: raw.to_string(),
    };
    let number: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if number.is_finite() {
        Ok(Value::Number(number))
    } else {
        Err(invalid())
    }
}

/// A number or a named ratio such as `perfect-fourth`
pub fn parse_ratio_value(key: &'static str, raw: Option<&str>) -> Result<Value> {
    let raw = required(key, raw)?;
    match parse_ratio(raw) {
        Ok(ratio) if ratio.is_finite() => Ok(Value::Number(ratio)),
        _ => Err(InputError::InvalidNumber {
            key,
            value: raw.to_string(),
        }),
    }
}

/// A non-negative whole number; `2.0` is accepted as `2`
pub fn parse_integer(key: &'static str, raw: Option<&str>) -> Result<Value> {
    let raw = required(key, raw)?;
    let invalid = || InputError::InvalidInteger {
        key,
        value: raw.to_string(),
    };
    let number: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !number.is_finite() || number < 0.0 || number.fract() != 0.0 || number > u32::MAX as f64 {
        return Err(invalid());
    }
    Ok(Value::Integer(number as u32))
}

/// HTML checkbox semantics
///
/// Unchecked boxes are not serialized by forms, so absence means false. A
/// bare key (`?useRems`) means true, as do `on` (the form default) and `true`.
pub fn parse_checkbox(_key: &'static str, raw: Option<&str>) -> Result<Value> {
    let checked = match raw {
        None => false,
        Some("") => true,
        Some(value) => value == "on" || value == "true",
    };
    Ok(Value::Flag(checked))
}

/// `sm,base,md` with optional whitespace after each comma
pub fn parse_step_list(key: &'static str, raw: Option<&str>) -> Result<Value> {
    let raw = required(key, raw)?;
    let invalid = || InputError::InvalidStepList {
        key,
        value: raw.to_string(),
    };

    let mut steps = Vec::new();
    for (index, item) in raw.split(',').enumerate() {
        let item = if index == 0 { item } else { item.trim_start() };
        let well_formed =
            !item.is_empty() && item.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !well_formed {
            return Err(invalid());
        }
        steps.push(item.to_string());
    }
    Ok(Value::List(steps))
}

pub fn parse_text(key: &'static str, raw: Option<&str>) -> Result<Value> {
    Ok(Value::Text(required(key, raw)?.trim().to_string()))
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

pub fn accept(_key: &'static str, _value: &Value) -> Result<()> {
    Ok(())
}

pub fn positive(key: &'static str, value: &Value) -> Result<()> {
    match value {
        Value::Number(n) if *n <= 0.0 => Err(InputError::OutOfRange {
            key,
            value: *n,
            expected: "must be greater than 0",
        }),
        _ => Ok(()),
    }
}

pub fn above_one(key: &'static str, value: &Value) -> Result<()> {
    match value {
        Value::Number(n) if *n <= 1.0 => Err(InputError::OutOfRange {
            key,
            value: *n,
            expected: "must be greater than 1",
        }),
        _ => Ok(()),
    }
}

pub fn decimal_places(key: &'static str, value: &Value) -> Result<()> {
    match value {
        Value::Integer(n) if *n > MAX_DECIMAL_PLACES => Err(InputError::OutOfRange {
            key,
            value: f64::from(*n),
            expected: "must be at most 10",
        }),
        _ => Ok(()),
    }
}

pub fn naming_convention(key: &'static str, value: &Value) -> Result<()> {
    match value {
        Value::Text(prefix) if !is_valid_naming_convention(prefix) => {
            Err(InputError::InvalidNamingConvention {
                key,
                value: prefix.clone(),
            })
        }
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Parsed values
// ---------------------------------------------------------------------------

/// Every schema field, parsed and validated
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    values: HashMap<&'static str, Value>,
}

impl ParsedQuery {
    /// Walk the schema over decoded query pairs
    pub fn from_pairs(pairs: &HashMap<String, String>) -> Result<Self> {
        let mut values = HashMap::with_capacity(FIELDS.len());
        for field in FIELDS {
            values.insert(field.key, field.read(pairs)?);
        }

        let known: HashSet<&str> = FIELDS.iter().map(|f| f.key).collect();
        for key in pairs.keys().filter(|k| !known.contains(k.as_str())) {
            log::debug!("Ignoring unknown query parameter '{key}'");
        }

        Ok(Self { values })
    }

    pub fn number(&self, key: &'static str) -> Result<f64> {
        match self.values.get(key) {
            Some(Value::Number(n)) => Ok(*n),
            _ => Err(InputError::Missing { key }),
        }
    }

    pub fn integer(&self, key: &'static str) -> Result<u32> {
        match self.values.get(key) {
            Some(Value::Integer(n)) => Ok(*n),
            _ => Err(InputError::Missing { key }),
        }
    }

    pub fn flag(&self, key: &'static str) -> Result<bool> {
        match self.values.get(key) {
            Some(Value::Flag(b)) => Ok(*b),
            _ => Err(InputError::Missing { key }),
        }
    }

    pub fn list(&self, key: &'static str) -> Result<Vec<String>> {
        match self.values.get(key) {
            Some(Value::List(items)) => Ok(items.clone()),
            _ => Err(InputError::Missing { key }),
        }
    }

    pub fn text(&self, key: &'static str) -> Result<String> {
        match self.values.get(key) {
            Some(Value::Text(text)) => Ok(text.clone()),
            _ => Err(InputError::Missing { key }),
        }
    }
}
