//! Number lists decoded from attribute text
//!
//! A [NumberList] is an ordered, index addressable sequence of `f32` values. It is built
//! from text by tokenizing on [LIST_DELIMITERS] and parsing each token in order; the first
//! malformed token rejects the whole decode.
//!
//! Rendering joins the values with a single space. The default rendering is the shortest
//! decimal form that reads back to the same `f32`, always with `.` as the decimal point.

use crate::error::FormatError;
use crate::lexing::{parse_token, tokenize, Delimiters, LIST_DELIMITERS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Ordered sequence of numbers from a list-valued attribute
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberList {
    values: Vec<f32>,
}

/// How [NumberList::to_text_with] renders each value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Fixed number of decimal places; `None` renders the shortest round-trip form
    pub precision: Option<usize>,
}

impl NumberFormat {
    pub fn with_precision(precision: usize) -> Self {
        NumberFormat {
            precision: Some(precision),
        }
    }

    fn write_value(&self, f: &mut impl fmt::Write, value: f32) -> fmt::Result {
        match self.precision {
            Some(precision) => write!(f, "{value:.precision$}"),
            None => write!(f, "{value}"),
        }
    }
}

impl NumberList {
    pub fn new() -> Self {
        NumberList { values: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NumberList {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Decode a list using the standard list delimiters
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        Self::parse_with(text, LIST_DELIMITERS)
    }

    /// Decode a list, splitting on a caller supplied delimiter set
    pub fn parse_with(text: &str, delimiters: Delimiters) -> Result<Self, FormatError> {
        let mut list = NumberList::new();
        for token in tokenize(text, delimiters) {
            let value = parse_token(token)?;
            tracing::trace!(
                literal = token.as_str(),
                offset = token.start(),
                value,
                "decoded number"
            );
            list.push(value);
        }

        tracing::debug!(len = list.len(), "decoded number list");
        Ok(list)
    }

    /// Append a value
    pub fn push(&mut self, value: f32) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut f32> {
        self.values.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.values
    }

    /// Render with the default format, values joined by a single space
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Render with an explicit number format
    pub fn to_text_with(&self, format: &NumberFormat) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_with(&mut out, format);
        out
    }

    fn write_with(&self, f: &mut impl fmt::Write, format: &NumberFormat) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            format.write_value(f, *value)?;
        }
        Ok(())
    }
}

impl fmt::Display for NumberList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &NumberFormat::default())
    }
}

impl FromStr for NumberList {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumberList::parse(s)
    }
}

impl Index<usize> for NumberList {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.values[index]
    }
}

impl IndexMut<usize> for NumberList {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.values[index]
    }
}

impl From<Vec<f32>> for NumberList {
    fn from(values: Vec<f32>) -> Self {
        NumberList { values }
    }
}

impl From<NumberList> for Vec<f32> {
    fn from(list: NumberList) -> Self {
        list.values
    }
}

impl FromIterator<f32> for NumberList {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        NumberList {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<f32> for NumberList {
    fn extend<I: IntoIterator<Item = f32>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl IntoIterator for NumberList {
    type Item = f32;
    type IntoIter = std::vec::IntoIter<f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a NumberList {
    type Item = &'a f32;
    type IntoIter = std::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
