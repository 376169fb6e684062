//! Per-unit serial attribute inputs
//!
//! Electronic products are tracked per physical unit. The form keeps four
//! parallel sequences (SKU, color, barcode, note), one slot per unit, and
//! resizes them to follow the entered quantity. Retained slots are never
//! touched by a resize.

use crate::error::FormError;
use serde::{Deserialize, Serialize};

/// Most unit slots a single stock entry can hold
pub const MAX_SERIAL_UNITS: usize = 1000;

/// One of the four per-unit attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerialField {
    Sku,
    Color,
    Barcode,
    Note,
}

/// A single physical unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialUnit {
    pub sku: String,
    pub color: Option<String>,
    pub barcode: Option<String>,
    pub note: Option<String>,
}

/// Comma-joined serial attributes as sent to the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialFields {
    pub sku: String,
    pub color: String,
    pub bar_code: String,
    pub note: String,
}

/// Parallel per-unit input sequences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerialInputs {
    sku: Vec<String>,
    color: Vec<String>,
    barcode: Vec<String>,
    note: Vec<String>,
}

impl SerialInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inputs with `len` empty slots
    pub fn with_len(len: usize) -> Self {
        let mut inputs = Self::new();
        inputs.resize(len);
        inputs
    }

    /// Rebuild inputs from stored comma-joined fields
    ///
    /// Sequences are padded to the longest one so every unit has a slot.
    pub fn from_fields(fields: &SerialFields) -> Self {
        fn split(value: &str) -> Vec<String> {
            if value.trim().is_empty() {
                return Vec::new();
            }
            value.split(',').map(|s| s.trim().to_string()).collect()
        }

        let mut inputs = Self {
            sku: split(&fields.sku),
            color: split(&fields.color),
            barcode: split(&fields.bar_code),
            note: split(&fields.note),
        };
        let len = inputs
            .sku
            .len()
            .max(inputs.color.len())
            .max(inputs.barcode.len())
            .max(inputs.note.len());
        for seq in inputs.sequences_mut() {
            seq.resize(len, String::new());
        }
        inputs
    }

    /// Number of unit slots
    pub fn len(&self) -> usize {
        self.sku.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sku.is_empty()
    }

    /// Grow with empty slots or truncate to `len`
    ///
    /// Never grows past [`MAX_SERIAL_UNITS`].
    pub fn resize(&mut self, len: usize) {
        let len = len.min(MAX_SERIAL_UNITS);
        for seq in self.sequences_mut() {
            if len > seq.len() {
                seq.resize(len, String::new());
            } else {
                seq.truncate(len);
            }
        }
    }

    /// Set one attribute of one unit; returns `false` if `index` is out of range
    pub fn set(&mut self, index: usize, field: SerialField, value: impl Into<String>) -> bool {
        match self.sequence_mut(field).get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize, field: SerialField) -> Option<&str> {
        self.sequence(field).get(index).map(String::as_str)
    }

    /// Snapshot of every unit
    pub fn units(&self) -> Vec<SerialUnit> {
        fn optional(value: &str) -> Option<String> {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }

        (0..self.len())
            .map(|i| SerialUnit {
                sku: self.sku[i].trim().to_string(),
                color: optional(&self.color[i]),
                barcode: optional(&self.barcode[i]),
                note: optional(&self.note[i]),
            })
            .collect()
    }

    /// Every unit must carry a non-blank SKU
    pub fn validate(&self) -> Result<(), FormError> {
        match self.sku.iter().position(|sku| sku.trim().is_empty()) {
            Some(index) => Err(FormError::SkuRequired { index }),
            None => Ok(()),
        }
    }

    /// Flatten into the outbound fields
    ///
    /// Electronic products send every unit comma-joined. Anything else sends
    /// only the first slot of each sequence (or an empty string).
    pub fn to_fields(&self, is_electronic: bool) -> SerialFields {
        let flatten = |seq: &[String]| -> String {
            if is_electronic {
                seq.iter()
                    .map(|s| s.trim())
                    .collect::<Vec<_>>()
                    .join(",")
            } else {
                seq.first().map(|s| s.trim().to_string()).unwrap_or_default()
            }
        };

        SerialFields {
            sku: flatten(&self.sku),
            color: flatten(&self.color),
            bar_code: flatten(&self.barcode),
            note: flatten(&self.note),
        }
    }

    fn sequence(&self, field: SerialField) -> &Vec<String> {
        match field {
            SerialField::Sku => &self.sku,
            SerialField::Color => &self.color,
            SerialField::Barcode => &self.barcode,
            SerialField::Note => &self.note,
        }
    }

    fn sequence_mut(&mut self, field: SerialField) -> &mut Vec<String> {
        match field {
            SerialField::Sku => &mut self.sku,
            SerialField::Color => &mut self.color,
            SerialField::Barcode => &mut self.barcode,
            SerialField::Note => &mut self.note,
        }
    }

    fn sequences_mut(&mut self) -> [&mut Vec<String>; 4] {
        [
            &mut self.sku,
            &mut self.color,
            &mut self.barcode,
            &mut self.note,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(len: usize) -> SerialInputs {
        let mut inputs = SerialInputs::with_len(len);
        for i in 0..len {
            inputs.set(i, SerialField::Sku, format!("SN-{}", i));
            inputs.set(i, SerialField::Color, format!("color-{}", i));
            inputs.set(i, SerialField::Barcode, format!("{:08}", i));
            inputs.set(i, SerialField::Note, format!("note {}", i));
        }
        inputs
    }

    #[test]
    fn test_resize_grows_with_empty_slots() {
        let mut inputs = filled(2);
        inputs.resize(4);
        assert_eq!(inputs.len(), 4);
        assert_eq!(inputs.get(1, SerialField::Sku), Some("SN-1"));
        assert_eq!(inputs.get(3, SerialField::Sku), Some(""));
        assert_eq!(inputs.get(3, SerialField::Note), Some(""));
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut inputs = filled(3);
        inputs.resize(6);
        let after_first = inputs.clone();
        inputs.resize(6);
        assert_eq!(inputs, after_first);
    }

    #[test]
    fn test_grow_then_shrink_restores_original_prefix() {
        let mut inputs = filled(5);
        let original = inputs.clone();

        inputs.resize(8);
        inputs.set(6, SerialField::Sku, "extra");
        inputs.resize(5);

        assert_eq!(inputs, original);
    }

    #[test]
    fn test_resize_stops_at_unit_limit() {
        let mut inputs = filled(2);
        inputs.resize(4_000_000_000);
        assert_eq!(inputs.len(), MAX_SERIAL_UNITS);
        assert_eq!(inputs.get(1, SerialField::Sku), Some("SN-1"));
    }

    #[test]
    fn test_set_out_of_range() {
        let mut inputs = SerialInputs::with_len(1);
        assert!(!inputs.set(1, SerialField::Sku, "x"));
        assert!(inputs.set(0, SerialField::Sku, "x"));
    }

    #[test]
    fn test_validate_reports_first_blank_sku() {
        let mut inputs = SerialInputs::with_len(3);
        inputs.set(0, SerialField::Sku, "A1");
        inputs.set(1, SerialField::Sku, "   ");
        inputs.set(2, SerialField::Sku, "C3");
        assert_eq!(inputs.validate(), Err(FormError::SkuRequired { index: 1 }));
    }

    #[test]
    fn test_to_fields_electronic_joins_every_unit() {
        let mut inputs = SerialInputs::with_len(3);
        inputs.set(0, SerialField::Sku, "A1");
        inputs.set(1, SerialField::Sku, "B2");
        inputs.set(2, SerialField::Sku, "C3");
        inputs.set(1, SerialField::Color, "red");

        let fields = inputs.to_fields(true);
        assert_eq!(fields.sku, "A1,B2,C3");
        assert_eq!(fields.color, ",red,");
        assert_eq!(fields.bar_code, ",,");
    }

    #[test]
    fn test_to_fields_non_electronic_sends_first_slot_only() {
        let inputs = filled(3);
        let fields = inputs.to_fields(false);
        assert_eq!(fields.sku, "SN-0");
        assert_eq!(fields.note, "note 0");

        assert_eq!(SerialInputs::new().to_fields(false), SerialFields::default());
    }

    #[test]
    fn test_from_fields_pads_short_sequences() {
        let inputs = SerialInputs::from_fields(&SerialFields {
            sku: "A1,B2,C3".into(),
            color: "black".into(),
            bar_code: String::new(),
            note: String::new(),
        });
        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs.get(0, SerialField::Color), Some("black"));
        assert_eq!(inputs.get(2, SerialField::Color), Some(""));

        let units = inputs.units();
        assert_eq!(units[1].sku, "B2");
        assert_eq!(units[1].color, None);
    }
}
