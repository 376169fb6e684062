//! Stock entry form
//!
//! Holds the in-progress values of a stock entry and keeps the derived
//! fields consistent while the user types.
//!
//! # Modes
//!
//! - [`FormMode::Create`]: `total_amount` and `due_amount` are recomputed on
//!   every change, and serial inputs follow the quantity for electronic
//!   products.
//! - [`FormMode::Edit`]: the loaded record's totals are kept as a snapshot
//!   and serial inputs are never resized. Historical totals stay as they
//!   were recorded even if quantity or price are corrected.

use super::calculator::{StockTotals, parse_amount, parse_quantity};
use super::serial::{MAX_SERIAL_UNITS, SerialField, SerialFields, SerialInputs};
use crate::error::FormError;
use crate::models::{Status, StockEntry};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use validator::Validate;

/// Whether the form creates a new entry or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: i64 },
}

impl FormMode {
    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create)
    }
}

/// Stock entry form state
#[derive(Debug, Clone)]
pub struct StockForm {
    mode: FormMode,
    product_id: Option<i64>,
    is_electronic: bool,
    pub vendor_id: Option<i64>,
    pub warehouse_id: Option<i64>,
    pub payment_type_id: Option<i64>,
    quantity: u32,
    buying_price: Decimal,
    paid_amount: Decimal,
    totals: StockTotals,
    pub tax: Decimal,
    pub selling_price: Option<Decimal>,
    pub commission: Decimal,
    pub stock_date: NaiveDate,
    pub expire_date: Option<NaiveDate>,
    pub status: Status,
    serials: SerialInputs,
}

impl StockForm {
    /// Empty form for a new entry, dated today
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            product_id: None,
            is_electronic: false,
            vendor_id: None,
            warehouse_id: None,
            payment_type_id: None,
            quantity: 0,
            buying_price: Decimal::ZERO,
            paid_amount: Decimal::ZERO,
            totals: StockTotals::default(),
            tax: Decimal::ZERO,
            selling_price: None,
            commission: Decimal::ZERO,
            stock_date: chrono::Local::now().date_naive(),
            expire_date: None,
            status: Status::Active,
            serials: SerialInputs::new(),
        }
    }

    /// Form for editing a stored entry
    ///
    /// Totals are copied from the record and stay fixed.
    pub fn edit(entry: &StockEntry, is_electronic: bool) -> Self {
        let serials = SerialInputs::from_fields(&SerialFields {
            sku: entry.sku.clone().unwrap_or_default(),
            color: entry.color.clone().unwrap_or_default(),
            bar_code: entry.bar_code.clone().unwrap_or_default(),
            note: entry.note.clone().unwrap_or_default(),
        });

        let mut form = Self {
            mode: FormMode::Edit { id: entry.id },
            product_id: Some(entry.product_id),
            is_electronic,
            vendor_id: entry.vendor_id,
            warehouse_id: entry.warehouse_id,
            payment_type_id: entry.payment_type_id,
            quantity: entry.quantity,
            buying_price: entry.buying_price,
            paid_amount: entry.paid_amount,
            totals: StockTotals {
                total_amount: entry.total_amount,
                due_amount: entry.due_amount,
            },
            tax: entry.tax.unwrap_or_default(),
            selling_price: entry.selling_price,
            commission: entry.commission.unwrap_or_default(),
            stock_date: entry
                .stock_date
                .as_deref()
                .and_then(parse_date)
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
            expire_date: entry.expire_date.as_deref().and_then(parse_date),
            status: entry.status,
            serials,
        };
        form.sync_serials();
        form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn product_id(&self) -> Option<i64> {
        self.product_id
    }

    pub fn is_electronic(&self) -> bool {
        self.is_electronic
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn buying_price(&self) -> Decimal {
        self.buying_price
    }

    pub fn paid_amount(&self) -> Decimal {
        self.paid_amount
    }

    pub fn total_amount(&self) -> Decimal {
        self.totals.total_amount
    }

    pub fn due_amount(&self) -> Decimal {
        self.totals.due_amount
    }

    pub fn serials(&self) -> &SerialInputs {
        &self.serials
    }

    /// Select the product and whether its type is tracked per unit
    pub fn select_product(&mut self, product_id: i64, is_electronic: bool) {
        self.product_id = Some(product_id);
        self.is_electronic = is_electronic;
        self.sync_serials();
    }

    pub fn set_quantity(&mut self, input: &str) {
        self.quantity = parse_quantity(input);
        self.recompute();
        self.sync_serials();
    }

    pub fn set_buying_price(&mut self, input: &str) {
        self.buying_price = parse_amount(input);
        self.recompute();
    }

    pub fn set_paid_amount(&mut self, input: &str) {
        self.paid_amount = parse_amount(input);
        self.recompute();
    }

    pub fn set_tax(&mut self, input: &str) {
        self.tax = parse_amount(input);
    }

    /// Blank input clears the selling price
    pub fn set_selling_price(&mut self, input: &str) {
        self.selling_price = (!input.trim().is_empty()).then(|| parse_amount(input));
    }

    pub fn set_commission(&mut self, input: &str) {
        self.commission = parse_amount(input);
    }

    /// Edit one attribute of one unit; `false` if the unit does not exist
    pub fn set_serial(&mut self, index: usize, field: SerialField, value: impl Into<String>) -> bool {
        self.serials.set(index, field, value)
    }

    fn recompute(&mut self) {
        if self.mode.is_create() {
            self.totals = StockTotals::compute(self.quantity, self.buying_price, self.paid_amount);
        }
    }

    /// Electronic products get one slot per unit (create mode only); any
    /// other product keeps a single slot for its SKU, color, barcode and note
    fn sync_serials(&mut self) {
        if !self.is_electronic {
            if self.serials.is_empty() {
                self.serials.resize(1);
            }
        } else if self.quantity > 0 && self.mode.is_create() {
            self.serials.resize(self.quantity as usize);
        }
    }

    /// Validate and build the outbound payload
    ///
    /// Serial checks run first so a blank SKU is always reported as
    /// `sku_required`, then the required selections are checked.
    pub fn submission(&self) -> Result<StockSubmission, FormError> {
        if self.is_electronic {
            if self.quantity as usize > MAX_SERIAL_UNITS {
                return Err(FormError::TooManyUnits {
                    requested: self.quantity as usize,
                    max: MAX_SERIAL_UNITS,
                });
            }
            if self.mode.is_create() && self.serials.len() != self.quantity as usize {
                return Err(FormError::SerialCountMismatch {
                    expected: self.quantity as usize,
                    actual: self.serials.len(),
                });
            }
            self.serials.validate()?;
        }

        let submission = StockSubmission {
            product_id: self.product_id,
            vendor_id: self.vendor_id,
            warehouse_id: self.warehouse_id,
            payment_type_id: self.payment_type_id,
            quantity: self.quantity,
            buying_price: self.buying_price,
            tax: self.tax,
            selling_price: self.selling_price,
            total_amount: self.totals.total_amount,
            paid_amount: self.paid_amount,
            due_amount: self.totals.due_amount,
            stock_date: self.stock_date,
            expire_date: self.expire_date,
            commission: self.commission,
            status: self.status,
            serial: self.serials.to_fields(self.is_electronic),
        };
        submission.validate()?;
        Ok(submission)
    }
}

impl Default for StockForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Accepts `2024-05-01` and datetime strings starting with a date
fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Stock entry payload sent to `/api/stocks`
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct StockSubmission {
    #[validate(required(message = "Please select a product."))]
    pub product_id: Option<i64>,
    #[validate(required(message = "Please select a vendor."))]
    pub vendor_id: Option<i64>,
    #[validate(required(message = "Please select a warehouse."))]
    pub warehouse_id: Option<i64>,
    #[validate(required(message = "Please select a payment type."))]
    pub payment_type_id: Option<i64>,
    pub quantity: u32,
    pub buying_price: Decimal,
    pub tax: Decimal,
    pub selling_price: Option<Decimal>,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub due_amount: Decimal,
    pub stock_date: NaiveDate,
    pub expire_date: Option<NaiveDate>,
    pub commission: Decimal,
    pub status: Status,
    #[serde(flatten)]
    pub serial: SerialFields,
}
