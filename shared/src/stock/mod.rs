//! Stock entry form engine
//!
//! - [`calculator`]: derived money fields (`total_amount`, `due_amount`)
//! - [`serial`]: per-unit serial/color/barcode/note inputs for electronic products
//! - [`form`]: the stock entry form tying both together, with create/edit modes

pub mod calculator;
pub mod form;
pub mod serial;

pub use calculator::{StockTotals, due_amount, parse_amount, parse_quantity, round_money, total_amount};
pub use form::{FormMode, StockForm, StockSubmission};
pub use serial::{MAX_SERIAL_UNITS, SerialField, SerialFields, SerialInputs, SerialUnit};
