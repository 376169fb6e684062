//! Resource kinds served by the mock

/// How a list response is wrapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// `{pagination: {data, current_page, per_page, total_items, total_pages}}`
    Nested,
    /// `{data, page, perPage, totalItems, totalPages}`
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Brands,
    Categories,
    SubCategories,
    SubItems,
    Products,
    ProductTypes,
    Units,
    Vendors,
    Warehouses,
    PaymentTypes,
    Stocks,
    SerialNumbers,
    Variants,
    Transactions,
    /// Only reachable through the employees report
    Employees,
}

impl ResourceKind {
    /// Kinds reachable under `/api/{segment}`
    pub const ROUTABLE: [ResourceKind; 14] = [
        Self::Brands,
        Self::Categories,
        Self::SubCategories,
        Self::SubItems,
        Self::Products,
        Self::ProductTypes,
        Self::Units,
        Self::Vendors,
        Self::Warehouses,
        Self::PaymentTypes,
        Self::Stocks,
        Self::SerialNumbers,
        Self::Variants,
        Self::Transactions,
    ];

    pub fn segment(self) -> &'static str {
        match self {
            Self::Brands => "brands",
            Self::Categories => "categories",
            Self::SubCategories => "sub-categories",
            Self::SubItems => "sub-items",
            Self::Products => "products",
            Self::ProductTypes => "product-type",
            Self::Units => "units",
            Self::Vendors => "vendors",
            Self::Warehouses => "warehouses",
            Self::PaymentTypes => "payment-types",
            Self::Stocks => "stocks",
            Self::SerialNumbers => "serial-list",
            Self::Variants => "variants",
            Self::Transactions => "transaction",
            Self::Employees => "employees",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ROUTABLE.into_iter().find(|kind| kind.segment() == segment)
    }

    /// Used in response messages ("Brand created successfully")
    pub fn singular(self) -> &'static str {
        match self {
            Self::Brands => "Brand",
            Self::Categories => "Category",
            Self::SubCategories => "Sub category",
            Self::SubItems => "Sub item",
            Self::Products => "Product",
            Self::ProductTypes => "Product type",
            Self::Units => "Unit",
            Self::Vendors => "Vendor",
            Self::Warehouses => "Warehouse",
            Self::PaymentTypes => "Payment type",
            Self::Stocks => "Stock",
            Self::SerialNumbers => "Serial number",
            Self::Variants => "Variant",
            Self::Transactions => "Transaction",
            Self::Employees => "Employee",
        }
    }

    pub fn envelope(self) -> Envelope {
        match self {
            Self::Stocks
            | Self::SerialNumbers
            | Self::Variants
            | Self::Transactions
            | Self::Employees => Envelope::Flat,
            _ => Envelope::Nested,
        }
    }

    /// Fields every create/update body must carry, with their message
    pub fn required(self) -> &'static [(&'static str, &'static str)] {
        const NAME: (&str, &str) = ("name", "The name field is required.");
        match self {
            Self::SubCategories => &[NAME, ("cat_id", "The category field is required.")],
            Self::SubItems => &[
                NAME,
                ("sub_category_id", "The sub category field is required."),
            ],
            Self::Products => &[NAME, ("category_id", "The category field is required.")],
            Self::Stocks => &[
                ("product_id", "The product field is required."),
                ("vendor_id", "The vendor field is required."),
                ("warehouse_id", "The warehouse field is required."),
                ("quantity", "The quantity field is required."),
            ],
            Self::SerialNumbers => &[("sku", "The sku field is required.")],
            Self::Variants => &[NAME, ("product_id", "The product field is required.")],
            Self::Transactions => &[
                ("reference", "The reference field is required."),
                ("amount", "The amount field is required."),
            ],
            _ => &[NAME],
        }
    }

    /// Numeric fields that may not be negative
    pub fn non_negative(self) -> &'static [&'static str] {
        match self {
            Self::Stocks => &[
                "quantity",
                "buying_price",
                "paid_amount",
                "tax",
                "selling_price",
            ],
            Self::Products => &["buying_price", "selling_price"],
            Self::Variants => &["price"],
            _ => &[],
        }
    }

    /// Fields matched by `keyword`
    pub fn searchable(self) -> &'static [&'static str] {
        match self {
            Self::Stocks => &["product_name", "sku"],
            Self::SerialNumbers => &["sku", "bar_code", "color"],
            Self::Transactions => &["reference", "note"],
            Self::Vendors => &["name", "email", "phone"],
            Self::Products => &["name", "code"],
            _ => &["name"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_round_trip() {
        for kind in ResourceKind::ROUTABLE {
            assert_eq!(ResourceKind::from_segment(kind.segment()), Some(kind));
        }
        assert_eq!(ResourceKind::from_segment("employees"), None);
        assert_eq!(ResourceKind::from_segment("orders"), None);
    }

    #[test]
    fn test_envelope_split() {
        assert_eq!(ResourceKind::Brands.envelope(), Envelope::Nested);
        assert_eq!(ResourceKind::Stocks.envelope(), Envelope::Flat);
        assert_eq!(ResourceKind::Transactions.envelope(), Envelope::Flat);
    }
}
