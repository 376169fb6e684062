//! Related lists for form selectors and denormalized display
//!
//! A page showing products needs category, brand and unit names; the
//! stock form needs vendors, warehouses and payment types. [`Lookups`]
//! loads all of them at once.

use shared::CatalogRecord;
use shared::models::{
    Brand, Category, PaymentType, Product, ProductType, Unit, Vendor, Warehouse,
};

use crate::catalog::resource::{
    Brands, Categories, PaymentTypes, ProductTypes, Resource, Units, Vendors, Warehouses,
    fetch_page,
};
use crate::client::HttpClient;
use crate::query::ListQuery;

/// Page size used for lookup lists
pub const LOOKUP_LIMIT: u32 = 1000;

/// Every selector list, loaded together
#[derive(Debug, Clone, Default)]
pub struct Lookups {
    pub categories: Vec<Category>,
    pub brands: Vec<Brand>,
    pub units: Vec<Unit>,
    pub product_types: Vec<ProductType>,
    pub vendors: Vec<Vendor>,
    pub warehouses: Vec<Warehouse>,
    pub payment_types: Vec<PaymentType>,
    /// Lists that failed to load and were left empty
    pub failed: Vec<&'static str>,
}

impl Lookups {
    /// Fetch all lookup lists concurrently
    ///
    /// A failing list is left empty and recorded in `failed`; the others
    /// are still used.
    pub async fn load<C: HttpClient>(client: &C) -> Self {
        let (categories, brands, units, product_types, vendors, warehouses, payment_types) = futures::join!(
            fetch_all::<C, Categories>(client),
            fetch_all::<C, Brands>(client),
            fetch_all::<C, Units>(client),
            fetch_all::<C, ProductTypes>(client),
            fetch_all::<C, Vendors>(client),
            fetch_all::<C, Warehouses>(client),
            fetch_all::<C, PaymentTypes>(client),
        );

        let mut failed = Vec::new();
        let categories = or_failed(categories, Categories::LABEL, &mut failed);
        let brands = or_failed(brands, Brands::LABEL, &mut failed);
        let units = or_failed(units, Units::LABEL, &mut failed);
        let product_types = or_failed(product_types, ProductTypes::LABEL, &mut failed);
        let vendors = or_failed(vendors, Vendors::LABEL, &mut failed);
        let warehouses = or_failed(warehouses, Warehouses::LABEL, &mut failed);
        let payment_types = or_failed(payment_types, PaymentTypes::LABEL, &mut failed);

        let lookups = Self {
            categories,
            brands,
            units,
            product_types,
            vendors,
            warehouses,
            payment_types,
            failed,
        };
        tracing::debug!(failed = ?lookups.failed, "lookups loaded");
        lookups
    }

    pub fn category_name(&self, id: Option<i64>) -> Option<&str> {
        name_of(&self.categories, id)
    }

    pub fn brand_name(&self, id: Option<i64>) -> Option<&str> {
        name_of(&self.brands, id)
    }

    pub fn unit_name(&self, id: Option<i64>) -> Option<&str> {
        name_of(&self.units, id)
    }

    pub fn product_type_name(&self, id: Option<i64>) -> Option<&str> {
        name_of(&self.product_types, id)
    }

    pub fn vendor_name(&self, id: Option<i64>) -> Option<&str> {
        name_of(&self.vendors, id)
    }

    pub fn warehouse_name(&self, id: Option<i64>) -> Option<&str> {
        name_of(&self.warehouses, id)
    }

    pub fn payment_type_name(&self, id: Option<i64>) -> Option<&str> {
        name_of(&self.payment_types, id)
    }

    /// Whether stock of `product` is tracked per unit
    pub fn is_electronic(&self, product: &Product) -> bool {
        product.is_electronic(&self.product_types)
    }
}

/// Active records as `(id, name)` pairs for a selector
pub fn options<T: CatalogRecord>(items: &[T]) -> Vec<(i64, &str)> {
    items
        .iter()
        .filter(|item| item.status().is_active())
        .map(|item| (item.id(), item.name()))
        .collect()
}

fn or_failed<T>(items: Option<Vec<T>>, label: &'static str, failed: &mut Vec<&'static str>) -> Vec<T> {
    items.unwrap_or_else(|| {
        failed.push(label);
        Vec::new()
    })
}

fn name_of<T: CatalogRecord>(items: &[T], id: Option<i64>) -> Option<&str> {
    let id = id?;
    items.iter().find(|item| item.id() == id).map(T::name)
}

async fn fetch_all<C: HttpClient, R: Resource>(client: &C) -> Option<Vec<R::Item>> {
    let query = ListQuery::new(1, LOOKUP_LIMIT);
    match fetch_page::<C, R>(client, &query).await {
        Ok(page) => Some(page.items),
        Err(err) => {
            tracing::warn!(resource = R::LABEL, error = %err, "lookup list failed to load");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Status;

    fn brand(id: i64, name: &str, status: Status) -> Brand {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name, "status": status }))
            .unwrap()
    }

    #[test]
    fn test_name_resolution() {
        let lookups = Lookups {
            brands: vec![brand(1, "Acme", Status::Active), brand(2, "Globex", Status::Inactive)],
            ..Default::default()
        };
        assert_eq!(lookups.brand_name(Some(2)), Some("Globex"));
        assert_eq!(lookups.brand_name(Some(9)), None);
        assert_eq!(lookups.brand_name(None), None);
    }

    #[test]
    fn test_options_skip_inactive() {
        let brands = vec![brand(1, "Acme", Status::Active), brand(2, "Globex", Status::Inactive)];
        assert_eq!(options(&brands), vec![(1, "Acme")]);
    }
}
