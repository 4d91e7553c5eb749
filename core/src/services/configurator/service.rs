//! Configurator service: turns a component selection into a priced quote

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::entities::{ConfigurationItem, MAX_ITEM_QUANTITY};
use crate::domain::value_objects::{BuildQuote, QuoteLine};
use crate::errors::{CatalogError, DomainError, DomainResult, ValidationError};
use crate::repositories::ComponentRepository;

use super::compatibility::check_compatibility;
use super::power::{estimate_power_draw, PsuTier};
use super::selection::SelectedComponent;

/// Prices and validates component selections against the catalog
pub struct ConfiguratorService<C>
where
    C: ComponentRepository,
{
    /// Catalog lookup
    components: Arc<C>,
}

impl<C> ConfiguratorService<C>
where
    C: ComponentRepository,
{
    pub fn new(components: Arc<C>) -> Self {
        Self { components }
    }

    /// Load the components of a selection.
    ///
    /// Repeated component ids are merged into one line (first position
    /// wins). Fails on an empty selection, on quantities outside
    /// `1..=MAX_ITEM_QUANTITY` and on unknown components.
    pub async fn select(&self, items: &[ConfigurationItem]) -> DomainResult<Vec<SelectedComponent>> {
        let items = merge_items(items)?;

        let mut selection = Vec::with_capacity(items.len());
        for item in items {
            let component = self
                .components
                .find_by_id(item.component_id)
                .await?
                .ok_or_else(|| {
                    warn!(component_id = %item.component_id, "Unknown component in selection");
                    CatalogError::ComponentNotFound {
                        id: item.component_id,
                    }
                })?;
            selection.push(SelectedComponent::new(component, item.quantity));
        }
        Ok(selection)
    }

    /// Price a selection and check it for compatibility problems
    pub async fn quote(&self, items: &[ConfigurationItem]) -> DomainResult<BuildQuote> {
        let selection = self.select(items).await?;
        let quote = build_quote(&selection);

        debug!(
            lines = quote.lines.len(),
            total = %quote.total_price,
            watts = quote.estimated_wattage,
            psu = %quote.recommended_psu,
            "Built configuration quote"
        );
        Ok(quote)
    }
}

/// Assemble a quote from already loaded components
pub fn build_quote(selection: &[SelectedComponent]) -> BuildQuote {
    let lines: Vec<QuoteLine> = selection
        .iter()
        .map(|selected| {
            let component = &selected.component;
            QuoteLine {
                component_id: component.id,
                name: component.name.clone(),
                category: component.category,
                quantity: selected.quantity,
                unit_price: component.price,
                line_total: component.line_price(selected.quantity),
                in_stock: component.has_stock_for(selected.quantity),
            }
        })
        .collect();

    let total_price = lines.iter().map(|line| line.line_total).sum::<Decimal>();
    let all_in_stock = lines.iter().all(|line| line.in_stock);
    let estimated_wattage = estimate_power_draw(selection);

    BuildQuote {
        lines,
        total_price,
        estimated_wattage,
        recommended_psu: PsuTier::for_load(f64::from(estimated_wattage)),
        compatibility: check_compatibility(selection),
        all_in_stock,
    }
}

fn merge_items(items: &[ConfigurationItem]) -> DomainResult<Vec<ConfigurationItem>> {
    if items.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "items".to_string(),
        }
        .into());
    }

    // Every line must be positive on its own, not just after merging
    if items.iter().any(|item| item.quantity == 0) {
        return Err(quantity_out_of_range());
    }

    let mut merged: Vec<ConfigurationItem> = Vec::with_capacity(items.len());
    for item in items {
        match merged
            .iter_mut()
            .find(|existing| existing.component_id == item.component_id)
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => merged.push(*item),
        }
    }

    if merged.iter().any(|item| item.quantity > MAX_ITEM_QUANTITY) {
        return Err(quantity_out_of_range());
    }

    Ok(merged)
}

fn quantity_out_of_range() -> DomainError {
    ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: "1".to_string(),
        max: MAX_ITEM_QUANTITY.to_string(),
    }
    .into()
}
