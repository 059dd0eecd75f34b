use crate::client::controller::error::ValidationError;
use crate::client::model::drink::Drink;
use crate::client::model::order::{CustomSelection, Order, OrderItem, OrderMode};

const DEFAULT_QUANTITY: u32 = 1;

/// Build an order from the current selection.
///
/// Custom lines are mapped as they are, incomplete ones included; [`can_submit`]
/// is what keeps those from being sent.
pub fn compose(mode: OrderMode, drink: Option<&Drink>, selections: &[CustomSelection]) -> Result<Order, ValidationError> {
    let items = match mode {
        OrderMode::Existing => {
            let drink = drink.ok_or(ValidationError::MissingDrink)?;
            vec![OrderItem::Catalog {
                id: drink.id.clone(),
                name: drink.drink_name.clone(),
                quantity: DEFAULT_QUANTITY,
            }]
        }
        OrderMode::Custom => selections.iter().map(OrderItem::from).collect(),
    };
    Ok(Order { mode, items })
}

pub fn can_submit(mode: OrderMode, drink: Option<&Drink>, selections: &[CustomSelection]) -> bool {
    check_submit(mode, drink, selections).is_ok()
}

/// Same predicate as [`can_submit`], naming the first thing missing
pub fn check_submit(mode: OrderMode, drink: Option<&Drink>, selections: &[CustomSelection]) -> Result<(), ValidationError> {
    match mode {
        OrderMode::Existing => drink.map(|_| ()).ok_or(ValidationError::MissingDrink),
        OrderMode::Custom => {
            if selections.is_empty() {
                return Err(ValidationError::NoSelections);
            }
            match selections.iter().position(|s| !s.is_complete()) {
                Some(index) => Err(ValidationError::IncompleteSelection { index }),
                None => Ok(()),
            }
        }
    }
}
