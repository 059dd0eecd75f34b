//! Immutable state snapshots and the reducers that advance them.
//!
//! Callers keep the latest snapshot, feed it an action or a fetch result and
//! replace it with what comes back. Nothing here touches the network.

use log::warn;
use crate::client::controller::composer;
use crate::client::controller::error::{ClientError, ClientResult};
use crate::client::model::drink::Drink;
use crate::client::model::order::{CustomSelection, OrderMode};

/// What a catalog screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for CatalogState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> CatalogState<T> {
    /// Mark a fetch as in flight, previous items stay visible
    pub fn begin(self) -> Self {
        Self {
            loading: true,
            error: None,
            ..self
        }
    }

    /// Fold a finished fetch in. Success replaces the items wholesale,
    /// failure keeps them and records the diagnostic.
    pub fn apply(self, result: ClientResult<Vec<T>>) -> Self {
        match result {
            Ok(items) => Self {
                items,
                loading: false,
                error: None,
            },
            Err(e) => {
                warn!("catalog fetch failed, {}", e);
                Self {
                    loading: false,
                    error: Some(e.to_string()),
                    ..self
                }
            }
        }
    }
}

/// Selection state of the order sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    pub mode: OrderMode,
    pub drink: Option<Drink>,
    pub selections: Vec<CustomSelection>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// switching to custom seeds one blank ingredient line
    SelectMode(OrderMode),
    ChooseDrink(Drink),
    AddSelection,
    RemoveSelection(usize),
    /// picking a type clears the item and takes the unit the backend reported
    SetType { index: usize, kind: String, unit: String },
    SetItem { index: usize, item: String },
    SetAmount { index: usize, amount: f64 },
}

impl OrderDraft {
    pub fn reduce(self, action: OrderAction) -> Self {
        let mut next = self;
        match action {
            OrderAction::SelectMode(mode) => {
                if mode == OrderMode::Custom && next.selections.is_empty() {
                    next.selections.push(CustomSelection::default());
                }
                next.mode = mode;
            }
            OrderAction::ChooseDrink(drink) => next.drink = Some(drink),
            OrderAction::AddSelection => next.selections.push(CustomSelection::default()),
            OrderAction::RemoveSelection(index) => {
                if index < next.selections.len() {
                    next.selections.remove(index);
                }
            }
            OrderAction::SetType { index, kind, unit } => {
                if let Some(selection) = next.selections.get_mut(index) {
                    selection.kind = kind;
                    selection.item.clear();
                    selection.unit = unit;
                }
            }
            OrderAction::SetItem { index, item } => {
                if let Some(selection) = next.selections.get_mut(index) {
                    selection.item = item;
                }
            }
            OrderAction::SetAmount { index, amount } => {
                if let Some(selection) = next.selections.get_mut(index) {
                    selection.amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
                }
            }
        }
        next
    }

    pub fn can_submit(&self) -> bool {
        composer::can_submit(self.mode, self.drink.as_ref(), &self.selections)
    }
}

/// Stages of one order, from browsing the menu to the backend's answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderFlow {
    #[default]
    Browsing,
    Composing,
    Eligible,
    Finalizing,
    Submitting,
    Submitted,
    Failed,
}

impl OrderFlow {
    /// Re-evaluated on every draft change while the sheet is open
    pub fn on_draft(self, draft: &OrderDraft) -> Self {
        match self {
            OrderFlow::Browsing | OrderFlow::Composing | OrderFlow::Eligible => {
                if draft.can_submit() {
                    OrderFlow::Eligible
                } else {
                    OrderFlow::Composing
                }
            }
            other => other,
        }
    }

    pub fn finalize(self) -> Result<Self, ClientError> {
        match self {
            OrderFlow::Eligible => Ok(OrderFlow::Finalizing),
            other => Err(ClientError::Stage(format!("cannot finalize while {:?}", other))),
        }
    }

    /// Also the manual retry out of `Failed`. Rejected while a submission is in flight.
    pub fn submit(self) -> Result<Self, ClientError> {
        match self {
            OrderFlow::Finalizing | OrderFlow::Failed => Ok(OrderFlow::Submitting),
            other => Err(ClientError::Stage(format!("cannot submit while {:?}", other))),
        }
    }

    pub fn complete<T>(self, result: &ClientResult<T>) -> Self {
        match (self, result) {
            (OrderFlow::Submitting, Ok(_)) => OrderFlow::Submitted,
            (OrderFlow::Submitting, Err(_)) => OrderFlow::Failed,
            (other, _) => other,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use reqwest::StatusCode;

    fn drink() -> Drink {
        Drink {
            id: "d1".into(),
            drink_name: "Oolong".into(),
            flavor: "floral".into(),
            mood: "calm".into(),
            intensity: 2,
        }
    }

    #[test]
    fn empty_fetch_settles_without_error() {
        let state = CatalogState::<Drink>::default().begin();
        assert!(state.loading);
        let state = state.apply(Ok(vec![]));
        assert!(!state.loading);
        assert!(state.items.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn failed_fetch_keeps_previous_items() {
        let state = CatalogState::default().apply(Ok(vec![drink()]));
        let state = state
            .begin()
            .apply(Err(ClientError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
        assert_eq!(state.items, vec![drink()]);
        assert!(!state.loading);
        assert!(state.error.is_some());
    }

    #[test]
    fn custom_mode_seeds_one_line() {
        let draft = OrderDraft::default().reduce(OrderAction::SelectMode(OrderMode::Custom));
        assert_eq!(draft.selections, vec![CustomSelection::default()]);
        assert!(!draft.can_submit());

        let draft = draft
            .reduce(OrderAction::SetType { index: 0, kind: "Tea".into(), unit: "ml".into() })
            .reduce(OrderAction::SetItem { index: 0, item: "Green".into() })
            .reduce(OrderAction::SetAmount { index: 0, amount: 500.0 });
        assert!(draft.can_submit());

        // a new type resets the item
        let draft = draft.reduce(OrderAction::SetType { index: 0, kind: "Milk".into(), unit: "ml".into() });
        assert!(draft.selections[0].item.is_empty());
        assert!(!draft.can_submit());
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let draft = OrderDraft::default()
            .reduce(OrderAction::RemoveSelection(3))
            .reduce(OrderAction::SetItem { index: 1, item: "Green".into() });
        assert_eq!(draft, OrderDraft::default());
    }

    #[test]
    fn negative_amount_is_clamped() {
        let draft = OrderDraft::default()
            .reduce(OrderAction::AddSelection)
            .reduce(OrderAction::SetAmount { index: 0, amount: -3.0 });
        assert_eq!(draft.selections[0].amount, 0.0);
    }

    #[test]
    fn non_finite_amount_is_reset() {
        let draft = OrderDraft::default()
            .reduce(OrderAction::SelectMode(OrderMode::Custom))
            .reduce(OrderAction::SetType { index: 0, kind: "Tea".into(), unit: "ml".into() })
            .reduce(OrderAction::SetItem { index: 0, item: "Green".into() })
            .reduce(OrderAction::SetAmount { index: 0, amount: "inf".parse().unwrap() });
        assert_eq!(draft.selections[0].amount, 0.0);
        assert!(!draft.can_submit());

        let draft = draft.reduce(OrderAction::SetAmount { index: 0, amount: f64::NAN });
        assert_eq!(draft.selections[0].amount, 0.0);
        assert!(!draft.can_submit());
    }

    #[test]
    fn flow_rejects_double_submit() {
        let draft = OrderDraft::default().reduce(OrderAction::ChooseDrink(drink()));
        let flow = OrderFlow::default().on_draft(&draft);
        assert_eq!(flow, OrderFlow::Eligible);
        let flow = flow.finalize().unwrap().submit().unwrap();
        assert_eq!(flow, OrderFlow::Submitting);
        match flow.submit() {
            Err(ClientError::Stage(msg)) => assert_eq!(msg, "cannot submit while Submitting"),
            other => panic!("unexpected {:?}", other),
        }

        let flow = flow.complete::<()>(&Err(ClientError::Status(StatusCode::BAD_REQUEST)));
        assert_eq!(flow, OrderFlow::Failed);
        let flow = flow.submit().unwrap().complete(&Ok(()));
        assert_eq!(flow, OrderFlow::Submitted);
    }

    #[test]
    fn flow_cannot_finalize_incomplete_draft() {
        let flow = OrderFlow::default().on_draft(&OrderDraft::default());
        assert_eq!(flow, OrderFlow::Composing);
        assert!(matches!(flow.finalize(), Err(ClientError::Stage(_))));
    }
}
