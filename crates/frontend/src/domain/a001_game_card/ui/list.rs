use super::card::{CardFields, GameCardView};
use crate::domain::a001_game_card::actions::CatalogAction;
use contracts::domain::a001_game_card::aggregate::{CatalogEntry, GameCard, GameCardId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Edit/Delete tagging of a card: its id and its current position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardControls {
    pub index: usize,
    pub id: GameCardId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub entry: CatalogEntry,
    pub controls: Option<CardControls>,
}

/// Display-only projection (default and remote datasets)
pub fn project_entries(entries: &[CatalogEntry]) -> Vec<CardModel> {
    entries
        .iter()
        .map(|entry| CardModel {
            entry: entry.clone(),
            controls: None,
        })
        .collect()
}

/// Editable projection of the user catalog, tagged in storage order
pub fn project_cards(cards: &[GameCard]) -> Vec<CardModel> {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| CardModel {
            entry: card.entry.clone(),
            controls: Some(CardControls { index, id: card.id }),
        })
        .collect()
}

fn control_button(
    action: CatalogAction,
    controls: CardControls,
    on_action: Option<Callback<CatalogAction>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!("button button--secondary {}", action.marker())
            data-index=controls.index.to_string()
            data-id=controls.id.as_string()
            on:click=move |_| {
                if let Some(handler) = on_action {
                    handler.run(action);
                }
            }
        >
            {action.label()}
        </button>
    }
}

/// Renders cards into a container, replacing the previous contents on
/// every change.
#[component]
pub fn CardList(
    #[prop(into)] cards: Signal<Vec<CardModel>>,
    /// Receives Edit/Delete clicks of editable cards
    #[prop(optional)]
    on_action: Option<Callback<CatalogAction>>,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="card-list" id=move || id.get()>
            {move || {
                cards
                    .get()
                    .into_iter()
                    .map(|model| {
                        let controls = model.controls.map(|c| {
                            view! {
                                {control_button(CatalogAction::Edit(c.id), c, on_action)}
                                {control_button(CatalogAction::Delete(c.id), c, on_action)}
                            }
                        });
                        let f = CardFields::from(&model.entry);
                        view! {
                            <GameCardView
                                title=f.title
                                img=f.img
                                alt=f.alt
                                genre=f.genre
                                desc=f.desc
                                rating=f.rating
                                link=f.href
                            >
                                {controls}
                            </GameCardView>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::a001_game_card::storage::CatalogStore;
    use crate::shared::storage::MemoryStorage;

    fn entry(title: &str) -> CatalogEntry {
        CatalogEntry {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_display_projection_has_no_controls() {
        let models = project_entries(&[CatalogEntry::default(), CatalogEntry::default()]);
        assert_eq!(models.len(), 2);
        assert!(models.iter().all(|m| m.controls.is_none()));
    }

    #[test]
    fn test_indices_follow_current_order_after_removal() {
        let store = CatalogStore::open(MemoryStorage::new(), "gameDataCustom");
        for t in ["A", "B", "C"] {
            store.append(entry(t)).unwrap();
        }
        let c_id = store.get_all()[2].id;
        store.remove_at(1).unwrap();

        let models = project_cards(&store.get_all());
        assert_eq!(models.len(), 2);
        assert_eq!(models[1].entry.title, "C");
        assert_eq!(models[1].controls, Some(CardControls { index: 1, id: c_id }));
    }
}
