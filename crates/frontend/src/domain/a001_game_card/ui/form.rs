use crate::shared::components::ui::{Button, Input, Textarea};
use contracts::domain::a001_game_card::aggregate::GameCardDto;
use leptos::prelude::*;

/// Editable fields of the catalog form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCardField {
    Title,
    Genre,
    Desc,
    Rating,
    Link,
}

impl GameCardField {
    pub fn apply(&self, dto: &mut GameCardDto, value: String) {
        match self {
            GameCardField::Title => dto.title = value,
            GameCardField::Genre => dto.genre = value,
            GameCardField::Desc => dto.desc = value,
            GameCardField::Rating => dto.rating = value,
            GameCardField::Link => dto.link = value,
        }
    }
}

/// Create/edit form for the user catalog. Pure view: state lives in the page.
#[component]
pub fn GameCardForm(
    #[prop(into)] form: Signal<GameCardDto>,
    #[prop(into)] editing: Signal<bool>,
    /// Hidden edit-index marker, empty while creating
    #[prop(into)]
    edit_index: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    on_change: Callback<(GameCardField, String)>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let field = move |f: GameCardField| Callback::new(move |v: String| on_change.run((f, v)));

    view! {
        <form
            id="gameForm"
            class="form game-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <h2 class="form__title">
                {move || if editing.get() { "Edit game" } else { "Add a game" }}
            </h2>

            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Input
                id="title"
                label="Title"
                value=Signal::derive(move || form.get().title)
                on_input=field(GameCardField::Title)
                required=true
            />
            <Input
                id="genre"
                label="Genre"
                value=Signal::derive(move || form.get().genre)
                on_input=field(GameCardField::Genre)
            />
            <Textarea
                id="desc"
                label="Description"
                value=Signal::derive(move || form.get().desc)
                on_input=field(GameCardField::Desc)
            />
            <Input
                id="rating"
                label="Rating"
                placeholder="★★★★☆"
                value=Signal::derive(move || form.get().rating)
                on_input=field(GameCardField::Rating)
            />
            <Input
                id="link"
                label="Link"
                input_type="url"
                value=Signal::derive(move || form.get().link)
                on_input=field(GameCardField::Link)
            />
            <input type="hidden" id="editIndex" name="editIndex" prop:value=move || edit_index.get() />

            <div class="form__actions">
                <Button button_type="submit">
                    {move || if editing.get() { "Save changes" } else { "Save" }}
                </Button>
                <Button
                    id="cancelEdit"
                    variant="secondary"
                    visible=editing
                    on_click=Callback::new(move |_| on_cancel.run(()))
                >
                    "Cancel"
                </Button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_apply() {
        let mut dto = GameCardDto::default();
        GameCardField::Title.apply(&mut dto, "Hades".into());
        GameCardField::Link.apply(&mut dto, "https://supergiant.games".into());
        assert_eq!(dto.title, "Hades");
        assert_eq!(dto.link, "https://supergiant.games");
        assert_eq!(dto.genre, "");
    }
}
