use contracts::domain::a001_game_card::aggregate::CatalogEntry;
use leptos::prelude::*;

/// Display text of a card, derived from a catalog entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFields {
    pub title: String,
    pub img: String,
    pub alt: String,
    pub genre: String,
    pub desc: String,
    /// `None` hides the whole rating line
    pub rating: Option<String>,
    pub href: String,
}

impl CardFields {
    pub fn rating_line(rating: &str) -> Option<String> {
        (!rating.is_empty()).then(|| rating.to_string())
    }

    pub fn href(link: &str) -> String {
        if link.is_empty() {
            "#".to_string()
        } else {
            link.to_string()
        }
    }
}

impl From<&CatalogEntry> for CardFields {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            title: entry.title.clone(),
            img: entry.img.clone(),
            alt: entry.alt.clone(),
            genre: entry.genre.clone(),
            desc: entry.desc.clone(),
            rating: Self::rating_line(&entry.rating),
            href: Self::href(&entry.link),
        }
    }
}

/// One catalog entry as a self-contained card.
///
/// Every field is an independent reactive prop; a missing field renders as
/// an empty region. Children go into the card's controls region. The card
/// knows nothing about storage or catalog positions.
#[component]
pub fn GameCardView(
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(optional, into)] img: MaybeProp<String>,
    #[prop(optional, into)] alt: MaybeProp<String>,
    #[prop(optional, into)] genre: MaybeProp<String>,
    #[prop(optional, into)] desc: MaybeProp<String>,
    #[prop(optional, into)] rating: MaybeProp<String>,
    #[prop(optional, into)] link: MaybeProp<String>,
    /// Action controls
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let rating_line = move || {
        rating.get().as_deref().and_then(CardFields::rating_line).map(|r| {
            view! {
                <strong>"Rating:"</strong>
                " "
                {r}
            }
        })
    };

    view! {
        <article class="game-card">
            <h2 class="game-card__title">{move || title.get().unwrap_or_default()}</h2>
            <picture class="game-card__picture">
                <img
                    class="game-card__img"
                    src=move || img.get().unwrap_or_default()
                    alt=move || alt.get().unwrap_or_default()
                />
            </picture>
            <p class="game-card__meta">
                <strong>"Genre:"</strong>
                " "
                {move || genre.get().unwrap_or_default()}
            </p>
            <p class="game-card__desc">{move || desc.get().unwrap_or_default()}</p>
            <p class="game-card__rating">{rating_line}</p>
            <a
                class="game-card__more"
                target="_blank"
                rel="noopener"
                href=move || CardFields::href(&link.get().unwrap_or_default())
            >
                "Read more"
            </a>
            <div class="game-card__controls">{children.map(|c| c())}</div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_from_entry() {
        let entry = CatalogEntry {
            title: "Cyberpunk 2077".into(),
            genre: "Action RPG".into(),
            rating: "★★★★★".into(),
            link: "https://www.cyberpunk.net/".into(),
            ..Default::default()
        };
        let fields = CardFields::from(&entry);
        assert_eq!(fields.genre, "Action RPG");
        assert_eq!(fields.rating.as_deref(), Some("★★★★★"));
        assert_eq!(fields.href, "https://www.cyberpunk.net/");
    }

    #[test]
    fn test_empty_entry_renders_blank_regions() {
        let fields = CardFields::from(&CatalogEntry::default());
        assert_eq!(fields.title, "");
        assert_eq!(fields.genre, "");
        assert_eq!(fields.rating, None);
        assert_eq!(fields.href, "#");
    }
}
