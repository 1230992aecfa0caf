use crate::domain::common::AggregateId;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор карточки игры в пользовательском каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameCardId(pub Uuid);

impl GameCardId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Детерминированный id для записи без id: одинаковый для одной и той же
    /// позиции в одном и том же ключе хранилища
    pub fn for_legacy_slot(scope: &str, position: usize) -> Self {
        let name = format!("{}#{}", scope, position);
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()))
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for GameCardId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(GameCardId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for GameCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Catalog entry
// ============================================================================

/// `null` в JSON трактуется как пустая строка, а не как ошибка записи
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Запись каталога: семь строковых полей карточки.
///
/// Отсутствующие поля становятся пустыми строками, лишние поля игнорируются.
/// Формат общий для пользовательского каталога, встроенного набора и
/// удалённого источника.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogEntry {
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub img: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub alt: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub genre: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub desc: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub rating: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub link: String,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Карточка пользовательского каталога: запись плюс стабильный ID.
///
/// В хранилище ID лежит рядом с полями записи (`{"id": "...", "title": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCard {
    pub id: GameCardId,
    #[serde(flatten)]
    pub entry: CatalogEntry,
}

impl GameCard {
    /// Создать новую карточку со свежим ID
    pub fn new_for_insert(entry: CatalogEntry) -> Self {
        Self {
            id: GameCardId::new_v4(),
            entry,
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Значения формы создания/редактирования карточки.
///
/// `img` и `alt` в форме отсутствуют: их назначает система при сохранении.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCardDto {
    pub title: String,
    pub genre: String,
    pub desc: String,
    pub rating: String,
    pub link: String,
}

impl GameCardDto {
    /// Заполнить форму из существующей записи
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            title: entry.title.clone(),
            genre: entry.genre.clone(),
            desc: entry.desc.clone(),
            rating: entry.rating.clone(),
            link: entry.link.clone(),
        }
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".into());
        }
        Ok(())
    }

    /// Собрать запись каталога; картинка берётся из заглушки, alt из названия
    pub fn into_entry(self, placeholder_img: &str) -> CatalogEntry {
        CatalogEntry {
            alt: self.title.clone(),
            img: placeholder_img.to_string(),
            title: self.title,
            genre: self.genre,
            desc: self.desc,
            rating: self.rating,
            link: self.link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_become_empty() {
        let entry: CatalogEntry = serde_json::from_str(r#"{"title":"Hades"}"#).unwrap();
        assert_eq!(entry.title, "Hades");
        assert_eq!(entry.genre, "");
        assert_eq!(entry.link, "");
    }

    #[test]
    fn test_null_and_unknown_fields() {
        let entry: CatalogEntry =
            serde_json::from_str(r#"{"title":null,"rating":"★★★","platform":"PC"}"#).unwrap();
        assert_eq!(entry.title, "");
        assert_eq!(entry.rating, "★★★");
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        let result: Result<CatalogEntry, _> = serde_json::from_str(r#"{"title":42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_game_card_flattens_id() {
        let card = GameCard::new_for_insert(CatalogEntry {
            title: "Celeste".into(),
            ..Default::default()
        });
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["id"], card.to_string_id());
        assert_eq!(json["title"], "Celeste");

        let back: GameCard = serde_json::from_value(json).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn test_legacy_slot_ids_are_stable() {
        let first = GameCardId::for_legacy_slot("gameDataCustom", 0);
        assert_eq!(first, GameCardId::for_legacy_slot("gameDataCustom", 0));
        assert_ne!(first, GameCardId::for_legacy_slot("gameDataCustom", 1));
        assert_ne!(first, GameCardId::for_legacy_slot("otherKey", 0));
    }

    #[test]
    fn test_id_from_invalid_string() {
        assert!(GameCardId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_dto_validate() {
        let mut dto = GameCardDto::default();
        assert!(dto.validate().is_err());
        dto.title = "   ".into();
        assert!(dto.validate().is_err());
        dto.title = "Outer Wilds".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_dto_into_entry_assigns_img_and_alt() {
        let dto = GameCardDto {
            title: "Outer Wilds".into(),
            genre: "Adventure".into(),
            desc: "Time loop".into(),
            rating: "★★★★★".into(),
            link: "https://example.com".into(),
        };
        let entry = dto.clone().into_entry("images/default.jpg");
        assert_eq!(entry.img, "images/default.jpg");
        assert_eq!(entry.alt, "Outer Wilds");
        assert_eq!(GameCardDto::from_entry(&entry), dto);
    }
}
