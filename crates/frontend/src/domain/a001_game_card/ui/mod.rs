pub mod card;
pub mod form;
pub mod list;
pub mod page;
pub mod showcase;

pub use page::CustomCatalogPage;
pub use showcase::GamesShowcasePage;
