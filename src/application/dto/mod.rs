pub mod articles;
pub mod authors;
pub mod pagination;

pub use articles::ArticleDto;
pub use authors::AuthorDto;
pub use pagination::CursorPage;
