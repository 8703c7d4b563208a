use crate::domain::errors::DomainError;

const CNT_ARTICLE_TITLE: &str = "articles_title_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";

const SQLSTATE_UNIQUE_VIOLATION: &str = "23505";
const SQLSTATE_FOREIGN_KEY_VIOLATION: &str = "23503";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                match constraint {
                    CNT_ARTICLE_TITLE => {
                        return DomainError::conflict("article title already exists");
                    }
                    CNT_ARTICLE_AUTHOR => return DomainError::not_found("author not found"),
                    _ => {}
                }
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    SQLSTATE_UNIQUE_VIOLATION => {
                        return DomainError::conflict("unique constraint violated");
                    }
                    SQLSTATE_FOREIGN_KEY_VIOLATION => {
                        return DomainError::not_found("referenced record not found");
                    }
                    _ => {}
                }
            }

            tracing::error!(error = %db_err, "database error");
            DomainError::internal("internal server error")
        }
        sqlx::Error::RowNotFound => DomainError::not_found("record not found"),
        _ => {
            tracing::error!(error = %err, "database failure");
            DomainError::internal("internal server error")
        }
    }
}
