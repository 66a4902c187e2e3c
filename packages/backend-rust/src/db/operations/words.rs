use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::db::DatabaseProxy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub word: String,
    pub definition: String,
    pub difficulty_level: String,
}

#[derive(Debug, Clone)]
pub struct NewWord<'a> {
    pub word: &'a str,
    pub definition: &'a str,
    pub difficulty_level: &'a str,
}

pub async fn fetch_word_by_id(proxy: &DatabaseProxy, id: i64) -> Result<Option<Word>, sqlx::Error> {
    let row = sqlx::query(
        r#"SELECT "id", "word", "definition", "difficultyLevel" FROM "words" WHERE "id" = ? LIMIT 1"#,
    )
    .bind(id)
    .fetch_optional(proxy.pool())
    .await?;
    Ok(row.map(|r| map_word(&r)))
}

pub async fn count_words(proxy: &DatabaseProxy) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "words""#)
        .fetch_one(proxy.pool())
        .await
}

pub async fn fetch_word_at_offset(
    proxy: &DatabaseProxy,
    offset: i64,
) -> Result<Option<Word>, sqlx::Error> {
    let row = sqlx::query(
        r#"SELECT "id", "word", "definition", "difficultyLevel" FROM "words" ORDER BY "id" LIMIT 1 OFFSET ?"#,
    )
    .bind(offset)
    .fetch_optional(proxy.pool())
    .await?;
    Ok(row.map(|r| map_word(&r)))
}

/// Uniformly random word, `None` when the table is empty.
pub async fn fetch_random_word(proxy: &DatabaseProxy) -> Result<Option<Word>, sqlx::Error> {
    let count = count_words(proxy).await?;
    if count <= 0 {
        return Ok(None);
    }

    let offset = rand::rng().random_range(0..count);
    fetch_word_at_offset(proxy, offset).await
}

/// Inserts unless the word already exists; returns whether a row was added.
pub async fn insert_word(proxy: &DatabaseProxy, word: &NewWord<'_>) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT OR IGNORE INTO "words" ("word", "definition", "difficultyLevel") VALUES (?, ?, ?)"#,
    )
    .bind(word.word)
    .bind(word.definition)
    .bind(word.difficulty_level)
    .execute(proxy.pool())
    .await?;
    Ok(result.rows_affected() > 0)
}

fn map_word(row: &SqliteRow) -> Word {
    Word {
        id: row.try_get("id").unwrap_or_default(),
        word: row.try_get("word").unwrap_or_default(),
        definition: row.try_get("definition").unwrap_or_default(),
        difficulty_level: row.try_get("difficultyLevel").unwrap_or_default(),
    }
}
