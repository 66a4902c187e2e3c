use crate::db::operations::{self, Word};
use crate::db::DatabaseProxy;
use crate::services::PracticeError;

/// A uniformly random word from the catalogue.
pub async fn word_of_the_day(proxy: &DatabaseProxy) -> Result<Word, PracticeError> {
    operations::fetch_random_word(proxy)
        .await?
        .ok_or_else(|| PracticeError::NotFound("No words available".to_string()))
}
