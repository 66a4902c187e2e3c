use crate::db::operations::{self, NewWord};
use crate::db::DatabaseProxy;

struct SeedWord {
    word: &'static str,
    definition: &'static str,
    level: &'static str,
}

const SEED_WORDS: &[SeedWord] = &[
    SeedWord {
        word: "happy",
        definition: "Feeling or showing pleasure or contentment.",
        level: "Beginner",
    },
    SeedWord {
        word: "travel",
        definition: "To go from one place to another, especially over a long distance.",
        level: "Beginner",
    },
    SeedWord {
        word: "kitchen",
        definition: "A room where food is prepared and cooked.",
        level: "Beginner",
    },
    SeedWord {
        word: "friend",
        definition: "A person you know well and like.",
        level: "Beginner",
    },
    SeedWord {
        word: "weather",
        definition: "The state of the air at a particular place and time.",
        level: "Beginner",
    },
    SeedWord {
        word: "curious",
        definition: "Eager to know or learn something.",
        level: "Intermediate",
    },
    SeedWord {
        word: "improve",
        definition: "To make or become better.",
        level: "Intermediate",
    },
    SeedWord {
        word: "schedule",
        definition: "A plan listing when things are intended to happen.",
        level: "Intermediate",
    },
    SeedWord {
        word: "generous",
        definition: "Willing to give more of something than is expected.",
        level: "Intermediate",
    },
    SeedWord {
        word: "negotiate",
        definition: "To discuss something in order to reach an agreement.",
        level: "Intermediate",
    },
    SeedWord {
        word: "resilient",
        definition: "Able to recover quickly from difficult conditions.",
        level: "Advanced",
    },
    SeedWord {
        word: "meticulous",
        definition: "Showing great attention to detail; very careful and precise.",
        level: "Advanced",
    },
    SeedWord {
        word: "ubiquitous",
        definition: "Present, appearing, or found everywhere.",
        level: "Advanced",
    },
    SeedWord {
        word: "ephemeral",
        definition: "Lasting for a very short time.",
        level: "Advanced",
    },
    SeedWord {
        word: "pragmatic",
        definition: "Dealing with things sensibly and realistically.",
        level: "Advanced",
    },
];

/// Fills an empty word table with the built-in list; returns rows added.
pub async fn seed_words(proxy: &DatabaseProxy) -> Result<usize, sqlx::Error> {
    let existing = operations::count_words(proxy).await?;
    if existing > 0 {
        tracing::debug!(existing, "word table already populated");
        return Ok(0);
    }

    let mut inserted = 0;
    for seed in SEED_WORDS {
        let word = NewWord {
            word: seed.word,
            definition: seed.definition,
            difficulty_level: seed.level,
        };
        if operations::insert_word(proxy, &word).await? {
            inserted += 1;
        }
    }

    tracing::info!(inserted, "seeded word catalogue");
    Ok(inserted)
}
