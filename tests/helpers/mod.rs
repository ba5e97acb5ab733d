use notectl::domain::{Identity, Note, Session};
use notectl::util::testing::MockNotesApi;

/// Fixed identifiers every integration test can rely on
#[allow(dead_code)]
pub mod fixtures {
    pub const EMAIL: &str = "dev@example.com";
    pub const PASSWORD: &str = "hunter2";
    pub const TOKEN: &str = "tok-fixture";

    // Seeded note ids, in server order
    pub const SHOPPING: i64 = 1;
    pub const STANDUP: i64 = 2;
    pub const IDEAS: i64 = 3;

    // For testing error cases
    pub const NONEXISTENT: i64 = 999;
}

#[allow(dead_code)]
pub fn note(
    id: i64,
    title: &str,
    content: &str,
    category: Option<&str>,
    tags: &[&str],
) -> Note {
    Note {
        id: Some(id),
        title: title.to_string(),
        content: content.to_string(),
        category: category.map(String::from),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// A mock service with one registered account and a few notes, categories,
/// and tags, mirroring the state a small live deployment would have.
#[allow(dead_code)]
pub fn seeded_api() -> MockNotesApi {
    MockNotesApi::builder()
        .with_account(fixtures::EMAIL, fixtures::PASSWORD, fixtures::TOKEN)
        .with_note(note(
            fixtures::SHOPPING,
            "Shopping",
            "milk\neggs",
            None,
            &["errand"],
        ))
        .with_note(note(
            fixtures::STANDUP,
            "Standup notes",
            "Discuss roadmap",
            Some("Work"),
            &["meeting", "todo"],
        ))
        .with_note(note(
            fixtures::IDEAS,
            "Ideas",
            "A notes CLI",
            Some("Work"),
            &[],
        ))
        .with_categories(&["Work", "Home"])
        .with_tags(&["meeting", "archive"])
        .build()
}

#[allow(dead_code)]
pub fn confirmed_session() -> Session {
    Session::Confirmed {
        identity: Identity {
            email: fixtures::EMAIL.to_string(),
        },
    }
}
