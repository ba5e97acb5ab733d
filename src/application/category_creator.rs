// src/application/category_creator.rs
use crate::application::NotesApi;
use crate::domain::DomainError;

pub struct CategoryCreator<A: NotesApi> {
    api: A,
}

impl<A: NotesApi> CategoryCreator<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Create a category. Blank names are filtered out before this point
    /// (see `forms::CategoryForm`); the name is passed through as given.
    pub async fn create(&self, name: &str) -> Result<(), DomainError> {
        self.api.create_category(name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockNotesApi;

    #[tokio::test]
    async fn given_category_name_when_creating_then_category_is_listed() {
        // Arrange
        let api = MockNotesApi::builder().build();
        let creator = CategoryCreator::new(api.clone());

        // Act
        creator.create("Work").await.expect("create");

        // Assert
        assert_eq!(api.categories(), vec!["Work".to_string()]);
    }
}
