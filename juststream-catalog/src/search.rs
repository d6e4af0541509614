use juststream_api::ContentItem;

/// Case-insensitive search over loaded items. Matches on title, description and genres.
/// A blank query matches nothing.
pub fn search<'a>(items: &'a [ContentItem], query: &str) -> Vec<&'a ContentItem> {
    let query = query.trim();
    if query.is_empty() {
        return vec![];
    }

    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&query)
                || item.description.to_lowercase().contains(&query)
                || item
                    .genres
                    .iter()
                    .any(|genre| genre.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::generator::Catalog;
    use googletest::prelude::*;

    fn items() -> Vec<ContentItem> {
        let mut items: Vec<_> = Catalog::new(4, 12).iter().collect();
        for item in &mut items {
            item.genres = vec!["Drama".to_string()];
        }
        items[3].genres = vec!["Sci-Fi".to_string(), "Horror".to_string()];
        items
    }

    #[googletest::test]
    fn test_blank_query_matches_nothing() {
        let items = items();
        expect_that!(search(&items, ""), is_empty());
        expect_that!(search(&items, "   "), is_empty());
    }

    #[googletest::test]
    fn test_title_match_is_case_insensitive() {
        let items = items();
        let ids: Vec<_> = search(&items, "  streaming TITLE 1")
            .into_iter()
            .map(|item| item.id.as_str())
            .collect();
        expect_that!(
            ids,
            unordered_elements_are![
                eq(&"content-1"),
                eq(&"content-10"),
                eq(&"content-11"),
                eq(&"content-12")
            ]
        );
    }

    #[googletest::test]
    fn test_genre_match() {
        let items = items();
        let matched = search(&items, "horror");
        expect_that!(matched.len(), eq(1));
        expect_that!(matched[0].id, eq("content-4"));
    }

    #[googletest::test]
    fn test_description_match() {
        let items = items();
        expect_that!(search(&items, "production values").len(), eq(12));
        expect_that!(search(&items, "western"), is_empty());
    }
}
