// SPDX-License-Identifier: Apache-2.0

//! The two-tier read policy, factored once and reused by every content
//! category: ask the store with the category's filter spec; a read error or
//! an empty result set falls through to the bundled dataset with the same
//! predicates applied in-process. Only a non-empty store result wins.

use crate::store::{Collection, ListQuery, OrderBy, Store};
use elmwood_api::Source;
use elmwood_model::ContentRecord;
use serde::de::DeserializeOwned;
use tracing::warn;

pub(crate) struct Listing<T> {
    pub rows: Vec<T>,
    pub source: Source,
}

pub(crate) async fn resolve_list<T, F>(
    store: &dyn Store,
    collection: Collection,
    query: ListQuery,
    fixtures: F,
) -> Listing<T>
where
    T: ContentRecord + DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    match store.list_content(collection, &query).await {
        Ok(rows) if !rows.is_empty() => {
            match rows
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<T>, _>>()
            {
                Ok(decoded) => {
                    return Listing {
                        rows: decoded,
                        source: Source::Database,
                    };
                }
                Err(err) => {
                    warn!(
                        collection = collection.key(),
                        "stored content failed to decode, serving static data: {err}"
                    );
                }
            }
        }
        Ok(_) => {}
        Err(err) => {
            warn!(
                collection = collection.key(),
                "content read failed, serving static data: {err}"
            );
        }
    }
    Listing {
        rows: apply_query(fixtures(), &query),
        source: Source::Static,
    }
}

pub(crate) async fn resolve_singleton<T, F>(
    store: &dyn Store,
    collection: Collection,
    fixture: F,
) -> (T, Source)
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match store.find_singleton(collection).await {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(decoded) => return (decoded, Source::Database),
            Err(err) => {
                warn!(
                    collection = collection.key(),
                    "stored singleton failed to decode, serving static data: {err}"
                );
            }
        },
        Ok(None) => {}
        Err(err) => {
            warn!(
                collection = collection.key(),
                "singleton read failed, serving static data: {err}"
            );
        }
    }
    (fixture(), Source::Static)
}

/// Detail lookup: store by id-then-slug first, then the fixtures the same
/// way. `None` means neither tier knows the identifier.
pub(crate) async fn resolve_detail<T, F>(
    store: &dyn Store,
    collection: Collection,
    id_or_slug: &str,
    fixtures: F,
) -> Option<(T, Source)>
where
    T: ContentRecord + DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    match store.find_content(collection, id_or_slug).await {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(decoded) => return Some((decoded, Source::Database)),
            Err(err) => {
                warn!(
                    collection = collection.key(),
                    "stored entity failed to decode, trying static data: {err}"
                );
            }
        },
        Ok(None) => {}
        Err(err) => {
            warn!(
                collection = collection.key(),
                "detail read failed, trying static data: {err}"
            );
        }
    }
    let items = fixtures();
    let by_id = id_or_slug.parse::<u64>().ok();
    items
        .iter()
        .position(|item| by_id == Some(item.id()))
        .or_else(|| items.iter().position(|item| item.slug() == Some(id_or_slug)))
        .and_then(|index| items.into_iter().nth(index))
        .map(|item| (item, Source::Static))
}

/// Applies a store-shaped query to fixture data. Sorting is stable, so equal
/// keys keep their fixture position.
pub(crate) fn apply_query<T: ContentRecord>(items: Vec<T>, query: &ListQuery) -> Vec<T> {
    let mut rows: Vec<T> = items
        .into_iter()
        .filter(|item| !query.active_only || item.is_active())
        .filter(|item| {
            query
                .category
                .as_deref()
                .is_none_or(|category| item.category() == Some(category))
        })
        .collect();
    match query.order {
        OrderBy::OrderAsc => rows.sort_by_key(ContentRecord::sort_order),
        OrderBy::DateDesc => rows.sort_by(|a, b| b.date_key().cmp(&a.date_key())),
    }
    if let Some(limit) = query.limit {
        rows.truncate(limit);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use elmwood_model::{fixtures, BlogPost, Faq, Slider};

    #[test]
    fn apply_query_filters_inactive_and_sorts_by_order() {
        let rows = apply_query(fixtures::sliders(), &ListQuery::active());
        assert!(rows.iter().all(|s: &Slider| s.is_active()));
        assert!(rows.windows(2).all(|w| w[0].order <= w[1].order));
        assert!(rows.len() < fixtures::sliders().len());
    }

    #[test]
    fn apply_query_respects_category_and_limit() {
        let query = ListQuery::active()
            .with_category(Some("food".to_string()))
            .with_limit(1);
        let rows: Vec<Faq> = apply_query(fixtures::faqs(), &query);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "food");
    }

    #[test]
    fn date_ordering_is_newest_first() {
        let rows: Vec<BlogPost> = apply_query(fixtures::blog_posts(), &ListQuery::active_by_date());
        assert!(rows.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[tokio::test]
    async fn empty_store_falls_back_to_fixtures() {
        let store = MemoryStore::new();
        let listing = resolve_list(
            &store,
            Collection::Services,
            ListQuery::active(),
            fixtures::services,
        )
        .await;
        assert_eq!(listing.source, Source::Static);
        assert_eq!(listing.rows.len(), fixtures::services().len());
    }

    #[tokio::test]
    async fn detail_prefers_id_over_slug_and_finds_inactive_items() {
        let store = MemoryStore::new();
        let found = resolve_detail::<Slider, _>(
            &store,
            Collection::Sliders,
            "4",
            fixtures::sliders,
        )
        .await;
        let (slider, source) = found.expect("inactive slider is still reachable by id");
        assert_eq!(source, Source::Static);
        assert!(!slider.is_active);

        let by_slug = resolve_detail::<BlogPost, _>(
            &store,
            Collection::Blogs,
            "nutrition-after-seventy",
            fixtures::blog_posts,
        )
        .await;
        assert!(by_slug.is_some());

        let missing = resolve_detail::<BlogPost, _>(
            &store,
            Collection::Blogs,
            "no-such-post",
            fixtures::blog_posts,
        )
        .await;
        assert!(missing.is_none());
    }
}
