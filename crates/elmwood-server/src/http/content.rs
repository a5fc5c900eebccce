// SPDX-License-Identifier: Apache-2.0

//! Content read handlers. Every category goes through the shared resolver so
//! the store-then-static policy is applied exactly once, the same way, for
//! all of them.

use crate::http::response::{not_found, sourced};
use crate::resolver::{resolve_detail, resolve_list, resolve_singleton};
use crate::store::{Collection, ListQuery};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use elmwood_api::Source;
use elmwood_model::{
    fixtures, BlogPost, Event, Faq, GalleryImage, LivingOption, Service, Slider, Statistic,
    TeamMember, Testimonial,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

const HOME_SERVICES_LIMIT: usize = 3;
const HOME_TEAM_LIMIT: usize = 4;
const HOME_BLOGS_LIMIT: usize = 3;

pub(crate) async fn get_settings(State(state): State<AppState>) -> Response {
    let (settings, source) = resolve_singleton(
        state.store.as_ref(),
        Collection::Settings,
        fixtures::site_settings,
    )
    .await;
    sourced(
        "Site settings retrieved successfully",
        json!(settings),
        source,
    )
}

pub(crate) async fn get_home(State(state): State<AppState>) -> Response {
    let store = state.store.as_ref();
    let (
        (settings, _),
        sliders,
        services,
        (about, _),
        testimonials,
        team,
        blogs,
        statistics,
        (popup, _),
    ) = tokio::join!(
        resolve_singleton(store, Collection::Settings, fixtures::site_settings),
        resolve_list::<Slider, _>(
            store,
            Collection::Sliders,
            ListQuery::active(),
            fixtures::sliders
        ),
        resolve_list::<Service, _>(
            store,
            Collection::Services,
            ListQuery::active().with_limit(HOME_SERVICES_LIMIT),
            fixtures::services
        ),
        resolve_singleton(store, Collection::About, fixtures::about_page),
        resolve_list::<Testimonial, _>(
            store,
            Collection::Testimonials,
            ListQuery::active(),
            fixtures::testimonials
        ),
        resolve_list::<TeamMember, _>(
            store,
            Collection::Team,
            ListQuery::active().with_limit(HOME_TEAM_LIMIT),
            fixtures::team_members
        ),
        resolve_list::<BlogPost, _>(
            store,
            Collection::Blogs,
            ListQuery::active_by_date().with_limit(HOME_BLOGS_LIMIT),
            fixtures::blog_posts
        ),
        resolve_list::<Statistic, _>(
            store,
            Collection::Statistics,
            ListQuery::active(),
            fixtures::statistics
        ),
        resolve_singleton(store, Collection::Popup, fixtures::home_popup),
    );

    let data = json!({
        "settings": settings,
        "sliders": sliders.rows,
        "services": services.rows,
        "about": about,
        "testimonials": testimonials.rows,
        "team": team.rows,
        "blogs": blogs.rows,
        "statistics": statistics.rows,
        "popup": if popup.is_active { json!(popup) } else { json!(null) },
    });
    let source = if state.store.durable() {
        Source::Database
    } else {
        Source::Static
    };
    sourced("Home page data retrieved successfully", data, source)
}

pub(crate) async fn get_about(State(state): State<AppState>) -> Response {
    let store = state.store.as_ref();
    let ((about, _), team, statistics, testimonials) = tokio::join!(
        resolve_singleton(store, Collection::About, fixtures::about_page),
        resolve_list::<TeamMember, _>(
            store,
            Collection::Team,
            ListQuery::active(),
            fixtures::team_members
        ),
        resolve_list::<Statistic, _>(
            store,
            Collection::Statistics,
            ListQuery::active(),
            fixtures::statistics
        ),
        resolve_list::<Testimonial, _>(
            store,
            Collection::Testimonials,
            ListQuery::active(),
            fixtures::testimonials
        ),
    );
    let data = json!({
        "about": about,
        "team": team.rows,
        "statistics": statistics.rows,
        "testimonials": testimonials.rows,
    });
    let source = if state.store.durable() {
        Source::Database
    } else {
        Source::Static
    };
    sourced("About page data retrieved successfully", data, source)
}

pub(crate) async fn get_sliders(State(state): State<AppState>) -> Response {
    let listing = resolve_list::<Slider, _>(
        state.store.as_ref(),
        Collection::Sliders,
        ListQuery::active(),
        fixtures::sliders,
    )
    .await;
    sourced(
        "Sliders retrieved successfully",
        json!(listing.rows),
        listing.source,
    )
}

pub(crate) async fn get_popup(State(state): State<AppState>) -> Response {
    let (popup, source) = resolve_singleton(
        state.store.as_ref(),
        Collection::Popup,
        fixtures::home_popup,
    )
    .await;
    sourced("Home popup retrieved successfully", json!(popup), source)
}

pub(crate) async fn get_services(State(state): State<AppState>) -> Response {
    let listing = resolve_list::<Service, _>(
        state.store.as_ref(),
        Collection::Services,
        ListQuery::active(),
        fixtures::services,
    )
    .await;
    sourced(
        "Services retrieved successfully",
        json!(listing.rows),
        listing.source,
    )
}

pub(crate) async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match resolve_detail::<Service, _>(
        state.store.as_ref(),
        Collection::Services,
        &id,
        fixtures::services,
    )
    .await
    {
        Some((service, source)) => {
            sourced("Service retrieved successfully", json!(service), source)
        }
        None => not_found("Service not found"),
    }
}

pub(crate) async fn get_team(State(state): State<AppState>) -> Response {
    let listing = resolve_list::<TeamMember, _>(
        state.store.as_ref(),
        Collection::Team,
        ListQuery::active(),
        fixtures::team_members,
    )
    .await;
    sourced(
        "Team members retrieved successfully",
        json!(listing.rows),
        listing.source,
    )
}

pub(crate) async fn get_testimonials(State(state): State<AppState>) -> Response {
    let listing = resolve_list::<Testimonial, _>(
        state.store.as_ref(),
        Collection::Testimonials,
        ListQuery::active(),
        fixtures::testimonials,
    )
    .await;
    sourced(
        "Testimonials retrieved successfully",
        json!(listing.rows),
        listing.source,
    )
}

pub(crate) async fn get_gallery(State(state): State<AppState>) -> Response {
    let listing = resolve_list::<GalleryImage, _>(
        state.store.as_ref(),
        Collection::Gallery,
        ListQuery::active(),
        fixtures::gallery_images,
    )
    .await;
    sourced(
        "Gallery images retrieved successfully",
        json!(listing.rows),
        listing.source,
    )
}

pub(crate) async fn get_gallery_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Response {
    let listing = resolve_list::<GalleryImage, _>(
        state.store.as_ref(),
        Collection::Gallery,
        ListQuery::active().with_category(Some(category)),
        fixtures::gallery_images,
    )
    .await;
    sourced(
        "Gallery images retrieved successfully",
        json!(listing.rows),
        listing.source,
    )
}

pub(crate) async fn get_blogs(State(state): State<AppState>) -> Response {
    let listing = resolve_list::<BlogPost, _>(
        state.store.as_ref(),
        Collection::Blogs,
        ListQuery::active_by_date(),
        fixtures::blog_posts,
    )
    .await;
    sourced(
        "Blog posts retrieved successfully",
        json!(listing.rows),
        listing.source,
    )
}

/// Blog detail is the one read with a write attached: a successful store-path
/// fetch bumps the view counter first. The static path has no write target.
pub(crate) async fn get_blog(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let store = state.store.as_ref();
    match store.increment_blog_views(&slug).await {
        Ok(true) => match store.find_content(Collection::Blogs, &slug).await {
            Ok(Some(value)) => match serde_json::from_value::<BlogPost>(value) {
                Ok(post) => {
                    return sourced(
                        "Blog post retrieved successfully",
                        json!(post),
                        Source::Database,
                    );
                }
                Err(err) => warn!("stored blog post failed to decode: {err}"),
            },
            Ok(None) => warn!("blog post vanished between bump and fetch"),
            Err(err) => warn!("blog fetch failed after view bump: {err}"),
        },
        Ok(false) => {}
        Err(err) => warn!("view increment failed, serving static data: {err}"),
    }
    match fixtures::blog_posts().into_iter().find(|b| b.slug == slug) {
        Some(post) => sourced(
            "Blog post retrieved successfully",
            json!(post),
            Source::Static,
        ),
        None => not_found("Blog post not found"),
    }
}

pub(crate) async fn get_events(State(state): State<AppState>) -> Response {
    let listing = resolve_list::<Event, _>(
        state.store.as_ref(),
        Collection::Events,
        ListQuery::active_by_date(),
        fixtures::events,
    )
    .await;
    sourced(
        "Events retrieved successfully",
        json!(listing.rows),
        listing.source,
    )
}

pub(crate) async fn get_event(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match resolve_detail::<Event, _>(
        state.store.as_ref(),
        Collection::Events,
        &id,
        fixtures::events,
    )
    .await
    {
        Some((event, source)) => sourced("Event retrieved successfully", json!(event), source),
        None => not_found("Event not found"),
    }
}

pub(crate) async fn get_statistics(State(state): State<AppState>) -> Response {
    let listing = resolve_list::<Statistic, _>(
        state.store.as_ref(),
        Collection::Statistics,
        ListQuery::active(),
        fixtures::statistics,
    )
    .await;
    sourced(
        "Statistics retrieved successfully",
        json!(listing.rows),
        listing.source,
    )
}

#[derive(Debug, Deserialize)]
pub(crate) struct FaqParams {
    category: Option<String>,
}

pub(crate) async fn get_faqs(
    State(state): State<AppState>,
    Query(params): Query<FaqParams>,
) -> Response {
    let listing = resolve_list::<Faq, _>(
        state.store.as_ref(),
        Collection::Faqs,
        ListQuery::active().with_category(params.category),
        fixtures::faqs,
    )
    .await;
    sourced(
        "FAQs retrieved successfully",
        json!(listing.rows),
        listing.source,
    )
}

pub(crate) async fn get_living_options(State(state): State<AppState>) -> Response {
    let listing = resolve_list::<LivingOption, _>(
        state.store.as_ref(),
        Collection::LivingOptions,
        ListQuery::active(),
        fixtures::living_options,
    )
    .await;
    sourced(
        "Living options retrieved successfully",
        json!(listing.rows),
        listing.source,
    )
}
