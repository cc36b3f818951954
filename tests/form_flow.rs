//! Form, store, listing and navigation working together.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use website_quote::application::form::{
    FormModel, FormValidator, QuoteFormController, SyncState, params_codec,
};
use website_quote::application::services::{QuoteListing, QuoteStore};
use website_quote::domain::services::PricingEngine;
use website_quote::domain::value_objects::{Price, QueryParams, SortKey};
use website_quote::infrastructure::navigation::{InMemoryNavigator, Navigator};

struct Session {
    form: QuoteFormController,
    listing: QuoteListing,
    nav: InMemoryNavigator,
}

fn session(params: QueryParams) -> Session {
    let store = QuoteStore::in_memory();
    let nav = InMemoryNavigator::with_params(params);
    let form = QuoteFormController::new(
        store.clone(),
        PricingEngine::default(),
        FormValidator::default(),
        Arc::new(nav.clone()),
    );
    Session {
        form,
        listing: QuoteListing::new(store),
        nav,
    }
}

fn submit(session: &mut Session, name: &str, seo: bool, ads: bool, web: Option<(u32, u32)>) {
    session.form.edit(|m| {
        m.client_name = name.to_string();
        m.phone = "612-345-678".to_string();
        m.email = "client@example.com".to_string();
        m.seo_selected = seo;
        m.ads_selected = ads;
        if let Some((pages, languages)) = web {
            m.web_config.selected = true;
            m.web_config.pages = pages;
            m.web_config.languages = languages;
        }
    });
    session.form.submit().unwrap();
}

#[test]
fn submitted_quotes_show_up_in_listing() {
    let mut s = session(QueryParams::new());

    submit(&mut s, "Alice Johnson", true, false, None);
    submit(&mut s, "Bob Smith", false, true, None);
    submit(&mut s, "Charlie Brown", false, false, Some((5, 2)));

    s.listing.select_sort(SortKey::Price);
    let view = s.listing.view().unwrap();
    let totals: Vec<Price> = view.iter().map(|q| q.total_price()).collect();
    assert_eq!(
        totals,
        [Price::from_units(800), Price::from_units(400), Price::from_units(300)]
    );
    assert_eq!(view.first().map(|q| q.services_summary()).unwrap(), "Web (5 pages, 2 languages)");
}

#[test]
fn shared_link_restores_form_and_price() {
    let link = QueryParams::from_iter([
        ("clientName", "Dana White"),
        ("phone", "712345678"),
        ("email", "dana@example.com"),
        ("seo", "true"),
        ("ads", "false"),
        ("web", "true"),
        ("pages", "3"),
        ("languages", "2"),
    ]);
    let s = session(link);

    assert_eq!(s.form.model().client_name, "Dana White");
    assert_eq!(s.form.total_price(), Price::from_units(300 + 500 + 180));
    assert!(s.form.is_valid());
}

#[test]
fn reload_after_edits_restores_same_form() {
    let mut s = session(QueryParams::new());
    s.form.edit(|m| {
        m.client_name = "Eve".to_string();
        m.ads_selected = true;
        m.increment_languages();
    });

    let reloaded = session(s.nav.current_params());

    assert_eq!(reloaded.form.model(), s.form.model());
}

#[test]
fn navigation_change_is_applied_without_feedback() {
    let mut s = session(QueryParams::new());
    let next = QueryParams::from_iter([("clientName", "Frank"), ("web", "true"), ("pages", "4")]);

    s.nav.navigate(next.clone());
    s.form.on_params_changed(&s.nav.current_params());

    assert_eq!(s.form.model().web_config.pages, 4);
    assert_eq!(s.form.sync_state(), SyncState::Idle);
    assert_eq!(s.nav.replacements(), 0);
    assert_eq!(s.nav.current_params(), next);
}

#[test]
fn submit_leaves_cleared_params_behind() {
    let mut s = session(QueryParams::new());
    submit(&mut s, "Grace Hopper", true, true, Some((2, 2)));

    let params = s.nav.current_params();
    assert_eq!(params, params_codec::encode(&FormModel::default()));
    assert_eq!(s.nav.history_len(), 1);

    // The navigator echoing the cleared parameters back keeps the form blank.
    s.form.on_params_changed(&params);
    assert_eq!(s.form.model(), &FormModel::default());
}

#[test]
fn invalid_submission_is_a_no_op() {
    let mut s = session(QueryParams::new());
    s.form.edit(|m| {
        m.client_name = "Henry".to_string();
        m.phone = "912345678".to_string();
        m.email = "henry@example.com".to_string();
    });
    let before = s.nav.current_params();

    assert!(s.form.submit().is_err());
    assert!(s.listing.view().unwrap().is_empty());
    assert_eq!(s.nav.current_params(), before);
    assert_eq!(s.form.model().client_name, "Henry");
}

#[test]
fn negative_size_in_link_blocks_submission() {
    let link = QueryParams::from_iter([
        ("clientName", "Ivy Stone"),
        ("phone", "612345678"),
        ("email", "ivy@example.com"),
        ("web", "true"),
        ("pages", "-3"),
        ("languages", "2abc"),
    ]);
    let mut s = session(link);

    assert_eq!(s.form.model().web_config.pages, 0);
    assert_eq!(s.form.model().web_config.languages, 2);

    let err = s.form.submit().unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert!(errors.has_field("pages"));
    assert!(!errors.has_field("languages"));
    assert!(s.listing.view().unwrap().is_empty());
}
