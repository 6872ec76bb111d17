use super::*;
use crate::content::projects::find_project;

#[test]
fn every_portfolio_card_opens_a_known_project() {
    for card in PORTFOLIO_CARDS {
        assert!(find_project(card.project_id).is_some(), "{}", card.project_id);
    }
}

#[test]
fn every_card_category_has_a_filter_button() {
    for card in PORTFOLIO_CARDS {
        assert!(
            FILTER_BUTTONS.iter().any(|b| b.filter == card.filter_category),
            "{}",
            card.filter_category
        );
    }
}

#[test]
fn first_filter_button_is_all() {
    assert_eq!(FILTER_BUTTONS.first().map(|b| b.filter), Some("all"));
}

#[test]
fn nav_links_are_in_page_anchors() {
    assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('#') && l.href.len() > 1));
}

#[test]
fn welcome_banner_names_site_and_contact() {
    let banner = welcome_banner("hello@example.com");
    assert!(banner.starts_with("Welcome to Ohlluu's Portfolio!"));
    assert!(banner.contains("Let's connect!"));
    assert!(banner.ends_with("hello@example.com"));
}
