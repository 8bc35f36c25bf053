//! Tests for the page renderer.

use quire_core::{Color, Embed, EmbedField};
use quire_pages::{DisplayOptions, Paginator, PaginatorBuilder};

fn fielded(count: usize, per_page: usize) -> Paginator {
    let fields: Vec<EmbedField> = (1..=count)
        .map(|n| EmbedField::new(format!("#{}", n), "value"))
        .collect();
    PaginatorBuilder::new()
        .with_pages(fields)
        .with_options(DisplayOptions::default().with_fields_per_page(per_page))
        .build()
        .expect("Valid paginator")
}

fn embed_of(paginator: &Paginator, index: usize) -> Embed {
    paginator
        .render(index)
        .embed()
        .clone()
        .expect("Paginated payloads carry an embed")
}

#[test]
fn test_flat_page_body_is_current_item() {
    let paginator = PaginatorBuilder::new()
        .with_pages(vec!["first", "second", "third"])
        .with_title("Items")
        .with_content("Here you go")
        .build()
        .expect("Valid paginator");

    let payload = paginator.render(2);
    assert_eq!(payload.content(), "Here you go");
    let embed = payload.embed().clone().expect("Embed");
    assert_eq!(embed.description().as_deref(), Some("second"));
    assert_eq!(embed.title().as_deref(), Some("Items"));
    assert_eq!(embed.footer().as_deref(), Some("Page 2/3"));
    assert_eq!(*embed.color(), Some(Color::SUCCESS));
}

#[test]
fn test_single_page_has_no_footer() {
    let paginator = PaginatorBuilder::new()
        .with_pages(vec!["only"])
        .build()
        .expect("Valid paginator");
    assert!(embed_of(&paginator, 1).footer().is_none());
}

#[test]
fn test_fielded_pages_fill_all_but_last() {
    let paginator = fielded(14, 6);
    assert_eq!(paginator.page_count(), 3);
    assert_eq!(embed_of(&paginator, 1).fields().len(), 6);
    assert_eq!(embed_of(&paginator, 2).fields().len(), 6);
    assert_eq!(embed_of(&paginator, 3).fields().len(), 2);
    assert_eq!(embed_of(&paginator, 3).fields()[0].name(), "#13");
}

#[test]
fn test_fielded_last_page_full_when_divisible() {
    let paginator = fielded(12, 4);
    assert_eq!(paginator.page_count(), 3);
    assert_eq!(embed_of(&paginator, 3).fields().len(), 4);
    assert_eq!(embed_of(&paginator, 3).fields()[3].name(), "#12");
}

#[test]
fn test_fielded_single_page_has_no_footer() {
    let paginator = fielded(5, 6);
    assert_eq!(paginator.page_count(), 1);
    let embed = embed_of(&paginator, 1);
    assert_eq!(embed.fields().len(), 5);
    assert!(embed.footer().is_none());
}

#[test]
fn test_embedded_pages_keep_their_body() {
    let paginator = PaginatorBuilder::new()
        .with_pages(vec![
            Embed::default()
                .with_title("Own title")
                .with_description("a")
                .with_color(Color(0x123456)),
            Embed::default().with_description("b"),
        ])
        .build()
        .expect("Valid paginator");

    let first = embed_of(&paginator, 1);
    assert_eq!(first.title().as_deref(), Some("Own title"));
    assert_eq!(*first.color(), Some(Color(0x123456)));
    assert_eq!(first.footer().as_deref(), Some("Page 1/2"));
}

#[test]
fn test_single_embedded_page_keeps_own_footer() {
    let paginator = PaginatorBuilder::new()
        .with_pages(vec![Embed::default().with_description("a")])
        .build()
        .expect("Valid paginator");
    assert!(embed_of(&paginator, 1).footer().is_none());

    let paginator = PaginatorBuilder::new()
        .with_pages(vec![Embed::default().with_footer("Source: wiki")])
        .build()
        .expect("Valid paginator");
    assert_eq!(embed_of(&paginator, 1).footer().as_deref(), Some("Source: wiki"));
}

#[test]
fn test_embedded_pages_take_paginator_title() {
    let paginator = PaginatorBuilder::new()
        .with_pages(vec![Embed::default().with_title("Own title"), Embed::default()])
        .with_title("Shared")
        .build()
        .expect("Valid paginator");
    assert_eq!(embed_of(&paginator, 2).title().as_deref(), Some("Shared"));
}

#[test]
fn test_blank_title_is_skipped() {
    let paginator = PaginatorBuilder::new()
        .with_pages(vec!["a"])
        .with_title("   ")
        .build()
        .expect("Valid paginator");
    assert!(embed_of(&paginator, 1).title().is_none());
}

#[test]
fn test_out_of_range_index_is_clamped() {
    let paginator = PaginatorBuilder::new()
        .with_pages(vec!["a", "b"])
        .build()
        .expect("Valid paginator");
    assert_eq!(embed_of(&paginator, 0).description().as_deref(), Some("a"));
    assert_eq!(embed_of(&paginator, 9).description().as_deref(), Some("b"));
}
