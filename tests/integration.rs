// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios across the domain state machines, the feed
//! coordinator, and the data layer.

use std::time::{Duration, Instant};
use tastereel::config::{self, Config};
use tastereel::data::{FeedRepository, Latency};
use tastereel::domain::author::{Author, Profile};
use tastereel::domain::review::{MediaSource, ReviewItem};
use tastereel::domain::vote::Vote;
use tastereel::i18n::I18n;
use tastereel::ui::feed::item::{self, media};
use tastereel::ui::feed::Coordinator;
use tempfile::tempdir;

fn review(id: &str) -> ReviewItem {
    ReviewItem {
        id: id.to_string(),
        author: Author::User {
            profile: Profile {
                id: "u1".to_string(),
                username: "tester".to_string(),
                display_name: "Tester".to_string(),
                avatar_url: String::new(),
            },
            verified: false,
        },
        business_id: "b1".to_string(),
        business_name: "Golden Wok".to_string(),
        rating: Some(4.0),
        media: MediaSource::Video {
            url: format!("{id}.mp4"),
            poster_url: None,
        },
        caption: "caption".to_string(),
        timestamp_label: "1h ago".to_string(),
        agree_count: 3,
        disagree_count: 0,
        comment_count: 0,
        tags: vec!["noodles".to_string()],
    }
}

fn feed_of(ids: &[&str]) -> Coordinator {
    let mut coordinator = Coordinator::default();
    coordinator.replace_items(ids.iter().map(|id| review(id)).collect(), true);
    let now = Instant::now();
    let config = Config::default();
    for index in 0..ids.len() {
        coordinator.handle_card(
            index,
            item::Message::Media(media::Message::SourceLoaded),
            now,
            &config,
        );
    }
    coordinator
}

fn swipe(coordinator: &mut Coordinator, index: usize, to_x: f32, now: Instant) -> item::Event {
    let config = Config::default();
    coordinator.handle_card(
        index,
        item::Message::CursorMoved(iced::Point::ORIGIN),
        now,
        &config,
    );
    coordinator.handle_card(index, item::Message::Pressed, now, &config);
    coordinator.handle_card(
        index,
        item::Message::CursorMoved(iced::Point::new(to_x, 0.0)),
        now,
        &config,
    );
    coordinator.handle_card(index, item::Message::Released, now, &config)
}

#[test]
fn swipe_chain_walks_the_whole_feed() {
    let mut coordinator = feed_of(&["a", "b", "c"]);
    let config = Config::default();
    let mut now = Instant::now();

    // A: swipe right. The session advances to B, the scroll target moves,
    // and B's video starts while A rewinds.
    let event = swipe(&mut coordinator, 0, 150.0, now);
    assert_eq!(event, item::Event::InteractionComplete);
    let (target, commands) = coordinator.interaction_complete(now, &config);
    assert!(target.is_some());
    assert_eq!(coordinator.session().active_index(), 1);
    assert!(commands.contains(&(0, media::Effect::PauseAndRewind)));
    assert!(commands.contains(&(1, media::Effect::Play)));
    assert_eq!(coordinator.cards()[0].vote().vote(), Vote::Agreed);

    now += config.advance_settle() + Duration::from_millis(10);
    coordinator.tick(now);

    // B: swipe left. Advances to C with a disagree recorded.
    let event = swipe(&mut coordinator, 1, -150.0, now);
    assert_eq!(event, item::Event::InteractionComplete);
    coordinator.interaction_complete(now, &config);
    assert_eq!(coordinator.session().active_index(), 2);
    assert_eq!(coordinator.cards()[1].vote().vote(), Vote::Disagreed);

    now += config.advance_settle() + Duration::from_millis(10);
    coordinator.tick(now);

    // C is the last item: the swipe records the vote but nothing scrolls.
    let event = swipe(&mut coordinator, 2, 150.0, now);
    assert_eq!(event, item::Event::InteractionComplete);
    let (target, _) = coordinator.interaction_complete(now, &config);
    assert_eq!(target, None);
    assert_eq!(coordinator.session().active_index(), 2);
    assert!(!coordinator.cards()[2].gesture().is_advancing());
}

#[test]
fn double_tap_pulse_agrees_and_self_hides() {
    let mut coordinator = feed_of(&["a", "b"]);
    let config = Config::default();
    let first = Instant::now();

    coordinator.handle_card(0, item::Message::Pressed, first, &config);
    coordinator.handle_card(0, item::Message::Released, first, &config);

    let second = first + Duration::from_millis(150);
    coordinator.handle_card(0, item::Message::Pressed, second, &config);
    coordinator.handle_card(0, item::Message::Released, second, &config);

    let card = &coordinator.cards()[0];
    assert_eq!(card.vote().vote(), Vote::Agreed);
    assert!(card.pulse_visible(second + Duration::from_millis(10)));
    // Double-tap agrees in place: no advance.
    assert_eq!(coordinator.session().active_index(), 0);

    let later = second + config.pulse_duration() + Duration::from_millis(10);
    coordinator.tick(later);
    assert!(!coordinator.cards()[0].pulse_visible(later));
}

#[test]
fn sub_threshold_drag_snaps_back_without_voting() {
    let mut coordinator = feed_of(&["a", "b"]);
    let event = swipe(&mut coordinator, 0, 60.0, Instant::now());

    assert_eq!(event, item::Event::None);
    let card = &coordinator.cards()[0];
    assert_eq!(card.vote().vote(), Vote::None);
    assert_eq!(card.gesture().drag_x(), 0.0);
    assert_eq!(coordinator.session().active_index(), 0);
}

#[test]
fn replacing_the_feed_resets_position_and_votes() {
    let mut coordinator = feed_of(&["a", "b", "c"]);
    let config = Config::default();
    let now = Instant::now();

    swipe(&mut coordinator, 0, 150.0, now);
    coordinator.interaction_complete(now, &config);
    assert_eq!(coordinator.session().active_index(), 1);

    // Switching sources replaces the items; position and interaction
    // state start over, even for an item with the same id.
    coordinator.replace_items(vec![review("a"), review("z")], true);
    assert_eq!(coordinator.session().active_index(), 0);
    assert_eq!(coordinator.cards()[0].vote().vote(), Vote::None);
    assert!(!coordinator.cards()[0].gesture().is_advancing());
}

#[tokio::test]
async fn saving_a_post_creates_the_list_on_first_use() {
    let repository = FeedRepository::seeded(Latency::none());
    let user_id = repository.current_author().profile().id.clone();
    let feed = repository.feed().await.expect("feed failed");

    let list = repository
        .create_list("Saved".to_string(), true, Vec::new())
        .await
        .expect("create failed");
    repository
        .add_to_list(&list.id, &feed[0].id)
        .await
        .expect("add failed");

    let lists = repository.user_lists(&user_id).await.expect("lists failed");
    let saved = lists
        .iter()
        .find(|l| l.title == "Saved")
        .expect("saved list missing");
    assert_eq!(saved.item_count, 1);
    assert!(saved.is_private);
}

#[tokio::test]
async fn tag_search_narrows_the_feed() {
    let repository = FeedRepository::seeded(Latency::none());
    let all = repository.search_posts("").await.expect("search failed");
    let hits = repository.search_posts("wok").await.expect("search failed");
    assert!(!hits.is_empty());
    assert!(hits.len() < all.len());
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let initial = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}
