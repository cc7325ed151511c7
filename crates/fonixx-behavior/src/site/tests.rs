use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use fonixx_common::{DomCommand, PageError, PageEvent, Target};
use fonixx_config::FonixxConfig;

use super::*;
use crate::form::Presenter;
use crate::form::FieldName;
use crate::page::MemoryPage;

fn site(page: MemoryPage) -> Site<MemoryPage> {
    Site::init(&FonixxConfig::default(), page)
}

fn ready(site: &mut Site<MemoryPage>) {
    let event = site.page().ready_event();
    site.handle(&event, Instant::now()).unwrap();
}

fn submit(site: &mut Site<MemoryPage>, values: &[(&str, &str)], now: Instant) -> Handled {
    let fields: BTreeMap<String, String> = values
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    site.handle(&PageEvent::Submit { fields }, now).unwrap()
}

const VALID: &[(&str, &str)] = &[
    ("name", "Ada Lovelace"),
    ("email", "ada@example.com"),
    ("phone", "+1 555-123-4567"),
    ("service", "operations"),
    ("message", "Please call me back."),
];

#[test]
fn init_writes_nothing_before_ready() {
    let site = site(MemoryPage::contact_form());
    assert!(site.page().commands().is_empty());
    assert!(site.snapshot().is_none());
}

#[test]
fn ready_marks_active_link_and_hides_reveal_targets() {
    let page = MemoryPage::contact_form()
        .with_path("/contact.html")
        .with_nav_links(["index.html", "contact.html"])
        .with_reveal_targets(["reveal-0", "reveal-1", "reveal-2"]);
    let mut site = site(page);
    ready(&mut site);

    let page = site.page();
    assert!(page.has_class(
        &Target::selector(".nav-menu a[href=\"contact.html\"]"),
        "active"
    ));
    for id in ["reveal-0", "reveal-1", "reveal-2"] {
        assert_eq!(page.style(&Target::id(id), "opacity"), Some("0"));
    }
    assert_eq!(site.snapshot().map(|s| s.path.as_str()), Some("/contact.html"));
}

#[test]
fn submitted_values_are_what_gets_validated() {
    let mut site = site(MemoryPage::contact_form());
    ready(&mut site);

    let Handled::Submitted(outcome) = submit(&mut site, VALID, Instant::now()) else {
        panic!("expected a submission");
    };
    assert!(outcome.all_valid);
    assert_eq!(site.page().notices().len(), 1);
    assert_eq!(site.page().field(FieldName::Name), Some(""));
}

#[test]
fn invalid_email_annotates_only_email() {
    let mut site = site(MemoryPage::contact_form());
    ready(&mut site);

    let mut values = VALID.to_vec();
    values[1] = ("email", "ada@example");
    let Handled::Submitted(outcome) = submit(&mut site, &values, Instant::now()) else {
        panic!("expected a submission");
    };

    assert_eq!(outcome.failed_fields(), vec![FieldName::Email]);
    let notes = site.page().annotations();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].1.text, "Please enter a valid email");
    assert_eq!(site.page().field(FieldName::Email), Some("ada@example"));
}

#[test]
fn typing_clears_the_edited_fields_annotation() {
    let mut site = site(MemoryPage::contact_form());
    ready(&mut site);
    submit(&mut site, &[], Instant::now());
    assert_eq!(site.page().annotations().len(), 5);

    let typed = site.page().input_event(FieldName::Phone, "+1");
    assert_eq!(site.handle(&typed, Instant::now()).unwrap(), Handled::Applied);
    assert_eq!(site.page().field(FieldName::Phone), Some("+1"));
    assert_eq!(site.page().annotations().len(), 4);

    let again = site.page().input_event(FieldName::Phone, "+1 5");
    assert_eq!(site.handle(&again, Instant::now()).unwrap(), Handled::Ignored);
}

#[test]
fn input_for_unknown_field_is_rejected() {
    let mut site = site(MemoryPage::contact_form());
    let event = PageEvent::Input {
        field: "company".into(),
        value: "Acme".into(),
    };

    let err = site.handle(&event, Instant::now()).unwrap_err();
    assert!(matches!(err, PageError::MalformedPayload { ref kind, .. } if kind == "input"));
    assert!(site.page().commands().is_empty());
}

#[test]
fn scroll_and_menu_events_reach_the_navbar() {
    let mut site = site(MemoryPage::contact_form());
    ready(&mut site);
    let now = Instant::now();

    assert_eq!(
        site.handle(&PageEvent::Scroll { y: 120.0 }, now).unwrap(),
        Handled::Applied
    );
    assert_eq!(
        site.handle(&PageEvent::Scroll { y: 300.0 }, now).unwrap(),
        Handled::Ignored
    );
    assert!(site.nav().is_scrolled());

    site.handle(&PageEvent::MenuToggle, now).unwrap();
    assert!(site.nav().is_menu_open());
    let click = PageEvent::NavLinkClick {
        href: "about.html".into(),
    };
    assert_eq!(site.handle(&click, now).unwrap(), Handled::Applied);
    assert!(!site.nav().is_menu_open());
}

#[test]
fn anchor_click_scrolls_to_known_element() {
    let page = MemoryPage::contact_form().with_element("services");
    let mut site = site(page);
    ready(&mut site);
    let now = Instant::now();

    let hit = PageEvent::AnchorClick {
        href: "#services".into(),
    };
    let miss = PageEvent::AnchorClick {
        href: "#pricing".into(),
    };
    assert_eq!(site.handle(&hit, now).unwrap(), Handled::Applied);
    assert_eq!(site.handle(&miss, now).unwrap(), Handled::Ignored);
    assert_eq!(site.page().scrolls(), &[Target::id("services")]);
}

#[test]
fn intersection_reveals_once() {
    let page = MemoryPage::contact_form().with_reveal_targets(["reveal-0"]);
    let mut site = site(page);
    ready(&mut site);
    let event = PageEvent::Intersect {
        element: "reveal-0".into(),
        ratio: 0.4,
    };

    assert_eq!(site.handle(&event, Instant::now()).unwrap(), Handled::Applied);
    assert_eq!(site.handle(&event, Instant::now()).unwrap(), Handled::Ignored);
}

#[test]
fn tick_drives_the_notice_lifecycle() {
    let start = Instant::now();
    let mut site = site(MemoryPage::contact_form());
    ready(&mut site);
    submit(&mut site, VALID, start);

    assert_eq!(site.next_deadline(), Some(start + Duration::from_secs(5)));
    assert_eq!(site.tick(start + Duration::from_secs(5)), 1);
    assert_eq!(site.tick(start + Duration::from_millis(5500)), 1);
    assert!(site.page().notices().is_empty());
    assert_eq!(site.next_deadline(), None);
}

#[test]
fn leaving_fades_body_and_drops_timers() {
    let start = Instant::now();
    let mut site = site(MemoryPage::contact_form());
    ready(&mut site);
    submit(&mut site, VALID, start);

    site.handle(&PageEvent::BeforeUnload, start).unwrap();

    let body = Target::selector("body");
    assert_eq!(site.page().style(&body, "opacity"), Some("0"));
    assert_eq!(
        site.page().style(&body, "transition"),
        Some("opacity 0.3s ease")
    );
    assert_eq!(site.next_deadline(), None);
    assert_eq!(site.tick(start + Duration::from_secs(30)), 0);
}

#[test]
fn every_command_survives_the_wire() {
    let mut site = site(
        MemoryPage::contact_form()
            .with_element("services")
            .with_reveal_targets(["reveal-0"]),
    );
    ready(&mut site);
    submit(&mut site, &[], Instant::now());
    site.handle(
        &PageEvent::AnchorClick {
            href: "#services".into(),
        },
        Instant::now(),
    )
    .unwrap();

    for command in site.page().commands() {
        let json = serde_json::to_string(command).unwrap();
        let back: DomCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, command);
    }
}

#[test]
fn cancel_pending_keeps_the_page_as_is() {
    let start = Instant::now();
    let mut site = site(MemoryPage::contact_form());
    ready(&mut site);
    submit(&mut site, VALID, start);
    let applied = site.page().commands().len();

    assert_eq!(site.cancel_pending(), 2);
    assert_eq!(site.page().commands().len(), applied);
    assert_eq!(site.page().notices().len(), 1);
}

fn reload(site: &mut Site<MemoryPage>) {
    site.handle(&PageEvent::BeforeUnload, Instant::now()).unwrap();
    site.page_mut().reload();
    ready(site);
}

#[test]
fn reload_restarts_navbar_scroll_state() {
    let mut site = site(MemoryPage::contact_form());
    ready(&mut site);
    let now = Instant::now();
    site.handle(&PageEvent::Scroll { y: 500.0 }, now).unwrap();
    site.handle(&PageEvent::MenuToggle, now).unwrap();

    reload(&mut site);
    assert!(!site.nav().is_scrolled());
    assert!(!site.nav().is_menu_open());

    let before = site.page().commands().len();
    assert_eq!(
        site.handle(&PageEvent::Scroll { y: 300.0 }, now).unwrap(),
        Handled::Applied
    );
    assert_eq!(
        &site.page().commands()[before..],
        &[DomCommand::add_class(Target::selector(".navbar"), "scrolled")]
    );
}

#[test]
fn reload_hides_reveal_targets_again() {
    let page = MemoryPage::contact_form().with_reveal_targets(["reveal-0", "reveal-1"]);
    let mut site = site(page);
    ready(&mut site);
    let seen = PageEvent::Intersect {
        element: "reveal-1".into(),
        ratio: 0.5,
    };
    site.handle(&seen, Instant::now()).unwrap();

    reload(&mut site);

    for id in ["reveal-0", "reveal-1"] {
        assert_eq!(site.page().style(&Target::id(id), "opacity"), Some("0"));
    }
    assert_eq!(site.handle(&seen, Instant::now()).unwrap(), Handled::Applied);
}

#[test]
fn shallow_intersection_leaves_target_hidden_until_threshold() {
    let page = MemoryPage::contact_form().with_reveal_targets(["reveal-0"]);
    let mut site = site(page);
    ready(&mut site);
    let target = Target::id("reveal-0");

    let shallow = PageEvent::Intersect {
        element: "reveal-0".into(),
        ratio: 0.05,
    };
    assert_eq!(site.handle(&shallow, Instant::now()).unwrap(), Handled::Ignored);
    assert_eq!(site.page().style(&target, "animation"), None);

    let deeper = PageEvent::Intersect {
        element: "reveal-0".into(),
        ratio: 0.1,
    };
    assert_eq!(site.handle(&deeper, Instant::now()).unwrap(), Handled::Applied);
    assert_eq!(
        site.page().style(&target, "animation"),
        Some("fadeInUp 0.8s ease forwards")
    );
}

#[test]
fn ready_without_unload_forgets_old_annotations_and_timers() {
    let start = Instant::now();
    let mut site = site(MemoryPage::contact_form());
    ready(&mut site);
    submit(&mut site, VALID, start);
    submit(&mut site, &[], start);
    assert_eq!(site.form().presenter().annotated().len(), 5);
    assert!(site.next_deadline().is_some());

    // Navigation where the page never reported leaving.
    site.page_mut().reload();
    ready(&mut site);

    assert!(site.form().presenter().annotated().is_empty());
    assert_eq!(site.next_deadline(), None);
    assert_eq!(site.tick(start + Duration::from_secs(30)), 0);

    let before = site.page().commands().len();
    let typed = site.page().input_event(FieldName::Name, "A");
    assert_eq!(site.handle(&typed, start).unwrap(), Handled::Ignored);
    submit(&mut site, &[], start);
    assert!(site.page().commands()[before..]
        .iter()
        .all(|c| !matches!(c, DomCommand::Remove { .. })));
    let fields: Vec<&str> = site.page().annotations().iter().map(|(f, _)| *f).collect();
    assert_eq!(fields, vec!["email", "phone", "service", "message"]);
}
