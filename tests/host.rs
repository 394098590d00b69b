mod common;

use common::Flaky;
use finch::backend::{Backend, NativeAnchor, NativeConstraint};
use finch::headless::HeadlessBackend;
use finch::{Attribute, Axis, Color, Dispatch, Event, Host, Priority, Property, Relation, Ui};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn host<M: 'static + Clone + Send>() -> (Host<HeadlessBackend, M>, crossbeam::channel::Receiver<M>) {
    let _ = tracing_subscriber::fmt::try_init();
    let (dispatch, messages) = Dispatch::channel();
    (Host::new(HeadlessBackend::new(), dispatch).unwrap(), messages)
}

fn list(items: &[&str]) -> Ui<()> {
    Ui::stack(
        vec![Attribute::accessibility_identifier("list")],
        items.iter().map(|item| Ui::label(vec![], *item)).collect(),
        Axis::Vertical,
    )
}

#[test]
fn new_host_is_empty() {
    let (host, _) = host::<()>();
    assert!(!host.is_populated());
    assert!(host.content().is_none());
    assert!(host.ui().is_none());
    assert_eq!(host.backend().len(), 1);
}

#[test]
fn content_is_pinned_to_the_host_view() {
    let (mut host, _) = host::<()>();
    host.set_ui(Ui::label(vec![], "Hello")).unwrap();

    let content = *host.content().unwrap();
    let backend = host.backend();
    assert_eq!(backend.view(*host.view()).unwrap().subviews(), &[content]);

    let pinned: HashSet<_> = backend
        .constraints_of(content)
        .map(|c| {
            assert_eq!(c.priority, Priority::REQUIRED);
            assert_eq!(c.second.as_ref().unwrap().view, *host.view());
            assert_eq!(Some(c.first.property), c.second.as_ref().map(|s| s.property));
            c.first.property
        })
        .collect();
    let expected: HashSet<_> = vec![
        Property::Top,
        Property::Leading,
        Property::Trailing,
        Property::Bottom,
    ]
    .into_iter()
    .collect();
    assert_eq!(pinned, expected);
}

#[test]
fn new_description_replaces_every_old_view() {
    let (mut host, _) = host::<()>();
    host.set_ui(list(&["a", "b", "c"])).unwrap();
    let old = host.backend().descendants(*host.content().unwrap());
    assert_eq!(old.len(), 4);

    host.set_ui(list(&["d"])).unwrap();
    let backend = host.backend();
    for id in &old {
        assert!(!backend.contains(*id), "{} should have been removed", id);
    }
    assert_eq!(backend.len(), 1 + 2);
    assert_eq!(backend.constraints().len(), 4);
    assert_eq!(host.ui(), Some(&list(&["d"])));
}

#[test]
fn identical_descriptions_still_rebuild() {
    let (mut host, _) = host::<()>();
    host.set_ui(list(&["a"])).unwrap();
    let first = *host.content().unwrap();
    host.set_ui(list(&["a"])).unwrap();
    let second = *host.content().unwrap();
    assert_ne!(first, second);
    assert!(!host.backend().contains(first));
}

#[test]
fn accessibility_identifier_is_gone_after_reassigning() {
    let (mut host, _) = host::<()>();
    host.set_ui(Ui::label(vec![Attribute::accessibility_identifier("foo")], "Foo"))
        .unwrap();
    assert!(host.backend().find("foo").is_some());

    host.set_ui(Ui::label(vec![], "Foo")).unwrap();
    assert!(host.backend().find("foo").is_none());
}

#[test]
fn host_view_survives_updates() {
    let (mut host, _) = host::<()>();
    let view = *host.view();
    let external = host.backend_mut().new_view(finch::backend::NativeKind::View).unwrap();
    host.backend_mut().add_subview(&external, &view).unwrap();
    host.backend_mut()
        .activate(NativeConstraint {
            first: NativeAnchor {
                view,
                property: Property::Width,
            },
            relation: Relation::Equal,
            second: None,
            multiplier: 1.,
            constant: 320.,
            priority: Priority::REQUIRED,
        })
        .unwrap();

    for color in &[Color::RED, Color::GREEN, Color::BLUE] {
        host.set_ui(Ui::custom(
            vec![Attribute::background_color(*color)],
            (),
            |view| vec![view.height().equal(10.)],
        ))
        .unwrap();
    }

    assert_eq!(*host.view(), view);
    let backend = host.backend();
    assert_eq!(backend.view(view).unwrap().superview(), Some(external));
    assert!(backend
        .constraints_of(view)
        .any(|c| c.second.is_none() && c.constant == 320.));
}

#[test]
fn old_bindings_are_released() {
    let (mut host, messages) = host::<u8>();
    host.set_ui(Ui::action_button("One", 1)).unwrap();
    let old_button = *host.content().unwrap();

    host.set_ui(Ui::action_button("Two", 2)).unwrap();
    let new_button = *host.content().unwrap();
    let backend = host.backend();
    assert!(!backend.send_actions(old_button, Event::TouchUpInside));
    assert!(backend.send_actions(new_button, Event::TouchUpInside));
    assert_eq!(backend.bindings().len(), 1);
    assert_eq!(messages.try_iter().collect::<Vec<_>>(), vec![2]);
}

#[test]
fn failed_attachment_leaves_nothing_behind() {
    let (dispatch, _) = Dispatch::<()>::channel();
    let mut host = Host::new(Flaky::new(), dispatch).unwrap();
    host.set_ui(Ui::label(vec![], "one")).unwrap();

    host.backend_mut().fail_activate = true;
    assert_eq!(
        host.set_ui(Ui::label(vec![], "two")),
        Err("activate refused".to_string())
    );
    assert!(!host.is_populated());
    assert!(host.ui().is_none());
    let view = *host.view();
    assert!(host.backend().inner.view(view).unwrap().subviews().is_empty());
    assert_eq!(host.backend().inner.len(), 1);

    host.backend_mut().fail_activate = false;
    host.set_ui(Ui::label(vec![], "three")).unwrap();
    let backend = &host.backend().inner;
    assert_eq!(backend.view(view).unwrap().subviews(), &[*host.content().unwrap()]);
    assert_eq!(backend.len(), 2);
    assert_eq!(backend.constraints().len(), 4);
}

#[test]
fn failed_render_keeps_the_old_content() {
    let (dispatch, _) = Dispatch::<()>::channel();
    let mut host = Host::new(Flaky::new(), dispatch).unwrap();
    host.set_ui(Ui::label(vec![], "one")).unwrap();
    let old = *host.content().unwrap();

    host.backend_mut().fail_activate = true;
    let result = host.set_ui(Ui::custom(vec![], (Ui::label(vec![], "two"),), |(view, label)| {
        vec![label.edges().equal(view.edges())]
    }));
    assert!(result.is_err());
    assert_eq!(host.content(), Some(&old));
    assert_eq!(host.ui(), Some(&Ui::label(vec![], "one")));
    assert_eq!(host.backend().inner.len(), 2);
}
