use cgmath::Vector2;
use finch::headless::{Frames, HeadlessBackend, HeadlessConfig, HeadlessError, ViewId};
use finch::{
    priority, render, Attribute, Axis, Color, Constraint, Dispatch, Host, Insets, Priority, Rect,
    Ui,
};

fn assert_frame(frames: &Frames, view: ViewId, (x, y, width, height): (f64, f64, f64, f64)) {
    let frame: Rect = frames.get(view).expect("view has no frame");
    let actual = [frame.origin.x, frame.origin.y, frame.size.x, frame.size.y];
    let expected = [x, y, width, height];
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!(
            (a - e).abs() < 1e-6,
            "frame of {} is {:?}, expected {:?}",
            view,
            actual,
            expected
        );
    }
}

fn render_ui(backend: &mut HeadlessBackend, ui: &Ui<()>) -> ViewId {
    let _ = tracing_subscriber::fmt::try_init();
    let (dispatch, _) = Dispatch::channel();
    render(backend, ui, &dispatch).unwrap()
}

fn square(color: Color) -> Ui<()> {
    Ui::custom(vec![Attribute::background_color(color)], (), |view| {
        vec![view.width().equal(20.), view.height().equal(20.)]
    })
}

#[test]
fn label_centered_in_container() {
    let mut backend = HeadlessBackend::new();
    let ui = Ui::custom(
        vec![Attribute::background_color(Color::LIGHT_GRAY)],
        (Ui::label(vec![], "Label"),),
        |(view, label)| {
            vec![
                view.width().equal(200.),
                view.height().equal(50.),
                label.center().equal(view.center()),
            ]
        },
    );
    let container = render_ui(&mut backend, &ui);
    let label = backend.view(container).unwrap().subviews()[0];

    let frames = backend.layout(container, None).unwrap();
    assert_eq!(frames.len(), 2);
    assert_frame(&frames, container, (0., 0., 200., 50.));
    assert_frame(&frames, label, (80., 15., 40., 20.));
    assert_eq!(
        frames.get(label).unwrap().center(),
        frames.get(container).unwrap().center()
    );
}

#[test]
fn squares_side_by_side() {
    let mut backend = HeadlessBackend::new();
    let ui = Ui::custom(
        vec![],
        (square(Color::RED), square(Color::BLUE)),
        |(view, red, blue)| {
            vec![
                red.top().equal(view.top() + 5.),
                red.leading().equal(view.leading() + 5.),
                blue.top().equal(red.top()),
                blue.leading().equal(red.trailing() + 5.),
                view.trailing().equal(blue.trailing() + 5.),
                view.bottom().equal(red.bottom() + 5.),
            ]
        },
    );
    let container = render_ui(&mut backend, &ui);
    let children = backend.view(container).unwrap().subviews().to_vec();

    let frames = backend.layout(container, None).unwrap();
    assert_frame(&frames, container, (0., 0., 55., 30.));
    assert_frame(&frames, children[0], (5., 5., 20., 20.));
    assert_frame(&frames, children[1], (30., 5., 20., 20.));
}

#[test]
fn edges_inset_inside_host() {
    let (dispatch, _) = Dispatch::channel();
    let mut host = Host::new(HeadlessBackend::new(), dispatch).unwrap();
    host.set_ui(Ui::<()>::custom(
        vec![],
        (Ui::custom(vec![], (), |_| Vec::<Constraint>::new()),),
        |(view, inner)| vec![inner.edges().equal(view.edges().inset(Insets::uniform(5.)))],
    ))
    .unwrap();

    let content = *host.content().unwrap();
    let inner = host.backend().view(content).unwrap().subviews()[0];
    let frames = host
        .backend()
        .layout(*host.view(), Some(Vector2::new(100., 60.)))
        .unwrap();
    assert_frame(&frames, inner, (5., 5., 90., 50.));

    let outer = frames.get(content).unwrap();
    assert_eq!(outer.inset(Insets::uniform(5.)), frames.get(inner).unwrap());
    assert!(outer.contains_rect(frames.get(inner).unwrap()));
}

#[test]
fn vertical_stack_fits_its_widest_label() {
    let mut backend = HeadlessBackend::new();
    let ui = Ui::stack(
        vec![],
        vec![Ui::label(vec![], "First"), Ui::label(vec![], "Second")],
        Axis::Vertical,
    );
    let stack = render_ui(&mut backend, &ui);
    let arranged = backend.view(stack).unwrap().arranged_subviews().to_vec();

    let frames = backend.layout(stack, None).unwrap();
    assert_frame(&frames, stack, (0., 0., 48., 40.));
    assert_frame(&frames, arranged[0], (0., 0., 48., 20.));
    assert_frame(&frames, arranged[1], (0., 20., 48., 20.));
}

#[test]
fn horizontal_stack_chains_along_its_axis() {
    let config = HeadlessConfig::new().with_glyph_width(10.).with_line_height(16.);
    let mut backend = HeadlessBackend::with_config(config);
    let ui = Ui::stack(
        vec![],
        vec![square(Color::RED), Ui::label(vec![], "abc"), square(Color::BLUE)],
        Axis::Horizontal,
    );
    let stack = render_ui(&mut backend, &ui);
    let arranged = backend.view(stack).unwrap().arranged_subviews().to_vec();

    let frames = backend.layout(stack, None).unwrap();
    assert_frame(&frames, stack, (0., 0., 70., 20.));
    assert_frame(&frames, arranged[0], (0., 0., 20., 20.));
    assert_frame(&frames, arranged[1], (20., 0., 30., 20.));
    assert_frame(&frames, arranged[2], (50., 0., 20., 20.));
}

#[test]
fn content_priorities_decide_who_stretches() {
    let mut backend = HeadlessBackend::new();
    let ui = Ui::custom(
        vec![],
        (
            Ui::label(
                vec![Attribute::content_hugging_priority(
                    Axis::Horizontal,
                    Priority::DEFAULT_HIGH,
                )],
                "Name",
            ),
            Ui::label(vec![], "Value"),
        ),
        |(view, name, value)| {
            vec![
                view.width().equal(200.),
                name.leading().equal(view.leading()),
                value.leading().equal(name.trailing()),
                value.trailing().equal(view.trailing()),
                name.top().equal(view.top()),
                value.top().equal(view.top()),
                view.bottom().equal(name.bottom()),
            ]
        },
    );
    let container = render_ui(&mut backend, &ui);
    let children = backend.view(container).unwrap().subviews().to_vec();

    let frames = backend.layout(container, None).unwrap();
    assert_frame(&frames, children[0], (0., 0., 32., 20.));
    assert_frame(&frames, children[1], (32., 0., 168., 20.));
}

#[test]
fn higher_optional_priority_wins() {
    let mut backend = HeadlessBackend::new();
    let ui = Ui::custom(vec![], (), |view| {
        vec![
            view.height().equal(10.),
            priority(Priority::new(501), view.width().equal(10.)),
            priority(Priority::new(999), view.width().equal(100.)),
        ]
    });
    let container = render_ui(&mut backend, &ui);
    let frames = backend.layout(container, None).unwrap();
    assert_frame(&frames, container, (0., 0., 100., 10.));

    let ui = Ui::custom(vec![], (), |view| {
        vec![
            view.height().equal(10.),
            priority(Priority::new(250), view.width().equal(100.)),
            priority(Priority::new(251), view.width().equal(10.)),
        ]
    });
    let container = render_ui(&mut backend, &ui);
    let frames = backend.layout(container, None).unwrap();
    assert_frame(&frames, container, (0., 0., 10., 10.));
}

#[test]
fn conflicting_required_constraints_are_reported() {
    let mut backend = HeadlessBackend::new();
    let ui = Ui::custom(vec![], (), |view| {
        vec![view.width().equal(10.), view.width().equal(20.)]
    });
    let container = render_ui(&mut backend, &ui);
    match backend.layout(container, None) {
        Err(HeadlessError::Unsatisfiable(_)) => (),
        other => panic!("expected an unsatisfiable layout, got {:?}", other.map(|f| f.len())),
    }
}
