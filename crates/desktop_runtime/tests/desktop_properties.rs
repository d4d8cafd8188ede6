use std::collections::BTreeSet;

use pretty_assertions::assert_eq;

use desktop_runtime::desktop_icons::IconPositions;
use desktop_runtime::selection::icons_in_marquee;
use desktop_runtime::{
    catalog, reduce_desktop, search_projects, DesktopAction, DesktopState, InteractionState,
    Marquee, Point, Project, ShellFeatures, Viewport, WindowId, WindowRegistry,
};

fn boot() -> (DesktopState, InteractionState) {
    (
        DesktopState::boot(catalog(), ShellFeatures::default(), Some(Viewport::new(1440, 900))),
        InteractionState::default(),
    )
}

fn run(state: &mut DesktopState, interaction: &mut InteractionState, action: DesktopAction) {
    reduce_desktop(state, interaction, action).expect("action applies");
}

fn z_of(registry: &WindowRegistry, id: &WindowId) -> u32 {
    registry.get(id).expect("window exists").z_index
}

#[test]
fn z_order_is_monotonic_across_open_focus_and_project_calls() {
    let mut registry = WindowRegistry::from_catalog(catalog());
    let project = Project::new("demo", "Demo", "demo project");
    let mut last_z = registry.max_z_index();

    let steps: Vec<Box<dyn Fn(&mut WindowRegistry) -> WindowId>> = vec![
        Box::new(|r: &mut WindowRegistry| {
            r.open(&WindowId::from("hci"), None);
            WindowId::from("hci")
        }),
        Box::new(|r: &mut WindowRegistry| {
            r.open(&WindowId::from("about"), None);
            WindowId::from("about")
        }),
        Box::new(move |r: &mut WindowRegistry| r.open_or_focus_project(&project, None)),
        Box::new(|r: &mut WindowRegistry| {
            r.focus(&WindowId::from("hci"));
            WindowId::from("hci")
        }),
        Box::new(|r: &mut WindowRegistry| {
            r.open(&WindowId::from("cv"), None);
            WindowId::from("cv")
        }),
    ];

    for step in steps {
        let touched = step(&mut registry);
        let z = z_of(&registry, &touched);
        assert!(z > last_z, "{touched} got z {z}, expected above {last_z}");
        last_z = z;
        assert_eq!(registry.top_window().map(|w| w.id.clone()), Some(touched));
    }

    let open_z: Vec<u32> = registry.ordered_open_windows().iter().map(|w| w.z_index).collect();
    let unique: BTreeSet<u32> = open_z.iter().copied().collect();
    assert_eq!(unique.len(), open_z.len());
}

#[test]
fn focusing_the_top_window_is_idempotent() {
    let (mut state, mut interaction) = boot();
    run(
        &mut state,
        &mut interaction,
        DesktopAction::OpenWindow {
            window_id: WindowId::from("web_ai"),
        },
    );
    let before = state.clone();
    let effects = reduce_desktop(
        &mut state,
        &mut interaction,
        DesktopAction::FocusWindow {
            window_id: WindowId::from("web_ai"),
        },
    )
    .expect("focus");
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn project_windows_are_deduplicated() {
    let (mut state, mut interaction) = boot();
    for _ in 0..2 {
        run(
            &mut state,
            &mut interaction,
            DesktopAction::OpenProject {
                project_id: "gd-5".to_string(),
            },
        );
        run(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                window_id: WindowId::from("about"),
            },
        );
    }
    run(
        &mut state,
        &mut interaction,
        DesktopAction::OpenProject {
            project_id: "gd-5".to_string(),
        },
    );

    let id = WindowId::project("gd-5");
    assert_eq!(state.windows.iter().filter(|w| w.id == id).count(), 1);
    let window = state.windows.get(&id).expect("project window");
    assert!(window.is_open);
    assert_eq!(window.z_index, state.windows.max_z_index());
}

#[test]
fn marquee_selects_exactly_the_overlapping_icons() {
    let positions: IconPositions = [
        ("a".to_string(), Point::new(100, 100)),
        ("b".to_string(), Point::new(400, 100)),
    ]
    .into_iter()
    .collect();

    let hit = Marquee {
        start: Point::new(50, 50),
        current: Point::new(150, 150),
    };
    assert_eq!(
        icons_in_marquee(&positions, hit, 110),
        BTreeSet::from(["a".to_string()])
    );

    let miss = Marquee {
        start: Point::new(300, 300),
        current: Point::new(400, 400),
    };
    assert!(icons_in_marquee(&positions, miss, 110).is_empty());
}

#[test]
fn group_drag_translates_every_selected_icon_by_the_same_delta() {
    let (mut state, mut interaction) = boot();
    let before = state.icons.clone();
    state.selection.selected = BTreeSet::from(["hci".to_string(), "graphic".to_string()]);

    run(
        &mut state,
        &mut interaction,
        DesktopAction::PressIcon {
            icon_id: "hci".to_string(),
            pointer: Point::new(1300, 100),
            shift: false,
        },
    );
    // A plain press on an icon inside a multi-selection narrows it to that icon.
    assert_eq!(state.selection.selected, BTreeSet::from(["hci".to_string()]));
    run(&mut state, &mut interaction, DesktopAction::PointerReleased);

    run(
        &mut state,
        &mut interaction,
        DesktopAction::PressIcon {
            icon_id: "graphic".to_string(),
            pointer: Point::new(1300, 340),
            shift: true,
        },
    );
    run(
        &mut state,
        &mut interaction,
        DesktopAction::PointerMoved {
            pointer: Point::new(1150, 400),
        },
    );
    run(&mut state, &mut interaction, DesktopAction::PointerReleased);

    assert_eq!(state.icons.get("hci"), before.get("hci").offset(-150, 60));
    assert_eq!(state.icons.get("graphic"), before.get("graphic").offset(-150, 60));
    assert_eq!(state.icons.get("game_xr"), before.get("game_xr"));
    assert_eq!(state.icons.get("web_ai"), before.get("web_ai"));
}

#[test]
fn resizing_never_goes_below_the_minimum_size() {
    let (mut state, mut interaction) = boot();
    let hci = WindowId::from("hci");
    run(
        &mut state,
        &mut interaction,
        DesktopAction::OpenWindow {
            window_id: hci.clone(),
        },
    );
    run(
        &mut state,
        &mut interaction,
        DesktopAction::BeginWindowResize {
            window_id: hci.clone(),
            pointer: Point::new(1000, 700),
        },
    );
    run(
        &mut state,
        &mut interaction,
        DesktopAction::PointerMoved {
            pointer: Point::new(0, 0),
        },
    );

    let rect = state.windows.get(&hci).and_then(|w| w.layout).expect("layout").rect;
    assert_eq!((rect.w, rect.h), (200, 150));
}

#[test]
fn dragging_stops_at_the_menu_bar() {
    let (mut state, mut interaction) = boot();
    let cv = WindowId::from("cv");
    run(
        &mut state,
        &mut interaction,
        DesktopAction::OpenWindow {
            window_id: cv.clone(),
        },
    );
    run(
        &mut state,
        &mut interaction,
        DesktopAction::BeginWindowDrag {
            window_id: cv.clone(),
            pointer: Point::new(700, 60),
        },
    );
    run(
        &mut state,
        &mut interaction,
        DesktopAction::PointerMoved {
            pointer: Point::new(650, -400),
        },
    );

    let rect = state.windows.get(&cv).and_then(|w| w.layout).expect("layout").rect;
    assert_eq!(rect.y, 32);
}

#[test]
fn blank_search_returns_nothing() {
    assert!(catalog().search("").is_empty());
    assert!(catalog().search("   ").is_empty());
    assert!(search_projects(catalog().all_projects(), " \n ").is_empty());
}

#[test]
fn open_then_close_keeps_the_descriptor() {
    let (mut state, mut interaction) = boot();
    let hci = WindowId::from("hci");
    assert!(!state.windows.get(&hci).expect("hci").is_open);

    run(
        &mut state,
        &mut interaction,
        DesktopAction::OpenWindow {
            window_id: hci.clone(),
        },
    );
    let opened = state.windows.get(&hci).cloned().expect("hci");
    assert!(opened.is_open);

    run(
        &mut state,
        &mut interaction,
        DesktopAction::CloseWindow {
            window_id: hci.clone(),
        },
    );
    let closed = state.windows.get(&hci).expect("hci");
    assert!(!closed.is_open);
    assert_eq!(closed.title, opened.title);
    assert_eq!(closed.kind(), opened.kind());
    assert_eq!(closed.z_index, opened.z_index);
}
