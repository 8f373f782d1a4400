use wayfarer_core::add::{PLACEHOLDER_LATITUDE, PLACEHOLDER_LONGITUDE};
use wayfarer_core::auth::MISSING_FIELDS_MESSAGE;
use wayfarer_core::browse::ROW_LINE_WIDTH;
use wayfarer_core::map::DEFAULT_ZOOM;
use wayfarer_core::{
    seed_destinations, AddDestinationForm, AddedDestinationPolicy, BrowseState, Destination,
    DestinationRow, ImageAsset, LoginForm, LoginOutcome, NavEvent, Navigator, Screen,
};

/// Drive the login screen the way the shell does.
fn log_in(nav: &mut Navigator, username: &str, password: &str) -> LoginForm {
    let mut form = LoginForm::new();
    form.username = username.into();
    form.password = password.into();
    if form.submit() == LoginOutcome::Authenticated {
        nav.authenticate().unwrap();
    }
    form
}

fn logged_in(policy: AddedDestinationPolicy) -> Navigator {
    let mut nav = Navigator::new(seed_destinations(), policy);
    log_in(&mut nav, "traveller", "hunter2");
    nav
}

#[test]
fn filled_login_reaches_main_list() {
    let mut nav = Navigator::default();
    let form = log_in(&mut nav, "traveller", "hunter2");
    assert_eq!(form.error(), None);
    assert_eq!(nav.screen(), Screen::MainList);
    assert!(nav.is_authenticated());
}

#[test]
fn empty_login_field_stays_on_authentication() {
    for (u, p) in [("", "pw"), ("user", ""), ("", "")] {
        let mut nav = Navigator::default();
        let form = log_in(&mut nav, u, p);
        assert_eq!(form.error(), Some(MISSING_FIELDS_MESSAGE));
        assert_eq!(nav.screen(), Screen::Authentication);
        assert!(!nav.is_authenticated());
    }
}

#[test]
fn seed_list_renders_five_rows_in_order() {
    let nav = logged_in(AddedDestinationPolicy::Append);
    let rows = DestinationRow::rows(nav.destinations(), ROW_LINE_WIDTH);
    assert_eq!(rows.len(), 5);
    for (row, dest) in rows.iter().zip(seed_destinations()) {
        assert_eq!(row.name, dest.name());
        assert!(row.summary.lines().count() <= 2);
        assert_eq!(row.image, dest.image());
    }
}

#[test]
fn selecting_row_centres_map_on_destination() {
    let nav = logged_in(AddedDestinationPolicy::Append);
    let mut browse = BrowseState::new();
    for i in 0..nav.destinations().len() {
        browse.select(i, nav.destinations().len()).unwrap();
        let detail = browse.detail(nav.destinations(), DEFAULT_ZOOM).unwrap();
        let d = &nav.destinations()[i];
        assert_eq!(detail.map.center.latitude, d.latitude());
        assert_eq!(detail.map.center.longitude, d.longitude());
        assert_eq!(detail.map.zoom, DEFAULT_ZOOM);
    }
}

fn submit_foo_bar(nav: &mut Navigator) -> Destination {
    nav.open_add().unwrap();
    let mut form = AddDestinationForm::new();
    form.name = "Foo".into();
    form.description = "Bar".into();
    let created = form.submit();
    nav.finish_add(created.clone()).unwrap();
    created
}

#[test]
fn add_with_discard_policy_keeps_list_unchanged() {
    let mut nav = logged_in(AddedDestinationPolicy::Discard);
    let created = submit_foo_bar(&mut nav);

    assert_eq!(
        created,
        Destination::new(
            "Foo",
            "Bar",
            PLACEHOLDER_LATITUDE,
            PLACEHOLDER_LONGITUDE,
            ImageAsset::PLACEHOLDER
        )
    );
    assert_eq!(nav.screen(), Screen::MainList);
    assert_eq!(nav.destinations(), seed_destinations().as_slice());
}

#[test]
fn add_with_append_policy_grows_list_by_one() {
    let mut nav = logged_in(AddedDestinationPolicy::Append);
    let before = nav.destinations().len();
    let created = submit_foo_bar(&mut nav);

    assert_eq!(nav.screen(), Screen::MainList);
    assert_eq!(nav.destinations().len(), before + 1);
    assert_eq!(nav.destinations().last(), Some(&created));
}

#[test]
fn cancel_returns_without_creating_anything() {
    let mut nav = logged_in(AddedDestinationPolicy::Append);
    nav.open_add().unwrap();
    nav.drain_events();
    nav.cancel_add().unwrap();

    assert_eq!(nav.screen(), Screen::MainList);
    assert_eq!(nav.destinations().len(), 5);
    assert_eq!(
        nav.drain_events(),
        vec![NavEvent::ScreenChanged {
            from: Screen::AddDestination,
            to: Screen::MainList
        }]
    );
}
