use crate::Route;

#[test]
fn test_parse_known_paths() {
    assert_eq!(Route::parse("/"), Route::Root);
    assert_eq!(Route::parse(""), Route::Root);
    assert_eq!(Route::parse("/login"), Route::Login);
    assert_eq!(Route::parse("/register"), Route::Register);
    assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
    assert_eq!(Route::parse("/settings"), Route::Settings);
    assert_eq!(Route::parse("/configuracion"), Route::Settings);
}

#[test]
fn test_parse_strips_hash_query_and_trailing_slash() {
    assert_eq!(Route::parse("#/dashboard"), Route::Dashboard);
    assert_eq!(Route::parse("/dashboard/"), Route::Dashboard);
    assert_eq!(Route::parse("/settings?tab=email"), Route::Settings);
}

#[test]
fn test_parse_unknown_path() {
    assert_eq!(
        Route::parse("/pay-services"),
        Route::Unknown("/pay-services".to_string())
    );
}

#[test]
fn test_path_round_trips_through_parse() {
    for route in [
        Route::Root,
        Route::Login,
        Route::Register,
        Route::Dashboard,
        Route::Settings,
    ] {
        assert_eq!(Route::parse(route.path()), route);
    }
}
