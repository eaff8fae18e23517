use canvas_client::{Config, Error};

#[test]
fn an_empty_base_url_is_a_configuration_error() {
    let err = Config::new("", "token").unwrap_err();

    assert!(matches!(err, Error::Configuration("CANVAS_BASE")));
}

#[test]
fn an_empty_token_is_a_configuration_error() {
    let err = Config::new("https://canvas.test", "").unwrap_err();

    assert!(matches!(err, Error::Configuration("CANVAS_TOKEN")));
}

#[test]
fn debug_output_never_leaks_the_token() {
    let config = Config::new("https://canvas.test", "sekrit-token").unwrap();

    assert!(!format!("{:?}", config).contains("sekrit"));
}

// The only test touching process environment, kept together so parallel
// test threads can't race on the variables.
#[test]
fn from_env_requires_both_variables() {
    std::env::remove_var("CANVAS_BASE");
    std::env::remove_var("CANVAS_TOKEN");
    assert!(matches!(
        Config::from_env(),
        Err(Error::Configuration("CANVAS_BASE"))
    ));

    std::env::set_var("CANVAS_BASE", "https://canvas.test");
    assert!(matches!(
        Config::from_env(),
        Err(Error::Configuration("CANVAS_TOKEN"))
    ));

    std::env::set_var("CANVAS_TOKEN", "token");
    assert!(Config::from_env().is_ok());
}
