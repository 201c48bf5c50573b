use super::*;
use dinefind_core::City;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["dinefind"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_cities_command() {
    let cli = Cli::try_parse_from(["dinefind", "cities"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Cities)));
}

#[test]
fn list_defaults_to_all_first_page() {
    let cli = Cli::try_parse_from(["dinefind", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::List {
            city: CityFilter::All,
            query: None,
            page: 1,
            json: false
        })
    ));
}

#[test]
fn list_with_city_query_and_page() {
    let cli = Cli::try_parse_from([
        "dinefind", "list", "--city", "Mumbai", "--query", "pav bhaji", "--page", "2", "--json",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::List {
            city: CityFilter::City(City::Mumbai),
            query: Some(ref q),
            page: 2,
            json: true
        }) if q == "pav bhaji"
    ));
}

#[test]
fn list_rejects_unknown_city() {
    let result = Cli::try_parse_from(["dinefind", "list", "--city", "Springfield"]);
    assert!(result.is_err());
}

#[test]
fn browse_accepts_starting_city() {
    let cli = Cli::try_parse_from(["dinefind", "browse", "--city", "bangalore"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Browse {
            city: CityFilter::City(City::Bangalore)
        })
    ));
}
