use super::*;

#[test]
fn parses_catalog_command() {
    let cli = Cli::try_parse_from(["showroom", "catalog"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Catalog { json: false })
    ));
}

#[test]
fn parses_catalog_json_flag() {
    let cli =
        Cli::try_parse_from(["showroom", "catalog", "--json"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Catalog { json: true })));
}

#[test]
fn parses_detail_with_several_ids() {
    let cli = Cli::try_parse_from(["showroom", "detail", "brio-rs", "hrv"])
        .expect("expected valid cli args");
    match cli.command {
        Some(Commands::Detail { ids }) => assert_eq!(ids, ["brio-rs", "hrv"]),
        other => panic!("expected Detail, got: {other:?}"),
    }
}

#[test]
fn detail_requires_an_id() {
    assert!(Cli::try_parse_from(["showroom", "detail"]).is_err());
}

#[test]
fn parses_contact_command() {
    let cli = Cli::try_parse_from(["showroom", "contact", "wrv"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Contact { ref id }) if id == "wrv"
    ));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["showroom"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}
