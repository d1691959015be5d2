use wordcase::Error;
use wordcase_derive::WordCase;

/// Columns of a table, named in snake_case.
///
/// # Explanation
///
/// - `#[word_case(rename_all = "...")]` picks the style for every variant. Any spelling that
///   `wordcase::Case` parses works, e.g. `snake`, `snake_case` or `snakeCase`.
/// - `#[word_case(rename = "...")]` overrides a single name, verbatim.
/// - Deriving `WordCase` generates `CASE_NAMES`, `case_name()`, `Display` and `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WordCase)]
#[word_case(rename_all = "snake_case")]
pub enum Column {
    UserID,
    CreatedAt,
    V2Feature,
    #[word_case(rename = "ts")]
    Timestamp,
}

#[derive(Debug, PartialEq, WordCase)]
#[word_case(rename_all = "kebab")]
enum Flag {
    DryRun,
    NoCache,
    Verbose,
}

#[allow(non_camel_case_types)]
#[derive(Debug, PartialEq, WordCase)]
#[word_case(rename_all = "camelCase")]
enum JsonField {
    first_name,
    LAST_NAME,
    r#type,
}

#[derive(Debug, PartialEq, WordCase)]
#[word_case(rename_all = "dot.case")]
enum Setting {
    ServerPort,
    LogLevel,
}

#[derive(Debug, PartialEq, WordCase)]
#[word_case(rename_all = "dollar-camel")]
enum Template {
    UserName2,
    #[word_case(rename = "id$")]
    Identifier,
}

#[test]
fn test_case_names() {
    assert_eq!(
        Column::CASE_NAMES,
        ["user_id", "created_at", "v2_feature", "ts"]
    );
    assert_eq!(Flag::CASE_NAMES, ["dry-run", "no-cache", "verbose"]);
    assert_eq!(JsonField::CASE_NAMES, ["firstName", "lastName", "type"]);
    assert_eq!(Setting::CASE_NAMES, ["server.port", "log.level"]);
    assert_eq!(Template::CASE_NAMES, ["username", "id$"]);
}

#[test]
fn test_case_name_and_display() {
    assert_eq!(Column::CreatedAt.case_name(), "created_at");
    assert_eq!(Flag::DryRun.to_string(), "dry-run");
    assert_eq!(format!("--{}", Flag::NoCache), "--no-cache");
    assert_eq!(JsonField::r#type.case_name(), "type");

    const NAME: &str = Setting::ServerPort.case_name();
    assert_eq!(NAME, "server.port");
}

#[test]
fn test_from_str() {
    assert_eq!("user_id".parse::<Column>().unwrap(), Column::UserID);
    assert_eq!("ts".parse::<Column>().unwrap(), Column::Timestamp);
    assert_eq!("verbose".parse::<Flag>().unwrap(), Flag::Verbose);
    assert_eq!("id$".parse::<Template>().unwrap(), Template::Identifier);

    // Names are matched exactly, not converted.
    let err = "UserID".parse::<Column>().unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownName { type_name: "Column", ref name } if name == "UserID"
    ));
    assert_eq!(err.to_string(), "'UserID' is not a valid Column name");

    assert!("timestamp".parse::<Column>().is_err());
}

#[test]
fn test_names_round_trip() {
    for name in Column::CASE_NAMES {
        let column: Column = name.parse().unwrap();
        assert_eq!(column.case_name(), *name);
    }
}
