use mxchange_exchange::{EndExchangeForm, ExchangeEndRequest, validate_end};
use time::{Date, Month};

fn form(pairs: &[(&str, &str)]) -> EndExchangeForm {
    pairs.iter().copied().collect()
}

#[test]
fn accepts_date() -> anyhow::Result<()> {
    let request = validate_end(&form(&[("date", "2024-01-02")]))?;

    assert_eq!(
        request,
        ExchangeEndRequest {
            date: Date::from_calendar_date(2024, Month::January, 2)?,
        }
    );

    Ok(())
}

#[test]
fn rejects_missing_date() {
    let cases: [&[(&str, &str)]; 3] = [&[], &[("date", "")], &[("date", "   ")]];
    for pairs in cases {
        let err = validate_end(&form(pairs)).unwrap_err();

        let fields = err.field_errors().unwrap();
        assert_eq!(fields.fields().collect::<Vec<_>>(), vec!["date"]);
        assert_eq!(
            fields.get("date"),
            Some(&["This field is required.".to_owned()][..])
        );
    }
}

#[test]
fn rejects_unparseable_date() {
    let err = validate_end(&form(&[("date", "2024-02-30")])).unwrap_err();

    assert_eq!(
        err.field_errors().unwrap().get("date"),
        Some(&["Not a valid date value.".to_owned()][..])
    );
}

#[test]
fn ignores_unknown_fields() -> anyhow::Result<()> {
    let request = validate_end(&form(&[("date", "2024-01-02"), ("guest", "Alice")]))?;

    assert_eq!(request.date.to_string(), "2024-01-02");

    Ok(())
}

#[test]
fn repeated_date_keeps_first_value() -> anyhow::Result<()> {
    let request = validate_end(&form(&[("date", "2024-01-02"), ("date", "not a date")]))?;

    assert_eq!(request.date.to_string(), "2024-01-02");

    Ok(())
}
