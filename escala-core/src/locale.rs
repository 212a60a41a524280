use serde::Serializer;
use time::{Month, Weekday};

/// Abbreviated Portuguese weekday name, as printed on the coverage board.
pub fn weekday_abbr_pt(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "Dom",
        Weekday::Monday => "Seg",
        Weekday::Tuesday => "Ter",
        Weekday::Wednesday => "Qua",
        Weekday::Thursday => "Qui",
        Weekday::Friday => "Sex",
        Weekday::Saturday => "Sáb",
    }
}

/// Serializes a weekday as its abbreviated Portuguese name.
pub fn serialize_weekday_pt<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_abbr_pt(*weekday))
}

/// Portuguese month name.
pub fn month_name_pt(month: Month) -> &'static str {
    match month {
        Month::January => "Janeiro",
        Month::February => "Fevereiro",
        Month::March => "Março",
        Month::April => "Abril",
        Month::May => "Maio",
        Month::June => "Junho",
        Month::July => "Julho",
        Month::August => "Agosto",
        Month::September => "Setembro",
        Month::October => "Outubro",
        Month::November => "Novembro",
        Month::December => "Dezembro",
    }
}
