//! Entity/year value lookup over parsed records.

use tracing::debug;

use crate::model::Record;

/// Column holding the entity (country/region/"World") name.
pub const ENTITY_COLUMN: &str = "Entity";
/// Column holding the observation year.
pub const YEAR_COLUMN: &str = "Year";
/// Life-expectancy value column in the upstream dataset.
pub const DEFAULT_VALUE_COLUMN: &str =
    "Period life expectancy at birth - Sex: total - Age: 0";

/// Find the value for `entity` in `year`.
///
/// Linear scan with first-match semantics: the first record whose entity
/// column equals `entity` exactly and whose year column parses as `year`
/// wins. Year cells tolerate surrounding whitespace; non-numeric year cells
/// are non-matching, not errors. Returns `None` when no record matches or
/// when the matched record's value cell is missing or non-numeric.
pub fn find_value(
    records: &[Record],
    entity: &str,
    year: i32,
    value_column: &str,
) -> Option<f64> {
    let record = records.iter().find(|r| {
        r.get(ENTITY_COLUMN) == Some(entity)
            && r.get(YEAR_COLUMN)
                .and_then(|y| y.trim().parse::<i32>().ok())
                == Some(year)
    })?;

    let value = record.get(value_column)?.trim().parse::<f64>().ok();
    if value.is_none() {
        debug!(entity, year, "matched record has a non-numeric value cell");
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_table;

    fn records() -> Vec<Record> {
        parse_table(
            "Entity,Year,V\n\
             World,2019,71.5\n\
             World,2020,72.0\n\
             World,2020,99.9\n\
             Europe,2020,78.1\n\
             Narnia,unknown,50.0\n\
             Mordor,2020,low",
        )
    }

    #[test]
    fn finds_matching_entity_and_year() {
        assert_eq!(find_value(&records(), "World", 2020, "V"), Some(72.0));
        assert_eq!(find_value(&records(), "Europe", 2020, "V"), Some(78.1));
    }

    #[test]
    fn first_match_wins_on_duplicates() {
        // Two World/2020 rows; the scan stops at the first.
        assert_eq!(find_value(&records(), "World", 2020, "V"), Some(72.0));
    }

    #[test]
    fn no_match_for_unknown_year() {
        assert_eq!(find_value(&records(), "World", 2021, "V"), None);
    }

    #[test]
    fn no_match_for_unknown_entity() {
        assert_eq!(find_value(&records(), "Asia", 2020, "V"), None);
    }

    #[test]
    fn non_numeric_year_cell_never_matches() {
        assert_eq!(find_value(&records(), "Narnia", 0, "V"), None);
    }

    #[test]
    fn non_numeric_value_cell_is_absent() {
        assert_eq!(find_value(&records(), "Mordor", 2020, "V"), None);
    }

    #[test]
    fn year_cell_whitespace_is_tolerated() {
        // Built by hand: parse_table already trims cells, and the lookup must
        // tolerate whitespace on its own.
        let record: Record = [("Entity", "World"), ("Year", " 2020 "), ("V", " 72.0 ")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(find_value(&[record], "World", 2020, "V"), Some(72.0));
    }

    #[test]
    fn missing_value_column_is_absent() {
        let records = parse_table("Entity,Year\nWorld,2020");
        assert_eq!(find_value(&records, "World", 2020, "V"), None);
    }
}
